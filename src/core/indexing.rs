//! Callback-driven indexing of a translation unit.
//!
//! [`TranslationUnit::index_with`] walks a parsed unit and reports every
//! declaration and entity reference to an [`IndexerCallbacks`]
//! implementation. The payloads are decoded into owned views before the
//! callback runs.

use crate::core::cursor::Cursor;
use crate::core::diagnostic::DiagnosticSet;
use crate::core::error::{ClangError, ClangResult};
use crate::core::index::Index;
use crate::core::source::{File, SourceLocation};
use crate::core::translation_unit::TranslationUnit;
use crate::internal::utils::read_cstring;
use crate::internal::visitor::CallbackState;
use crate::types::{
    DeclInfoFlags, IdxAttrKind, IdxEntityCxxTemplateKind, IdxEntityKind, IdxEntityLanguage,
    IdxEntityRefKind, IndexOptions, NativeEnum, SymbolRole,
};
use cindex_sys::*;
use log::{debug, trace};
use std::ffi::c_void;
use std::marker::PhantomData;
use std::os::raw::{c_int, c_uint};
use std::ptr::{self, NonNull};

/// A session for indexing one or more units of an index.
#[derive(Debug)]
pub struct IndexAction<'idx> {
    inner: NonNull<c_void>,
    _marker: PhantomData<&'idx Index>,
}

impl<'idx> IndexAction<'idx> {
    pub fn new(index: &'idx Index) -> ClangResult<Self> {
        let raw = unsafe { clang_IndexAction_create(index.as_raw()) };
        let inner = NonNull::new(raw).ok_or(ClangError::IndexActionCreation)?;
        debug!("created index action");
        Ok(IndexAction {
            inner,
            _marker: PhantomData,
        })
    }
}

impl Drop for IndexAction<'_> {
    fn drop(&mut self) {
        debug!("disposing index action");
        unsafe { clang_IndexAction_dispose(self.inner.as_ptr()) }
    }
}

/// Receives the events of an indexing run. Every method defaults to doing
/// nothing.
///
/// A panic in any method stops the run; it is resumed once libclang has
/// returned from [`TranslationUnit::index_with`].
pub trait IndexerCallbacks {
    /// Polled periodically. Returning `true` stops indexing.
    fn abort_query(&mut self) -> bool {
        false
    }

    fn diagnostics(&mut self, _diagnostics: &DiagnosticSet<'_>) {}

    fn entered_main_file(&mut self, _file: File<'_>) {}

    fn included_file(&mut self, _info: &IncludedFileInfo<'_>) {}

    fn started_translation_unit(&mut self) {}

    fn index_declaration(&mut self, _declaration: &DeclInfo<'_>) {}

    fn index_entity_reference(&mut self, _reference: &EntityRef<'_>) {}
}

/// An attribute attached to an indexed entity.
#[derive(Debug, Clone)]
pub struct AttrInfo<'tu> {
    pub kind: Option<IdxAttrKind>,
    pub cursor: Option<Cursor<'tu>>,
    pub location: SourceLocation<'tu>,
}

/// An entity that is declared or referenced.
#[derive(Debug, Clone)]
pub struct EntityInfo<'tu> {
    pub kind: Option<IdxEntityKind>,
    pub template_kind: Option<IdxEntityCxxTemplateKind>,
    pub language: Option<IdxEntityLanguage>,
    pub name: Option<String>,
    pub usr: Option<String>,
    pub cursor: Option<Cursor<'tu>>,
    pub attributes: Vec<AttrInfo<'tu>>,
}

/// A declaration found by the indexer.
#[derive(Debug, Clone)]
pub struct DeclInfo<'tu> {
    pub entity: Option<EntityInfo<'tu>>,
    pub cursor: Option<Cursor<'tu>>,
    pub location: SourceLocation<'tu>,
    pub semantic_container: Option<Cursor<'tu>>,
    pub lexical_container: Option<Cursor<'tu>>,
    pub is_redeclaration: bool,
    pub is_definition: bool,
    pub is_container: bool,
    pub is_implicit: bool,
    pub attributes: Vec<AttrInfo<'tu>>,
    pub flags: DeclInfoFlags,
}

/// A reference to an entity found by the indexer.
#[derive(Debug, Clone)]
pub struct EntityRef<'tu> {
    pub kind: Option<IdxEntityRefKind>,
    pub cursor: Option<Cursor<'tu>>,
    pub location: SourceLocation<'tu>,
    pub referenced_entity: Option<EntityInfo<'tu>>,
    /// The entity whose body contains the reference, e.g. the function a
    /// call appears in.
    pub parent_entity: Option<EntityInfo<'tu>>,
    pub container: Option<Cursor<'tu>>,
    pub role: SymbolRole,
}

/// An `#include` or `#import` seen by the preprocessor.
#[derive(Debug, Clone)]
pub struct IncludedFileInfo<'tu> {
    /// Location of the `#` of the directive.
    pub location: SourceLocation<'tu>,
    /// The name as written in the directive.
    pub filename: String,
    pub file: Option<File<'tu>>,
    pub is_import: bool,
    pub is_angled: bool,
    pub is_module_import: bool,
}

fn decode_location<'tu>(raw: CXIdxLoc) -> SourceLocation<'tu> {
    SourceLocation::from_raw(unsafe { clang_indexLoc_getCXSourceLocation(raw) })
}

fn decode_container<'tu>(raw: *const CXIdxContainerInfo, tu: &'tu TranslationUnit<'tu>) -> Option<Cursor<'tu>> {
    let raw = unsafe { raw.as_ref() }?;
    Cursor::from_raw(raw.cursor, tu)
}

fn decode_attributes<'tu>(
    raw: *const *const CXIdxAttrInfo,
    count: c_uint,
    tu: &'tu TranslationUnit<'tu>,
) -> Vec<AttrInfo<'tu>> {
    if raw.is_null() || count == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(raw, count as usize) }
        .iter()
        .filter_map(|attribute| unsafe { attribute.as_ref() })
        .map(|attribute| AttrInfo {
            kind: IdxAttrKind::from_raw(attribute.kind as i32),
            cursor: Cursor::from_raw(attribute.cursor, tu),
            location: decode_location(attribute.loc),
        })
        .collect()
}

impl<'tu> EntityInfo<'tu> {
    fn from_raw(raw: *const CXIdxEntityInfo, tu: &'tu TranslationUnit<'tu>) -> Option<Self> {
        let raw = unsafe { raw.as_ref() }?;
        Some(EntityInfo {
            kind: IdxEntityKind::from_raw(raw.kind as i32),
            template_kind: IdxEntityCxxTemplateKind::from_raw(raw.templateKind as i32),
            language: IdxEntityLanguage::from_raw(raw.lang as i32),
            name: read_cstring(raw.name),
            usr: read_cstring(raw.USR),
            cursor: Cursor::from_raw(raw.cursor, tu),
            attributes: decode_attributes(raw.attributes, raw.numAttributes, tu),
        })
    }
}

impl<'tu> DeclInfo<'tu> {
    fn from_raw(raw: &CXIdxDeclInfo, tu: &'tu TranslationUnit<'tu>) -> Self {
        DeclInfo {
            entity: EntityInfo::from_raw(raw.entityInfo, tu),
            cursor: Cursor::from_raw(raw.cursor, tu),
            location: decode_location(raw.loc),
            semantic_container: decode_container(raw.semanticContainer, tu),
            lexical_container: decode_container(raw.lexicalContainer, tu),
            is_redeclaration: raw.isRedeclaration != 0,
            is_definition: raw.isDefinition != 0,
            is_container: raw.isContainer != 0,
            is_implicit: raw.isImplicit != 0,
            attributes: decode_attributes(raw.attributes, raw.numAttributes, tu),
            flags: DeclInfoFlags::from_bits_retain(raw.flags as u32),
        }
    }
}

impl<'tu> EntityRef<'tu> {
    fn from_raw(raw: &CXIdxEntityRefInfo, tu: &'tu TranslationUnit<'tu>) -> Self {
        EntityRef {
            kind: IdxEntityRefKind::from_raw(raw.kind as i32),
            cursor: Cursor::from_raw(raw.cursor, tu),
            location: decode_location(raw.loc),
            referenced_entity: EntityInfo::from_raw(raw.referencedEntity, tu),
            parent_entity: EntityInfo::from_raw(raw.parentEntity, tu),
            container: decode_container(raw.container, tu),
            role: SymbolRole::from_bits_retain(raw.role as u32),
        }
    }
}

impl<'tu> IncludedFileInfo<'tu> {
    fn from_raw(raw: &CXIdxIncludedFileInfo) -> Self {
        IncludedFileInfo {
            location: decode_location(raw.hashLoc),
            filename: read_cstring(raw.filename).unwrap_or_default(),
            file: File::from_raw(raw.file),
            is_import: raw.isImport != 0,
            is_angled: raw.isAngled != 0,
            is_module_import: raw.isModuleImport != 0,
        }
    }
}

struct IndexState<'a, 'tu, C> {
    tu: &'tu TranslationUnit<'tu>,
    callbacks: &'a mut C,
}

type State<'a, 'tu, C> = CallbackState<IndexState<'a, 'tu, C>>;

unsafe fn state_from<'s, C: 's>(data: CXClientData) -> &'s mut State<'s, 's, C> {
    unsafe { &mut *(data as *mut State<'s, 's, C>) }
}

unsafe extern "C" fn abort_query_trampoline<C: IndexerCallbacks>(data: CXClientData, _reserved: *mut c_void) -> c_int {
    let state = unsafe { state_from::<C>(data) };
    state.call(|state| state.callbacks.abort_query()).unwrap_or(true) as c_int
}

unsafe extern "C" fn diagnostic_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    diagnostics: CXDiagnosticSet,
    _reserved: *mut c_void,
) {
    let state = unsafe { state_from::<C>(data) };
    state.call(|state| state.callbacks.diagnostics(&DiagnosticSet::borrowed(diagnostics)));
}

unsafe extern "C" fn entered_main_file_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    file: CXFile,
    _reserved: *mut c_void,
) -> CXIdxClientFile {
    let state = unsafe { state_from::<C>(data) };
    if let Some(file) = File::from_raw(file) {
        state.call(|state| state.callbacks.entered_main_file(file));
    }
    ptr::null_mut()
}

unsafe extern "C" fn included_file_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    info: *const CXIdxIncludedFileInfo,
) -> CXIdxClientFile {
    let state = unsafe { state_from::<C>(data) };
    if let Some(info) = unsafe { info.as_ref() } {
        state.call(|state| state.callbacks.included_file(&IncludedFileInfo::from_raw(info)));
    }
    ptr::null_mut()
}

unsafe extern "C" fn started_translation_unit_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    _reserved: *mut c_void,
) -> CXIdxClientContainer {
    let state = unsafe { state_from::<C>(data) };
    state.call(|state| state.callbacks.started_translation_unit());
    ptr::null_mut()
}

unsafe extern "C" fn index_declaration_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    info: *const CXIdxDeclInfo,
) {
    let state = unsafe { state_from::<C>(data) };
    if let Some(info) = unsafe { info.as_ref() } {
        state.call(|state| {
            let declaration = DeclInfo::from_raw(info, state.tu);
            state.callbacks.index_declaration(&declaration)
        });
    }
}

unsafe extern "C" fn index_entity_reference_trampoline<C: IndexerCallbacks>(
    data: CXClientData,
    info: *const CXIdxEntityRefInfo,
) {
    let state = unsafe { state_from::<C>(data) };
    if let Some(info) = unsafe { info.as_ref() } {
        state.call(|state| {
            let reference = EntityRef::from_raw(info, state.tu);
            state.callbacks.index_entity_reference(&reference)
        });
    }
}

impl<'idx> TranslationUnit<'idx> {
    /// Indexes this unit, reporting events to `callbacks`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn index_with<C: IndexerCallbacks>(
        &self,
        action: &IndexAction<'_>,
        callbacks: &mut C,
        options: IndexOptions,
    ) -> ClangResult<()> {
        let mut native = cindex_sys::IndexerCallbacks {
            abortQuery: Some(abort_query_trampoline::<C>),
            diagnostic: Some(diagnostic_trampoline::<C>),
            enteredMainFile: Some(entered_main_file_trampoline::<C>),
            ppIncludedFile: Some(included_file_trampoline::<C>),
            importedASTFile: None,
            startedTranslationUnit: Some(started_translation_unit_trampoline::<C>),
            indexDeclaration: Some(index_declaration_trampoline::<C>),
            indexEntityReference: Some(index_entity_reference_trampoline::<C>),
        };
        let mut state = CallbackState::new(IndexState { tu: self, callbacks });
        trace!("indexing {}", self.spelling());
        let status = unsafe {
            clang_indexTranslationUnit(
                action.inner.as_ptr(),
                state.as_client_data(),
                &mut native,
                std::mem::size_of::<cindex_sys::IndexerCallbacks>() as c_uint,
                options.bits() as c_uint,
                self.as_raw(),
            )
        };
        state.resume_panic();
        match status {
            0 => Ok(()),
            status => Err(ClangError::Indexing(status)),
        }
    }
}
