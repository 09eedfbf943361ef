use crate::core::cursor::Cursor;
use crate::core::diagnostic::{Diagnostic, DiagnosticSet};
use crate::core::error::{ClangError, ClangResult};
use crate::core::index::Index;
use crate::core::resource_usage::ResourceUsage;
use crate::core::source::{File, SourceLocation, SourceRange};
use crate::core::token::Token;
use crate::core::unsaved::{NativeUnsavedFiles, UnsavedFile};
use crate::internal::utils::{CStringArray, from_cx_string, path_to_cstring};
use crate::internal::visitor;
use crate::types::{
    ErrorCode, Language, NativeEnum, ReparseFlags, SaveError, SaveFlags, TranslationUnitFlags,
};
use log::{debug, trace};
use cindex_sys::*;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::path::Path;
use std::ptr::{self, NonNull};

/// The index a unit was parsed against: either borrowed from the caller
/// or owned by the unit itself.
#[derive(Debug)]
enum IndexHandle<'idx> {
    Owned(Index),
    Borrowed(&'idx Index),
}

impl IndexHandle<'_> {
    fn get(&self) -> &Index {
        match self {
            IndexHandle::Owned(index) => index,
            IndexHandle::Borrowed(index) => index,
        }
    }
}

/// A single parsed source file together with everything it includes.
///
/// The unit owns the native handle and disposes it on drop. Cursors, types
/// and tokens borrow the unit, so they cannot outlive it, and a reparse
/// (which takes `&mut self`) cannot happen while any of them are alive.
///
/// # Examples
///
/// ```no_run
/// use cindex::prelude::*;
///
/// let unit = TranslationUnit::from_source(
///     "int answer(void) { return 42; }",
///     Language::C,
///     &[] as &[&str],
///     TranslationUnitFlags::NONE,
/// )?;
/// for child in unit.cursor().children() {
///     println!("{} {}", child.kind(), child.spelling());
/// }
/// # Ok::<(), cindex::ClangError>(())
/// ```
#[derive(Debug)]
pub struct TranslationUnit<'idx> {
    inner: NonNull<CXTranslationUnitImpl>,
    index: IndexHandle<'idx>,
}

unsafe impl Send for TranslationUnit<'_> {}

impl<'idx> TranslationUnit<'idx> {
    /// Parses the source file at `path` with the given compiler arguments.
    ///
    /// `arguments` excludes the compiler executable. `unsaved` supplies
    /// in-memory contents for files that are not (or not yet) on disk.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse<S: AsRef<str>>(
        index: &'idx Index,
        path: impl AsRef<Path>,
        arguments: &[S],
        unsaved: &[UnsavedFile],
        flags: TranslationUnitFlags,
    ) -> ClangResult<Self> {
        Self::parse_with(
            IndexHandle::Borrowed(index),
            path.as_ref(),
            arguments,
            unsaved,
            flags,
        )
    }

    /// Loads a unit previously written with [`TranslationUnit::save`].
    pub fn from_ast_file(index: &'idx Index, path: impl AsRef<Path>) -> ClangResult<Self> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        let mut raw: CXTranslationUnit = ptr::null_mut();
        let code = unsafe { clang_createTranslationUnit2(index.as_raw(), c_path.as_ptr(), &mut raw) };
        ClangError::from_code(code as i32, ClangError::Parse)?;
        let inner = NonNull::new(raw).ok_or(ClangError::Parse(ErrorCode::Failure))?;
        debug!("loaded translation unit from {}", path.display());
        Ok(TranslationUnit {
            inner,
            index: IndexHandle::Borrowed(index),
        })
    }

    fn parse_with<S: AsRef<str>>(
        index: IndexHandle<'idx>,
        path: &Path,
        arguments: &[S],
        unsaved: &[UnsavedFile],
        flags: TranslationUnitFlags,
    ) -> ClangResult<Self> {
        let c_path = path_to_cstring(path)?;
        let arguments = CStringArray::new(arguments)?;
        let mut files = NativeUnsavedFiles::new(unsaved)?;
        let mut raw: CXTranslationUnit = ptr::null_mut();
        let code = unsafe {
            clang_parseTranslationUnit2(
                index.get().as_raw(),
                c_path.as_ptr(),
                arguments.as_ptr(),
                arguments.len(),
                files.as_mut_ptr(),
                files.len(),
                flags.bits() as _,
                &mut raw,
            )
        };
        ClangError::from_code(code as i32, ClangError::Parse)?;
        let inner = NonNull::new(raw).ok_or(ClangError::Parse(ErrorCode::Failure))?;
        debug!("parsed translation unit {}", path.display());
        Ok(TranslationUnit { inner, index })
    }

    pub(crate) fn as_raw(&self) -> CXTranslationUnit {
        self.inner.as_ptr()
    }

    /// The index this unit was parsed against.
    pub fn index(&self) -> &Index {
        self.index.get()
    }

    /// Reparses the unit from its original source files, with `unsaved`
    /// overriding their contents.
    ///
    /// On failure libclang leaves the unit unusable; drop it and parse
    /// again.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn reparse(&mut self, unsaved: &[UnsavedFile], flags: ReparseFlags) -> ClangResult<()> {
        let mut files = NativeUnsavedFiles::new(unsaved)?;
        trace!("reparsing {} with {} unsaved files", self.spelling(), files.len());
        let code = unsafe {
            clang_reparseTranslationUnit(self.as_raw(), files.len(), files.as_mut_ptr(), flags.bits() as _)
        };
        ClangError::from_code(code, ClangError::Reparse)
    }

    /// Serializes the unit to an AST file that [`TranslationUnit::from_ast_file`]
    /// can load.
    pub fn save(&self, path: impl AsRef<Path>, flags: SaveFlags) -> ClangResult<()> {
        let c_path = path_to_cstring(path.as_ref())?;
        let code = unsafe { clang_saveTranslationUnit(self.as_raw(), c_path.as_ptr(), flags.bits() as _) };
        match SaveError::from_raw(code) {
            Some(SaveError::None) => Ok(()),
            Some(error) => Err(ClangError::Save(error)),
            None => Err(ClangError::UnknownErrorCode(code)),
        }
    }

    /// Releases memory held by the unit. It is rebuilt by the next
    /// [`TranslationUnit::reparse`]. Returns `false` if libclang refused.
    pub fn suspend(&self) -> bool {
        unsafe { clang_suspendTranslationUnit(self.as_raw()) != 0 }
    }

    pub fn default_save_options(&self) -> SaveFlags {
        SaveFlags::from_bits_retain(unsafe { clang_defaultSaveOptions(self.as_raw()) } as u32)
    }

    pub fn default_reparse_options(&self) -> ReparseFlags {
        ReparseFlags::from_bits_retain(unsafe { clang_defaultReparseOptions(self.as_raw()) } as u32)
    }

    /// The path of the main source file.
    pub fn spelling(&self) -> String {
        from_cx_string(unsafe { clang_getTranslationUnitSpelling(self.as_raw()) })
    }

    /// The root cursor, of kind [`CursorKind::TranslationUnit`](crate::types::CursorKind::TranslationUnit).
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::wrap(unsafe { clang_getTranslationUnitCursor(self.as_raw()) }, self)
    }

    /// The entity at `location`, if there is one.
    pub fn cursor_at(&self, location: SourceLocation<'_>) -> Option<Cursor<'_>> {
        Cursor::from_raw(unsafe { clang_getCursor(self.as_raw(), location.as_raw()) }, self)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic<'_>> {
        let count = unsafe { clang_getNumDiagnostics(self.as_raw()) };
        (0..count)
            .filter_map(|i| Diagnostic::from_raw(unsafe { clang_getDiagnostic(self.as_raw(), i) }))
            .collect()
    }

    /// All diagnostics of the unit as a set, children included.
    pub fn diagnostic_set(&self) -> DiagnosticSet<'_> {
        DiagnosticSet::owned(unsafe { clang_getDiagnosticSetFromTU(self.as_raw()) })
    }

    /// Lexes the tokens inside `range`.
    pub fn tokens(&self, range: SourceRange<'_>) -> Vec<Token<'_>> {
        let mut raw: *mut CXToken = ptr::null_mut();
        let mut count: c_uint = 0;
        unsafe { clang_tokenize(self.as_raw(), range.as_raw(), &mut raw, &mut count) };
        if raw.is_null() {
            return Vec::new();
        }
        let tokens = unsafe { std::slice::from_raw_parts(raw, count as usize) }
            .iter()
            .map(|token| Token::wrap(*token, self))
            .collect();
        unsafe { clang_disposeTokens(self.as_raw(), raw, count) };
        tokens
    }

    /// The token that starts at `location`.
    pub fn token_at(&self, location: SourceLocation<'_>) -> Option<Token<'_>> {
        let raw = unsafe { clang_getToken(self.as_raw(), location.as_raw()) };
        if raw.is_null() {
            return None;
        }
        let token = Token::wrap(unsafe { *raw }, self);
        unsafe { clang_disposeTokens(self.as_raw(), raw, 1) };
        Some(token)
    }

    /// Maps each token to the cursor that best describes it.
    pub fn annotate_tokens(&self, tokens: &[Token<'_>]) -> Vec<Option<Cursor<'_>>> {
        if tokens.is_empty() {
            return Vec::new();
        }
        let mut raw: Vec<CXToken> = tokens.iter().map(|token| token.as_raw()).collect();
        let mut cursors: Vec<CXCursor> = vec![CXCursor::default(); raw.len()];
        unsafe {
            clang_annotateTokens(
                self.as_raw(),
                raw.as_mut_ptr(),
                raw.len() as c_uint,
                cursors.as_mut_ptr(),
            )
        };
        cursors
            .into_iter()
            .map(|cursor| Cursor::from_raw(cursor, self))
            .collect()
    }

    /// Looks up a file that takes part in this unit.
    pub fn file(&self, path: impl AsRef<Path>) -> ClangResult<Option<File<'_>>> {
        let c_path = path_to_cstring(path.as_ref())?;
        Ok(File::from_raw(unsafe { clang_getFile(self.as_raw(), c_path.as_ptr()) }))
    }

    /// The contents libclang parsed for `file`, unsaved overrides included.
    pub fn file_contents(&self, file: &File<'_>) -> Option<String> {
        let mut size: usize = 0;
        let data = unsafe { clang_getFileContents(self.as_raw(), file.as_raw(), &mut size) };
        if data.is_null() {
            return None;
        }
        let bytes = unsafe { std::slice::from_raw_parts(data as *const u8, size) };
        Some(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn is_multiple_include_guarded(&self, file: &File<'_>) -> bool {
        unsafe { clang_isFileMultipleIncludeGuarded(self.as_raw(), file.as_raw()) != 0 }
    }

    /// The location at a 1-based line and column of `file`.
    pub fn location(&self, file: &File<'_>, line: u32, column: u32) -> SourceLocation<'_> {
        SourceLocation::from_raw(unsafe { clang_getLocation(self.as_raw(), file.as_raw(), line, column) })
    }

    /// The location at a byte offset of `file`.
    pub fn location_for_offset(&self, file: &File<'_>, offset: u32) -> SourceLocation<'_> {
        SourceLocation::from_raw(unsafe {
            clang_getLocationForOffset(self.as_raw(), file.as_raw(), offset)
        })
    }

    /// Ranges of `file` skipped by the preprocessor.
    pub fn skipped_ranges(&self, file: &File<'_>) -> Vec<SourceRange<'_>> {
        SourceRange::from_list(unsafe { clang_getSkippedRanges(self.as_raw(), file.as_raw()) })
    }

    /// Ranges skipped by the preprocessor in every file of the unit.
    pub fn all_skipped_ranges(&self) -> Vec<SourceRange<'_>> {
        SourceRange::from_list(unsafe { clang_getAllSkippedRanges(self.as_raw()) })
    }

    /// Memory used by the unit, broken down by category.
    pub fn resource_usage(&self) -> ResourceUsage {
        ResourceUsage::from_unit(self.as_raw())
    }

    /// The target the unit was compiled for.
    pub fn target_info(&self) -> Option<TargetInfo<'_>> {
        let raw = unsafe { clang_getTranslationUnitTargetInfo(self.as_raw()) };
        NonNull::new(raw).map(|inner| TargetInfo {
            inner,
            _marker: PhantomData,
        })
    }

    /// Calls `callback` for every file included by the unit, with the
    /// stack of include locations that led to it (innermost first). The
    /// main file is reported with an empty stack.
    pub fn visit_inclusions<'a, F>(&'a self, mut callback: F)
    where
        F: FnMut(File<'a>, &[SourceLocation<'a>]),
    {
        visitor::visit_inclusions(self.as_raw(), |file, stack| {
            let Some(file) = File::from_raw(file) else {
                return;
            };
            let stack: Vec<SourceLocation<'a>> =
                stack.iter().map(|location| SourceLocation::from_raw(*location)).collect();
            callback(file, &stack);
        });
    }

    /// Collects [`TranslationUnit::visit_inclusions`] into a list.
    pub fn inclusions(&self) -> Vec<Inclusion<'_>> {
        let mut inclusions = Vec::new();
        self.visit_inclusions(|file, stack| {
            inclusions.push(Inclusion {
                file,
                stack: stack.to_vec(),
            })
        });
        inclusions
    }
}

impl TranslationUnit<'static> {
    /// Parses source text held in memory. The unit owns a private index.
    ///
    /// The text is presented to libclang as `main.c`, `main.m` or
    /// `main.cpp` depending on `language`.
    pub fn from_source<S: AsRef<str>>(
        source: &str,
        language: Language,
        arguments: &[S],
        flags: TranslationUnitFlags,
    ) -> ClangResult<Self> {
        let name = language
            .source_file_name()
            .ok_or(ClangError::Parse(ErrorCode::InvalidArguments))?;
        let index = Index::new(false, false)?;
        let unsaved = [UnsavedFile::new(name, source)];
        Self::parse_with(IndexHandle::Owned(index), Path::new(name), arguments, &unsaved, flags)
    }
}

impl Drop for TranslationUnit<'_> {
    fn drop(&mut self) {
        debug!("disposing translation unit");
        unsafe { clang_disposeTranslationUnit(self.inner.as_ptr()) }
    }
}

/// A file included by a unit and the include stack that reached it.
#[derive(Debug, Clone)]
pub struct Inclusion<'tu> {
    pub file: File<'tu>,
    pub stack: Vec<SourceLocation<'tu>>,
}

/// Target information of a translation unit.
#[derive(Debug)]
pub struct TargetInfo<'tu> {
    inner: NonNull<CXTargetInfoImpl>,
    _marker: PhantomData<&'tu ()>,
}

impl TargetInfo<'_> {
    /// The normalized target triple, e.g. `x86_64-unknown-linux-gnu`.
    pub fn triple(&self) -> String {
        from_cx_string(unsafe { clang_TargetInfo_getTriple(self.inner.as_ptr()) })
    }

    /// Pointer width in bits, if libclang knows it.
    pub fn pointer_width(&self) -> Option<u32> {
        let width = unsafe { clang_TargetInfo_getPointerWidth(self.inner.as_ptr()) };
        u32::try_from(width).ok()
    }
}

impl Drop for TargetInfo<'_> {
    fn drop(&mut self) {
        unsafe { clang_TargetInfo_dispose(self.inner.as_ptr()) }
    }
}
