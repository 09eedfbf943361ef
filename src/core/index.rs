use crate::core::error::{ClangError, ClangResult};
use crate::core::translation_unit::TranslationUnit;
use crate::core::unsaved::UnsavedFile;
use crate::internal::utils::path_to_cstring;
use crate::types::{GlobalOptions, TranslationUnitFlags};
use cindex_sys::*;
use log::debug;
use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

/// A set of translation units that share precompiled headers and
/// process-wide options.
///
/// Every [`TranslationUnit`] parsed from an index borrows it, so the index
/// is disposed only after all of its units are gone.
///
/// # Thread Safety
///
/// libclang allows units of the same index to be parsed and queried from
/// different threads, so `Index` is `Send + Sync`. Changing the global
/// options requires `&mut self`.
///
/// # Examples
///
/// ```no_run
/// use cindex::prelude::*;
///
/// let index = Index::new(false, false)?;
/// let unit = index
///     .parser("main.c")
///     .arguments(&["-std=c11"])
///     .parse()?;
/// println!("{}", unit.spelling());
/// # Ok::<(), cindex::ClangError>(())
/// ```
#[derive(Debug)]
pub struct Index {
    inner: NonNull<c_void>,
}

unsafe impl Send for Index {}
unsafe impl Sync for Index {}

impl Index {
    /// Creates a new index.
    ///
    /// # Arguments
    /// * `exclude_declarations_from_pch` - Cursor traversal skips
    ///   declarations that come from a precompiled header.
    /// * `display_diagnostics` - libclang prints diagnostics to stderr
    ///   while parsing.
    pub fn new(exclude_declarations_from_pch: bool, display_diagnostics: bool) -> ClangResult<Index> {
        let raw = unsafe {
            clang_createIndex(
                exclude_declarations_from_pch as i32,
                display_diagnostics as i32,
            )
        };
        let inner = NonNull::new(raw).ok_or(ClangError::IndexCreation)?;
        debug!("created libclang index");
        Ok(Index { inner })
    }

    pub(crate) fn as_raw(&self) -> CXIndex {
        self.inner.as_ptr()
    }

    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions::from_bits_retain(unsafe { clang_CXIndex_getGlobalOptions(self.as_raw()) } as u32)
    }

    pub fn set_global_options(&mut self, options: GlobalOptions) {
        unsafe { clang_CXIndex_setGlobalOptions(self.as_raw(), options.bits() as _) }
    }

    /// Directs libclang to write a reproduction file into `path` when a
    /// parse crashes. `None` turns it off.
    pub fn set_invocation_emission_path(&mut self, path: Option<&Path>) -> ClangResult<()> {
        let path = path.map(path_to_cstring).transpose()?;
        let ptr = path.as_ref().map_or(std::ptr::null(), |path| path.as_ptr());
        unsafe { clang_CXIndex_setInvocationEmissionPathOption(self.as_raw(), ptr) };
        Ok(())
    }

    /// Starts building a parse of the source file at `path`.
    pub fn parser(&self, path: impl Into<PathBuf>) -> Parser<'_> {
        Parser {
            index: self,
            path: path.into(),
            arguments: Vec::new(),
            unsaved: Vec::new(),
            flags: TranslationUnitFlags::NONE,
        }
    }
}

impl Drop for Index {
    fn drop(&mut self) {
        debug!("disposing libclang index");
        unsafe { clang_disposeIndex(self.inner.as_ptr()) }
    }
}

/// Builder for [`TranslationUnit::parse`].
#[derive(Debug, Clone)]
pub struct Parser<'idx> {
    index: &'idx Index,
    path: PathBuf,
    arguments: Vec<String>,
    unsaved: Vec<UnsavedFile>,
    flags: TranslationUnitFlags,
}

impl<'idx> Parser<'idx> {
    /// Compiler arguments, without the compiler executable itself.
    pub fn arguments<S: AsRef<str>>(&mut self, arguments: &[S]) -> &mut Self {
        self.arguments = arguments.iter().map(|arg| arg.as_ref().to_string()).collect();
        self
    }

    pub fn unsaved_files(&mut self, files: &[UnsavedFile]) -> &mut Self {
        self.unsaved = files.to_vec();
        self
    }

    pub fn flags(&mut self, flags: TranslationUnitFlags) -> &mut Self {
        self.flags = flags;
        self
    }

    pub fn detailed_preprocessing_record(&mut self, enabled: bool) -> &mut Self {
        self.flags.set(TranslationUnitFlags::DETAILED_PREPROCESSING_RECORD, enabled);
        self
    }

    pub fn skip_function_bodies(&mut self, enabled: bool) -> &mut Self {
        self.flags.set(TranslationUnitFlags::SKIP_FUNCTION_BODIES, enabled);
        self
    }

    pub fn keep_going(&mut self, enabled: bool) -> &mut Self {
        self.flags.set(TranslationUnitFlags::KEEP_GOING, enabled);
        self
    }

    pub fn parse(&self) -> ClangResult<TranslationUnit<'idx>> {
        TranslationUnit::parse(
            self.index,
            &self.path,
            &self.arguments,
            &self.unsaved,
            self.flags,
        )
    }
}
