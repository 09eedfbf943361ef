use crate::core::diagnostic::{Diagnostic, FixIt};
use crate::core::error::{ClangError, ClangResult};
use crate::core::source::SourceRange;
use crate::core::translation_unit::TranslationUnit;
use crate::core::unsaved::{NativeUnsavedFiles, UnsavedFile};
use crate::internal::utils::{from_cx_string, from_cx_string_opt, path_to_cstring};
use crate::types::{
    AvailabilityKind, CodeCompleteFlags, CompletionChunkKind, CompletionContext, CursorKind,
    NativeEnum,
};
use cindex_sys::*;
use log::{debug, trace};
use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::path::Path;
use std::ptr::NonNull;

impl<'idx> TranslationUnit<'idx> {
    /// Runs code completion at a 1-based line and column of `path`.
    ///
    /// The results borrow the unit and must be dropped before it is
    /// reparsed.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn code_complete_at(
        &self,
        path: impl AsRef<Path>,
        line: u32,
        column: u32,
        unsaved: &[UnsavedFile],
        flags: CodeCompleteFlags,
    ) -> ClangResult<CodeCompleteResults<'_>> {
        let c_path = path_to_cstring(path.as_ref())?;
        let mut files = NativeUnsavedFiles::new(unsaved)?;
        trace!("code completion at {}:{}:{}", path.as_ref().display(), line, column);
        let raw = unsafe {
            clang_codeCompleteAt(
                self.as_raw(),
                c_path.as_ptr(),
                line,
                column,
                files.as_mut_ptr(),
                files.len(),
                flags.bits() as _,
            )
        };
        let inner = NonNull::new(raw).ok_or(ClangError::CodeCompletion)?;
        debug!("created code completion results for {}:{}:{}", path.as_ref().display(), line, column);
        Ok(CodeCompleteResults { inner, tu: self })
    }
}

/// The results of one code-completion request. Disposed on drop.
pub struct CodeCompleteResults<'tu> {
    inner: NonNull<CXCodeCompleteResults>,
    tu: &'tu TranslationUnit<'tu>,
}

/// One completion candidate.
#[derive(Debug, Clone, Copy)]
pub struct CompletionResult<'r> {
    /// The kind of entity the candidate refers to, e.g. a function
    /// declaration or a macro.
    pub cursor_kind: Option<CursorKind>,
    pub completion_string: CompletionString<'r>,
}

impl<'tu> CodeCompleteResults<'tu> {
    fn raw_results(&self) -> &[CXCompletionResult] {
        let results = unsafe { self.inner.as_ref() };
        if results.Results.is_null() || results.NumResults == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(results.Results, results.NumResults as usize) }
    }

    pub fn len(&self) -> usize {
        self.raw_results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn results(&self) -> Vec<CompletionResult<'_>> {
        self.raw_results()
            .iter()
            .map(|result| CompletionResult {
                cursor_kind: CursorKind::from_raw(result.CursorKind as i32),
                completion_string: CompletionString::from_raw(result.CompletionString),
            })
            .collect()
    }

    /// Sorts the results alphabetically by their typed text.
    pub fn sort(&mut self) {
        let results = unsafe { self.inner.as_mut() };
        unsafe { clang_sortCodeCompletionResults(results.Results, results.NumResults) }
    }

    /// The kinds of completion that apply at the completion point.
    pub fn contexts(&self) -> CompletionContext {
        CompletionContext::from_bits_retain(unsafe { clang_codeCompleteGetContexts(self.inner.as_ptr()) } as u32)
    }

    /// The kind of the entity enclosing the completion point, e.g. the
    /// struct in a member access.
    pub fn container_kind(&self) -> Option<CursorKind> {
        let mut incomplete: c_uint = 0;
        let raw = unsafe { clang_codeCompleteGetContainerKind(self.inner.as_ptr(), &mut incomplete) };
        (unsafe { clang_isInvalid(raw) } == 0)
            .then(|| CursorKind::from_raw(raw as i32))
            .flatten()
    }

    pub fn container_usr(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_codeCompleteGetContainerUSR(self.inner.as_ptr()) })
    }

    /// The selector typed so far in an Objective-C message send.
    pub fn objc_selector(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_codeCompleteGetObjCSelector(self.inner.as_ptr()) })
    }

    /// Diagnostics produced while parsing for completion. They are owned by
    /// the results and cannot outlive them:
    ///
    /// ```compile_fail,E0597
    /// use cindex::prelude::*;
    ///
    /// let unit = TranslationUnit::from_source(
    ///     "int main(void) { return 0; }",
    ///     Language::C,
    ///     &[] as &[&str],
    ///     TranslationUnitFlags::NONE,
    /// )
    /// .unwrap();
    /// let diagnostics = {
    ///     let results = unit
    ///         .code_complete_at(unit.spelling(), 1, 1, &[], CodeCompleteFlags::empty())
    ///         .unwrap();
    ///     results.diagnostics()
    /// };
    /// println!("{}", diagnostics.len());
    /// ```
    pub fn diagnostics(&self) -> Vec<Diagnostic<'_>> {
        let count = unsafe { clang_codeCompleteGetNumDiagnostics(self.inner.as_ptr()) };
        (0..count)
            .filter_map(|i| Diagnostic::from_raw(unsafe { clang_codeCompleteGetDiagnostic(self.inner.as_ptr(), i) }))
            .collect()
    }

    /// Edits that must be applied before the completion at `index`, e.g.
    /// turning `.` into `->`. Requires
    /// [`CodeCompleteFlags::INCLUDE_COMPLETIONS_WITH_FIX_ITS`]. The ranges
    /// point into the results and cannot outlive them.
    pub fn fix_its(&self, index: usize) -> Vec<FixIt<'_>> {
        let count = unsafe { clang_getCompletionNumFixIts(self.inner.as_ptr(), index as c_uint) };
        (0..count)
            .map(|i| {
                let mut range = CXSourceRange::default();
                let replacement = from_cx_string(unsafe {
                    clang_getCompletionFixIt(self.inner.as_ptr(), index as c_uint, i, &mut range)
                });
                FixIt {
                    range: SourceRange::from_raw(range),
                    replacement,
                }
            })
            .collect()
    }

    pub fn translation_unit(&self) -> &'tu TranslationUnit<'tu> {
        self.tu
    }
}

impl Drop for CodeCompleteResults<'_> {
    fn drop(&mut self) {
        debug!("disposing code completion results");
        unsafe { clang_disposeCodeCompleteResults(self.inner.as_ptr()) }
    }
}

impl fmt::Debug for CodeCompleteResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeCompleteResults")
            .field("len", &self.len())
            .field("contexts", &self.contexts())
            .finish()
    }
}

/// A piece of a completion string.
#[derive(Debug, Clone)]
pub struct CompletionChunk<'r> {
    pub kind: Option<CompletionChunkKind>,
    pub text: String,
    /// The nested string of an [`CompletionChunkKind::Optional`] chunk.
    pub optional: Option<CompletionString<'r>>,
}

/// The text to insert for a completion candidate, as a sequence of chunks.
#[derive(Clone, Copy)]
pub struct CompletionString<'r> {
    raw: CXCompletionString,
    _marker: PhantomData<&'r ()>,
}

impl<'r> CompletionString<'r> {
    fn from_raw(raw: CXCompletionString) -> Self {
        CompletionString {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn chunk_count(&self) -> u32 {
        unsafe { clang_getNumCompletionChunks(self.raw) }
    }

    pub fn chunk_kind(&self, index: u32) -> Option<CompletionChunkKind> {
        CompletionChunkKind::from_raw(unsafe { clang_getCompletionChunkKind(self.raw, index) } as i32)
    }

    pub fn chunk_text(&self, index: u32) -> String {
        from_cx_string(unsafe { clang_getCompletionChunkText(self.raw, index) })
    }

    pub fn chunk_completion_string(&self, index: u32) -> Option<CompletionString<'r>> {
        let raw = unsafe { clang_getCompletionChunkCompletionString(self.raw, index) };
        (!raw.is_null()).then(|| CompletionString::from_raw(raw))
    }

    pub fn chunks(&self) -> Vec<CompletionChunk<'r>> {
        (0..self.chunk_count())
            .map(|i| CompletionChunk {
                kind: self.chunk_kind(i),
                text: self.chunk_text(i),
                optional: self.chunk_completion_string(i),
            })
            .collect()
    }

    /// The text the user would type to select this candidate.
    pub fn typed_text(&self) -> Option<String> {
        (0..self.chunk_count())
            .find(|i| self.chunk_kind(*i) == Some(CompletionChunkKind::TypedText))
            .map(|i| self.chunk_text(i))
    }

    /// Lower is more likely.
    pub fn priority(&self) -> u32 {
        unsafe { clang_getCompletionPriority(self.raw) }
    }

    pub fn availability(&self) -> Option<AvailabilityKind> {
        AvailabilityKind::from_raw(unsafe { clang_getCompletionAvailability(self.raw) } as i32)
    }

    pub fn annotations(&self) -> Vec<String> {
        let count = unsafe { clang_getCompletionNumAnnotations(self.raw) };
        (0..count)
            .map(|i| from_cx_string(unsafe { clang_getCompletionAnnotation(self.raw, i) }))
            .collect()
    }

    pub fn brief_comment(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_getCompletionBriefComment(self.raw) })
    }

    /// The name of the entity that contains the candidate.
    pub fn parent(&self) -> Option<String> {
        from_cx_string_opt(unsafe { clang_getCompletionParent(self.raw, std::ptr::null_mut()) })
    }
}

impl fmt::Debug for CompletionString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionString")
            .field("text", &self.to_string())
            .field("priority", &self.priority())
            .finish()
    }
}

impl fmt::Display for CompletionString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.chunk_count() {
            if self.chunk_kind(i) != Some(CompletionChunkKind::Informative) {
                f.write_str(&self.chunk_text(i))?;
            }
        }
        Ok(())
    }
}
