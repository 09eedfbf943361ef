use crate::core::error::{ClangError, ClangResult};
use crate::core::source::{SourceLocation, SourceRange};
use crate::internal::utils::{from_cx_string, from_cx_string_opt, path_to_cstring};
use crate::types::{DiagnosticDisplayOptions, DiagnosticSeverity, LoadDiagnosticsError, NativeEnum};
use cindex_sys::*;
use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

/// A suggested edit: replace the text in `range` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixIt<'a> {
    pub range: SourceRange<'a>,
    pub replacement: String,
}

/// The command-line switches that control a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagnosticOption {
    /// e.g. `-Wunused-variable`
    pub enable: Option<String>,
    /// e.g. `-Wno-unused-variable`
    pub disable: Option<String>,
}

/// A diagnostic reported by the compiler. Disposed on drop.
pub struct Diagnostic<'a> {
    inner: NonNull<c_void>,
    _marker: PhantomData<&'a ()>,
}

impl<'a> Diagnostic<'a> {
    pub(crate) fn from_raw(raw: CXDiagnostic) -> Option<Self> {
        NonNull::new(raw).map(|inner| Diagnostic {
            inner,
            _marker: PhantomData,
        })
    }

    fn as_raw(&self) -> CXDiagnostic {
        self.inner.as_ptr()
    }

    pub fn severity(&self) -> Option<DiagnosticSeverity> {
        DiagnosticSeverity::from_raw(unsafe { clang_getDiagnosticSeverity(self.as_raw()) } as i32)
    }

    /// The message text, without location or severity.
    pub fn spelling(&self) -> String {
        from_cx_string(unsafe { clang_getDiagnosticSpelling(self.as_raw()) })
    }

    pub fn location(&self) -> SourceLocation<'a> {
        SourceLocation::from_raw(unsafe { clang_getDiagnosticLocation(self.as_raw()) })
    }

    /// Source ranges highlighted by the diagnostic.
    pub fn ranges(&self) -> Vec<SourceRange<'a>> {
        let count = unsafe { clang_getDiagnosticNumRanges(self.as_raw()) };
        (0..count)
            .map(|i| SourceRange::from_raw(unsafe { clang_getDiagnosticRange(self.as_raw(), i) }))
            .collect()
    }

    pub fn fix_its(&self) -> Vec<FixIt<'a>> {
        let count = unsafe { clang_getDiagnosticNumFixIts(self.as_raw()) };
        (0..count)
            .map(|i| {
                let mut range = CXSourceRange::default();
                let replacement = from_cx_string(unsafe { clang_getDiagnosticFixIt(self.as_raw(), i, &mut range) });
                FixIt {
                    range: SourceRange::from_raw(range),
                    replacement,
                }
            })
            .collect()
    }

    /// Renders the diagnostic the way clang prints it on the command line.
    pub fn format(&self, options: DiagnosticDisplayOptions) -> String {
        from_cx_string(unsafe { clang_formatDiagnostic(self.as_raw(), options.bits() as _) })
    }

    pub fn option(&self) -> DiagnosticOption {
        let mut disable = CXString::default();
        let enable = from_cx_string_opt(unsafe { clang_getDiagnosticOption(self.as_raw(), &mut disable) });
        DiagnosticOption {
            enable,
            disable: from_cx_string_opt(disable),
        }
    }

    pub fn category(&self) -> u32 {
        unsafe { clang_getDiagnosticCategory(self.as_raw()) }
    }

    /// e.g. `"Semantic Issue"`
    pub fn category_text(&self) -> String {
        from_cx_string(unsafe { clang_getDiagnosticCategoryText(self.as_raw()) })
    }

    /// Notes attached to this diagnostic.
    pub fn children(&self) -> DiagnosticSet<'_> {
        DiagnosticSet::borrowed(unsafe { clang_getChildDiagnostics(self.as_raw()) })
    }
}

impl Drop for Diagnostic<'_> {
    fn drop(&mut self) {
        unsafe { clang_disposeDiagnostic(self.inner.as_ptr()) }
    }
}

impl fmt::Debug for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostic")
            .field("severity", &self.severity())
            .field("spelling", &self.spelling())
            .field("location", &self.location())
            .finish()
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DiagnosticDisplayOptions::default_options()))
    }
}

/// An ordered group of diagnostics.
///
/// Sets loaded from disk or taken from a translation unit own their
/// native handle; the children of a diagnostic are borrowed from it.
pub struct DiagnosticSet<'a> {
    raw: CXDiagnosticSet,
    owned: bool,
    _marker: PhantomData<&'a ()>,
}

impl<'a> DiagnosticSet<'a> {
    pub(crate) fn owned(raw: CXDiagnosticSet) -> Self {
        DiagnosticSet {
            raw,
            owned: true,
            _marker: PhantomData,
        }
    }

    pub(crate) fn borrowed(raw: CXDiagnosticSet) -> Self {
        DiagnosticSet {
            raw,
            owned: false,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        if self.raw.is_null() {
            return 0;
        }
        unsafe { clang_getNumDiagnosticsInSet(self.raw) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Diagnostic<'_>> {
        if index >= self.len() {
            return None;
        }
        Diagnostic::from_raw(unsafe { clang_getDiagnosticInSet(self.raw, index as _) })
    }

    pub fn iter(&self) -> impl Iterator<Item = Diagnostic<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl DiagnosticSet<'static> {
    /// Loads diagnostics serialized by `clang --serialize-diagnostics`.
    pub fn load(path: impl AsRef<Path>) -> ClangResult<Self> {
        let c_path = path_to_cstring(path.as_ref())?;
        let mut error: CXLoadDiag_Error = CXLoadDiag_None;
        let mut message = CXString::default();
        let raw = unsafe { clang_loadDiagnostics(c_path.as_ptr(), &mut error, &mut message) };
        let message = from_cx_string(message);
        if raw.is_null() {
            let error = LoadDiagnosticsError::from_raw(error as i32).unwrap_or(LoadDiagnosticsError::Unknown);
            return Err(ClangError::LoadDiagnostics { error, message });
        }
        Ok(DiagnosticSet::owned(raw))
    }
}

impl Drop for DiagnosticSet<'_> {
    fn drop(&mut self) {
        if self.owned && !self.raw.is_null() {
            unsafe { clang_disposeDiagnosticSet(self.raw) }
        }
    }
}

impl fmt::Debug for DiagnosticSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
