use crate::core::error::ClangResult;
use crate::internal::utils::path_to_cstring;
use cindex_sys::*;
use std::ffi::{CString, c_char};
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::path::PathBuf;

/// In-memory contents that override (or stand in for) a file on disk
/// during parsing, reparsing, or code completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedFile {
    pub filename: PathBuf,
    pub contents: String,
}

impl UnsavedFile {
    pub fn new(filename: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        UnsavedFile {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Native view of a slice of [`UnsavedFile`]s, valid while the slice is.
pub(crate) struct NativeUnsavedFiles<'a> {
    _names: Vec<CString>,
    raw: Vec<CXUnsavedFile>,
    _marker: PhantomData<&'a [UnsavedFile]>,
}

impl<'a> NativeUnsavedFiles<'a> {
    pub(crate) fn new(files: &'a [UnsavedFile]) -> ClangResult<Self> {
        let names = files
            .iter()
            .map(|file| path_to_cstring(&file.filename))
            .collect::<ClangResult<Vec<_>>>()?;
        let raw = files
            .iter()
            .zip(&names)
            .map(|(file, name)| CXUnsavedFile {
                Filename: name.as_ptr(),
                Contents: file.contents.as_ptr() as *const c_char,
                Length: file.contents.len() as _,
            })
            .collect();
        Ok(NativeUnsavedFiles {
            _names: names,
            raw,
            _marker: PhantomData,
        })
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut CXUnsavedFile {
        if self.raw.is_empty() {
            std::ptr::null_mut()
        } else {
            self.raw.as_mut_ptr()
        }
    }

    pub(crate) fn len(&self) -> c_uint {
        self.raw.len() as c_uint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_native_unsaved_files() {
        let files = [UnsavedFile::new("a.c", "void f(void);")];
        let mut native = NativeUnsavedFiles::new(&files).expect("Failed to convert unsaved files");
        assert_eq!(native.len(), 1);
        let raw = unsafe { &*native.as_mut_ptr() };
        assert_eq!(raw.Length, 13);
        assert_eq!(unsafe { CStr::from_ptr(raw.Filename) }.to_str(), Ok("a.c"));
    }

    #[test]
    fn test_empty_unsaved_files_are_null() {
        let mut native = NativeUnsavedFiles::new(&[]).expect("Failed to convert unsaved files");
        assert_eq!(native.len(), 0);
        assert!(native.as_mut_ptr().is_null());
    }
}
