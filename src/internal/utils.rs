use crate::core::error::{ClangError, ClangResult};
use cindex_sys::*;
use std::ffi::{CStr, CString, c_char};
use std::path::Path;

/// Copies a libclang-owned C string. Null yields `None`.
pub(crate) fn read_cstring(c_buf: *const c_char) -> Option<String> {
    if c_buf.is_null() {
        return None;
    }
    let c_str: &CStr = unsafe { CStr::from_ptr(c_buf) };
    Some(c_str.to_string_lossy().into_owned())
}

/// Copies and disposes a `CXString`.
pub(crate) fn from_cx_string(value: CXString) -> String {
    let text = read_cstring(unsafe { clang_getCString(value) }).unwrap_or_default();
    unsafe { clang_disposeString(value) };
    text
}

/// Like [`from_cx_string`], mapping the empty string to `None`.
pub(crate) fn from_cx_string_opt(value: CXString) -> Option<String> {
    Some(from_cx_string(value)).filter(|text| !text.is_empty())
}

/// Copies and disposes a `CXStringSet`.
pub(crate) fn from_cx_string_set(set: *mut CXStringSet) -> Vec<String> {
    if set.is_null() {
        return Vec::new();
    }
    let strings = unsafe {
        let set_ref = &*set;
        let raw = if set_ref.Strings.is_null() || set_ref.Count == 0 {
            &[][..]
        } else {
            std::slice::from_raw_parts(set_ref.Strings, set_ref.Count as usize)
        };
        raw.iter()
            .map(|s| read_cstring(clang_getCString(*s)).unwrap_or_default())
            .collect()
    };
    unsafe { clang_disposeStringSet(set) };
    strings
}

pub(crate) fn to_cstring(value: &str) -> ClangResult<CString> {
    Ok(CString::new(value)?)
}

pub(crate) fn path_to_cstring(path: &Path) -> ClangResult<CString> {
    let text = path
        .to_str()
        .ok_or_else(|| ClangError::InvalidPath(path.to_path_buf()))?;
    to_cstring(text)
}

/// Command-line arguments kept alive for the duration of a native call.
pub(crate) struct CStringArray {
    _owned: Vec<CString>,
    pointers: Vec<*const c_char>,
}

impl CStringArray {
    pub(crate) fn new<S: AsRef<str>>(values: &[S]) -> ClangResult<Self> {
        let owned = values
            .iter()
            .map(|value| to_cstring(value.as_ref()))
            .collect::<ClangResult<Vec<_>>>()?;
        let pointers = owned.iter().map(|value| value.as_ptr()).collect();
        Ok(CStringArray {
            _owned: owned,
            pointers,
        })
    }

    pub(crate) fn as_ptr(&self) -> *const *const c_char {
        if self.pointers.is_empty() {
            std::ptr::null()
        } else {
            self.pointers.as_ptr()
        }
    }

    pub(crate) fn len(&self) -> i32 {
        self.pointers.len() as i32
    }
}
