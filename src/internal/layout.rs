use crate::core::error::{ClangError, ClangResult};
use crate::types::{NativeEnum, TypeLayoutError};
use std::os::raw::c_longlong;

/// Decodes the result of a layout query (size, alignment, offset).
///
/// libclang reports failures as small negative values sharing the result's
/// integer range. Recognized values map to [`TypeLayoutError`]; any other
/// negative value is reported verbatim.
pub(crate) fn layout_result(value: c_longlong) -> ClangResult<u64> {
    if value >= 0 {
        return Ok(value as u64);
    }
    match i32::try_from(value).ok().and_then(TypeLayoutError::from_raw) {
        Some(error) => Err(ClangError::Layout(error)),
        None => Err(ClangError::UnknownLayoutError(value as i64)),
    }
}
