use crate::internal::utils::read_cstring;
use crate::types::{EvalResultKind, NativeEnum};
use cindex_sys::*;
use std::ffi::c_void;
use std::ptr::NonNull;

/// The value of a constant expression, copied out of libclang.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    Int(i64),
    /// An integer whose type is unsigned.
    UnsignedInt(u64),
    Float(f64),
    StrLiteral(String),
    ObjCStrLiteral(String),
    CfStr(String),
    Other(String),
    Unexposed,
}

/// Native result handle, disposed on drop.
struct EvalHandle(NonNull<c_void>);

impl Drop for EvalHandle {
    fn drop(&mut self) {
        unsafe { clang_EvalResult_dispose(self.0.as_ptr()) }
    }
}

impl EvalResult {
    pub(crate) fn evaluate(cursor: CXCursor) -> Option<Self> {
        let handle = EvalHandle(NonNull::new(unsafe { clang_Cursor_Evaluate(cursor) })?);
        let raw = handle.0.as_ptr();
        let text = || read_cstring(unsafe { clang_EvalResult_getAsStr(raw) }).unwrap_or_default();
        let kind = EvalResultKind::from_raw(unsafe { clang_EvalResult_getKind(raw) } as i32)?;
        let value = match kind {
            EvalResultKind::Int if unsafe { clang_EvalResult_isUnsignedInt(raw) } != 0 => {
                EvalResult::UnsignedInt(unsafe { clang_EvalResult_getAsUnsigned(raw) } as u64)
            }
            EvalResultKind::Int => EvalResult::Int(unsafe { clang_EvalResult_getAsLongLong(raw) } as i64),
            EvalResultKind::Float => EvalResult::Float(unsafe { clang_EvalResult_getAsDouble(raw) }),
            EvalResultKind::StrLiteral => EvalResult::StrLiteral(text()),
            EvalResultKind::ObjCStrLiteral => EvalResult::ObjCStrLiteral(text()),
            EvalResultKind::CfStr => EvalResult::CfStr(text()),
            EvalResultKind::Other => EvalResult::Other(text()),
            EvalResultKind::Unexposed => EvalResult::Unexposed,
        };
        drop(handle);
        Some(value)
    }

    pub fn kind(&self) -> EvalResultKind {
        match self {
            EvalResult::Int(_) | EvalResult::UnsignedInt(_) => EvalResultKind::Int,
            EvalResult::Float(_) => EvalResultKind::Float,
            EvalResult::StrLiteral(_) => EvalResultKind::StrLiteral,
            EvalResult::ObjCStrLiteral(_) => EvalResultKind::ObjCStrLiteral,
            EvalResult::CfStr(_) => EvalResultKind::CfStr,
            EvalResult::Other(_) => EvalResultKind::Other,
            EvalResult::Unexposed => EvalResultKind::Unexposed,
        }
    }

    /// The value as a signed integer, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            EvalResult::Int(value) => Some(value),
            EvalResult::UnsignedInt(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            EvalResult::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EvalResult::StrLiteral(text)
            | EvalResult::ObjCStrLiteral(text)
            | EvalResult::CfStr(text)
            | EvalResult::Other(text) => Some(text),
            _ => None,
        }
    }
}
