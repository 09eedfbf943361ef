//! C trampolines for the closure-based traversals.
//!
//! The closure lives on the caller's stack inside a [`CallbackState`] and
//! is handed to libclang as the opaque client data for one native call.
//! Panics are caught at the boundary, the traversal is told to stop, and
//! the panic is resumed once the native call has returned.

use crate::types::{ChildVisit, VisitorResult};
use cindex_sys::*;
use log::warn;
use std::any::Any;
use std::os::raw::c_uint;
use std::panic::{self, AssertUnwindSafe};

pub(crate) struct CallbackState<F> {
    pub(crate) callback: F,
    panic: Option<Box<dyn Any + Send>>,
}

impl<F> CallbackState<F> {
    pub(crate) fn new(callback: F) -> Self {
        CallbackState {
            callback,
            panic: None,
        }
    }

    /// Runs `f` against the callback. Returns `None` once the callback has
    /// panicked; later invocations are skipped.
    pub(crate) fn call<R>(&mut self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        if self.panic.is_some() {
            return None;
        }
        let callback = &mut self.callback;
        match panic::catch_unwind(AssertUnwindSafe(|| f(callback))) {
            Ok(value) => Some(value),
            Err(payload) => {
                warn!("callback panicked, aborting libclang traversal");
                self.panic = Some(payload);
                None
            }
        }
    }

    pub(crate) fn has_panicked(&self) -> bool {
        self.panic.is_some()
    }

    pub(crate) fn as_client_data(&mut self) -> CXClientData {
        self as *mut CallbackState<F> as CXClientData
    }

    /// Re-raises a panic captured during the native call.
    pub(crate) fn resume_panic(self) -> F {
        if let Some(payload) = self.panic {
            panic::resume_unwind(payload);
        }
        self.callback
    }
}

unsafe extern "C" fn visit_children_trampoline<F>(
    cursor: CXCursor,
    parent: CXCursor,
    data: CXClientData,
) -> CXChildVisitResult
where
    F: FnMut(CXCursor, CXCursor) -> ChildVisit,
{
    let state = unsafe { &mut *(data as *mut CallbackState<F>) };
    state
        .call(|callback| callback(cursor, parent))
        .unwrap_or(ChildVisit::Break)
        .to_native()
}

/// Visits the children of `parent`. Returns `true` when the traversal was
/// stopped by [`ChildVisit::Break`].
pub(crate) fn visit_children<F>(parent: CXCursor, callback: F) -> bool
where
    F: FnMut(CXCursor, CXCursor) -> ChildVisit,
{
    let mut state = CallbackState::new(callback);
    let stopped = unsafe {
        clang_visitChildren(
            parent,
            Some(visit_children_trampoline::<F>),
            state.as_client_data(),
        )
    };
    state.resume_panic();
    stopped != 0
}

unsafe extern "C" fn visit_fields_trampoline<F>(
    cursor: CXCursor,
    data: CXClientData,
) -> CXVisitorResult
where
    F: FnMut(CXCursor) -> VisitorResult,
{
    let state = unsafe { &mut *(data as *mut CallbackState<F>) };
    state
        .call(|callback| callback(cursor))
        .unwrap_or(VisitorResult::Break)
        .to_native()
}

/// Visits the fields of a record type. Returns `true` when the traversal
/// was stopped by [`VisitorResult::Break`].
pub(crate) fn visit_fields<F>(record: CXType, callback: F) -> bool
where
    F: FnMut(CXCursor) -> VisitorResult,
{
    let mut state = CallbackState::new(callback);
    let stopped = unsafe {
        clang_Type_visitFields(
            record,
            Some(visit_fields_trampoline::<F>),
            state.as_client_data(),
        )
    };
    state.resume_panic();
    stopped != 0
}

unsafe extern "C" fn inclusion_trampoline<F>(
    included_file: CXFile,
    inclusion_stack: *mut CXSourceLocation,
    include_len: c_uint,
    data: CXClientData,
) where
    F: FnMut(CXFile, &[CXSourceLocation]),
{
    let state = unsafe { &mut *(data as *mut CallbackState<F>) };
    let stack = if inclusion_stack.is_null() || include_len == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(inclusion_stack, include_len as usize) }
    };
    state.call(|callback| callback(included_file, stack));
}

/// Visits every file included by a translation unit, with the stack of
/// locations that led to it (innermost first).
pub(crate) fn visit_inclusions<F>(unit: CXTranslationUnit, callback: F)
where
    F: FnMut(CXFile, &[CXSourceLocation]),
{
    let mut state = CallbackState::new(callback);
    unsafe {
        clang_getInclusions(
            unit,
            Some(inclusion_trampoline::<F>),
            state.as_client_data(),
        )
    };
    state.resume_panic();
}
