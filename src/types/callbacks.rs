//! Results returned from visitor closures.

use cindex_sys::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// What a [`Cursor::visit_children`](crate::core::cursor::Cursor::visit_children)
/// closure wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ChildVisit {
    /// Terminates the cursor traversal.
    Break = 0,
    /// Continues with the next sibling without visiting this cursor's
    /// children.
    Continue = 1,
    /// Recursively traverses this cursor's children.
    Recurse = 2,
}

impl ChildVisit {
    pub(crate) fn to_native(self) -> CXChildVisitResult {
        match self {
            ChildVisit::Break => CXChildVisit_Break,
            ChildVisit::Continue => CXChildVisit_Continue,
            ChildVisit::Recurse => CXChildVisit_Recurse,
        }
    }
}

/// What a field or inclusion visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum VisitorResult {
    Break = 0,
    Continue = 1,
}

impl VisitorResult {
    pub(crate) fn to_native(self) -> CXVisitorResult {
        match self {
            VisitorResult::Break => CXVisit_Break,
            VisitorResult::Continue => CXVisit_Continue,
        }
    }
}

/// Outcome of a libclang traversal that can be cut short (`CXResult`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum VisitResult {
    /// The function returned successfully.
    Success = 0,
    /// One of the parameters was invalid for the function.
    Invalid = 1,
    /// The function was terminated by a callback, e.g. it returned
    /// `Break`.
    VisitBreak = 2,
}
