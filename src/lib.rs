//! Safe bindings to libclang, the C interface of the Clang compiler.
//!
//! Parse C, C++ and Objective-C into a [`TranslationUnit`], then walk its
//! AST through [`Cursor`]s, inspect [`Type`]s, lex [`Token`]s, read
//! [`Diagnostic`]s, run code completion, or index declarations and
//! references.
//!
//! Native handles are owned by Rust values and released on drop. Views
//! such as cursors and types borrow the unit they came from, so the borrow
//! checker rules out use-after-dispose.
//!
//! ```no_run
//! use cindex::prelude::*;
//!
//! let unit = TranslationUnit::from_source(
//!     "struct point { int x; int y; };",
//!     Language::C,
//!     &[] as &[&str],
//!     TranslationUnitFlags::NONE,
//! )?;
//! let point = unit
//!     .cursor()
//!     .find(|cursor| cursor.kind() == CursorKind::StructDecl)
//!     .expect("struct declaration");
//! for field in point.ty().expect("record type").fields()? {
//!     println!("{}: {}", field.spelling(), field.offset_of_field()?);
//! }
//! # Ok::<(), cindex::ClangError>(())
//! ```
//!
//! # Features
//!
//! The default build targets libclang 14. `clang_16` and `clang_17`
//! expose the entry points added in those releases.

pub mod core;
mod internal;

pub mod types;

pub use crate::core::error::{ClangError, ClangResult};

// Re-export main types
pub mod prelude {
    pub use crate::core::availability::*;
    pub use crate::core::comment::*;
    pub use crate::core::compilation_database::*;
    pub use crate::core::completion::*;
    pub use crate::core::cursor::*;
    pub use crate::core::diagnostic::*;
    pub use crate::core::error::{ClangError, ClangResult};
    pub use crate::core::evaluation::*;
    pub use crate::core::index::*;
    pub use crate::core::indexing::*;
    pub use crate::core::printing_policy::*;
    pub use crate::core::resource_usage::*;
    pub use crate::core::source::*;
    pub use crate::core::token::*;
    pub use crate::core::translation_unit::*;
    pub use crate::core::ty::*;
    pub use crate::core::unsaved::*;
    pub use crate::types::*;
}

pub use prelude::{
    CompilationDatabase, Cursor, Diagnostic, File, Index, SourceLocation, SourceRange, Token,
    TranslationUnit, Type, UnsavedFile,
};
