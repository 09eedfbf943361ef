//! Owners of native libclang handles and the views that borrow them.

pub mod availability;
pub mod comment;
pub mod compilation_database;
pub mod completion;
pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod evaluation;
pub mod index;
pub mod indexing;
pub mod printing_policy;
pub mod resource_usage;
pub mod source;
pub mod token;
pub mod translation_unit;
pub mod ty;
pub mod unsaved;
