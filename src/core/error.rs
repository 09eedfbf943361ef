use crate::types::{
    CompilationDatabaseError, ErrorCode, LoadDiagnosticsError, NativeEnum, SaveError, TypeKind,
    TypeLayoutError,
};
use std::ffi::NulError;
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

pub type ClangResult<T> = Result<T, ClangError>;

#[derive(Error, Debug)]
pub enum ClangError {
    /// A translation unit factory reported a `CXErrorCode`.
    #[error("Failed to create translation unit: {0:?}")]
    Parse(ErrorCode),

    #[error("Failed to reparse translation unit: {0:?}")]
    Reparse(ErrorCode),

    /// A `CXErrorCode` outside the known table.
    #[error("Unknown libclang error code {0}")]
    UnknownErrorCode(i32),

    #[error("Failed to create index")]
    IndexCreation,

    #[error("Failed to create index action")]
    IndexActionCreation,

    #[error("Failed to load compilation database: {0}")]
    CompilationDatabase(CompilationDatabaseError),

    #[error("Failed to save translation unit: {0}")]
    Save(SaveError),

    #[error("Failed to load diagnostics ({error}): {message}")]
    LoadDiagnostics {
        error: LoadDiagnosticsError,
        message: String,
    },

    #[error("Type layout query failed: {0}")]
    Layout(TypeLayoutError),

    #[error("Type layout query returned unknown error value {0}")]
    UnknownLayoutError(i64),

    /// A query that only applies to a particular type kind was used on
    /// another kind. `found` is `None` for a kind newer than this crate.
    #[error("Expected a {expected} type, found {found:?}")]
    UnexpectedTypeKind {
        expected: &'static str,
        found: Option<TypeKind>,
    },

    #[error("Null cursor")]
    NullCursor,

    #[error("Code completion failed")]
    CodeCompletion,

    #[error("Indexing failed with status {0}")]
    Indexing(i32),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("String conversion error: {0}")]
    StringConversion(#[from] NulError),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Conversion(#[from] Utf8Error),
}

impl ClangError {
    /// Maps a raw `CXErrorCode` onto a result, wrapping failures with
    /// `wrap`.
    pub(crate) fn from_code(code: i32, wrap: fn(ErrorCode) -> ClangError) -> ClangResult<()> {
        match ErrorCode::from_raw(code) {
            Some(ErrorCode::Success) => Ok(()),
            Some(error) => Err(wrap(error)),
            None => Err(ClangError::UnknownErrorCode(code)),
        }
    }
}

impl From<TypeLayoutError> for ClangError {
    fn from(value: TypeLayoutError) -> Self {
        ClangError::Layout(value)
    }
}

impl From<CompilationDatabaseError> for ClangError {
    fn from(value: CompilationDatabaseError) -> Self {
        ClangError::CompilationDatabase(value)
    }
}

impl From<SaveError> for ClangError {
    fn from(value: SaveError) -> Self {
        ClangError::Save(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert!(ClangError::from_code(0, ClangError::Parse).is_ok());
        assert!(matches!(
            ClangError::from_code(4, ClangError::Parse),
            Err(ClangError::Parse(ErrorCode::AstReadError))
        ));
        assert!(matches!(
            ClangError::from_code(2, ClangError::Reparse),
            Err(ClangError::Reparse(ErrorCode::Crashed))
        ));
        assert!(matches!(
            ClangError::from_code(99, ClangError::Parse),
            Err(ClangError::UnknownErrorCode(99))
        ));
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        let message = ClangError::Parse(ErrorCode::InvalidArguments).to_string();
        assert!(message.contains("InvalidArguments"));
        let message = ClangError::CompilationDatabase(CompilationDatabaseError::CanNotLoadDatabase).to_string();
        assert!(message.contains("could not be loaded"));
        let message = ClangError::Layout(TypeLayoutError::Incomplete).to_string();
        assert!(message.contains("incomplete"));
    }

    #[test]
    fn test_error_messages_are_capitalized() {
        let errors = [
            ClangError::Parse(ErrorCode::Failure),
            ClangError::Reparse(ErrorCode::Crashed),
            ClangError::UnknownErrorCode(99),
            ClangError::IndexCreation,
            ClangError::IndexActionCreation,
            ClangError::CodeCompletion,
            ClangError::NullCursor,
        ];
        for error in errors {
            let message = error.to_string();
            assert!(
                message.starts_with(|c: char| c.is_ascii_uppercase()),
                "message not capitalized: {}",
                message
            );
        }
        assert_ne!(
            ClangError::IndexCreation.to_string(),
            ClangError::IndexActionCreation.to_string()
        );
    }
}
