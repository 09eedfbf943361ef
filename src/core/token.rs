use crate::core::source::{SourceLocation, SourceRange};
use crate::core::translation_unit::TranslationUnit;
use crate::internal::utils::from_cx_string;
use crate::types::{NativeEnum, TokenKind};
use cindex_sys::*;
use std::fmt;

/// A lexical token of a translation unit.
#[derive(Clone, Copy)]
pub struct Token<'tu> {
    raw: CXToken,
    tu: &'tu TranslationUnit<'tu>,
}

impl<'tu> Token<'tu> {
    pub(crate) fn wrap(raw: CXToken, tu: &'tu TranslationUnit<'tu>) -> Self {
        Token { raw, tu }
    }

    pub(crate) fn as_raw(&self) -> CXToken {
        self.raw
    }

    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::from_raw(unsafe { clang_getTokenKind(self.raw) } as i32)
    }

    /// The text of the token as written.
    pub fn spelling(&self) -> String {
        from_cx_string(unsafe { clang_getTokenSpelling(self.tu.as_raw(), self.raw) })
    }

    pub fn location(&self) -> SourceLocation<'tu> {
        SourceLocation::from_raw(unsafe { clang_getTokenLocation(self.tu.as_raw(), self.raw) })
    }

    pub fn extent(&self) -> SourceRange<'tu> {
        SourceRange::from_raw(unsafe { clang_getTokenExtent(self.tu.as_raw(), self.raw) })
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind())
            .field("spelling", &self.spelling())
            .finish()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling())
    }
}
