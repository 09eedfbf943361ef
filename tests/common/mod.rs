//! Shared helpers for the integration tests.

#![allow(dead_code)]

use cindex::prelude::*;
use std::path::PathBuf;

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parses in-memory source text with the given compiler arguments.
pub fn parse_source(source: &str, language: Language, arguments: &[&str]) -> TranslationUnit<'static> {
    init_logger();
    TranslationUnit::from_source(source, language, arguments, TranslationUnitFlags::NONE)
        .expect("Failed to parse source")
}

/// Parses a fixture file against `index`.
pub fn parse_fixture<'idx>(index: &'idx Index, name: &str, arguments: &[&str]) -> TranslationUnit<'idx> {
    init_logger();
    TranslationUnit::parse(index, fixture_path(name), arguments, &[], TranslationUnitFlags::NONE)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

/// The first cursor of `kind` named `name`, searching the whole unit.
pub fn find_cursor<'tu>(unit: &'tu TranslationUnit<'tu>, kind: CursorKind, name: &str) -> Cursor<'tu> {
    unit.cursor()
        .find(|cursor| cursor.kind() == kind && cursor.spelling() == name)
        .unwrap_or_else(|| panic!("No {:?} named {}", kind, name))
}

/// Spellings of a list of tokens.
pub fn spellings(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|token| token.spelling()).collect()
}
