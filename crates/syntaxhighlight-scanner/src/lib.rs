//! Language-agnostic source tokenizer for syntaxhighlight.
//!
//! This crate provides the lexical analysis phase:
//! - `Kind` / `Token` - Token categories and byte ranges
//! - `Language` / `LanguageRegistry` - Per-language keyword, operator and comment tables
//! - `Scanner` - Single-pass, total scanner producing a gap-free token sequence
//! - `char_codes` - Byte and code point classification utilities

pub mod char_codes;

pub mod token;
pub use token::{Kind, PartitionError, Token, validate_partition};

pub mod tables;
pub use tables::{Language, LanguageRegistry, LanguageSpec};

pub mod scanner;
pub use scanner::{ScanState, Scanner, scan, scan_with};

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
#[cfg(test)]
#[path = "tests/tables_tests.rs"]
mod tables_tests;
#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod token_tests;
