//! Language-agnostic source highlighting.
//!
//! Bytes go through the scanner (`syntaxhighlight-scanner`), which splits
//! them into an exact partition of classified [`Token`]s, then through the
//! [`annotator`], which renders those tokens as HTML, ANSI or undecorated
//! text such that stripping the markup gives back the input unchanged.
//!
//! ```no_run
//! use syntaxhighlight::{HighlightConfig, Highlighter};
//!
//! let config = HighlightConfig {
//!     language: Some("rust".into()),
//!     ..Default::default()
//! };
//! let highlighter = Highlighter::new(&config).unwrap();
//! let output = highlighter.highlight(b"fn main() {}").unwrap();
//! println!("{}", output.annotated().unwrap().to_string_lossy());
//! ```

pub use syntaxhighlight_scanner::{
    Kind, Language, LanguageRegistry, LanguageSpec, PartitionError, ScanState, Scanner, Token,
    char_codes, scan, scan_with, tables, validate_partition,
};

pub mod annotator;
pub use annotator::{AnnotatedOutput, Annotator, Chunk, Format, Markup, annotate};

pub mod config;
pub use config::{HighlightConfig, OutputFormat, ResolvedConfig, load_config};

pub mod error;
pub use error::{ConfigError, Error};

pub mod highlighter;
pub use highlighter::{Annotation, Highlighted, Highlighter, highlight};

pub mod style;
pub use style::{DEFAULT_CLASS_PREFIX, StyleMap};

pub mod tracing_config;

#[cfg(test)]
#[path = "tests/annotator_tests.rs"]
mod annotator_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/highlighter_tests.rs"]
mod highlighter_tests;

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod style_tests;

#[cfg(test)]
#[path = "tests/tracing_tests.rs"]
mod tracing_tests;
