//! Opt-in tracing output for embedders and test runs.
//!
//! The highlighter emits `scan` / `annotate` / `highlight_batch` spans and a
//! few events; nothing is printed unless a subscriber is installed.
//! [`init_tracing`] installs one driven by two environment variables:
//!
//! - `SYNTAXHIGHLIGHT_LOG`: filter directives in `RUST_LOG` syntax. A bare
//!   level (`debug`) only enables this crate's targets, so a host's own
//!   logging is not flooded. `RUST_LOG` is used verbatim when it is unset.
//! - `SYNTAXHIGHLIGHT_LOG_FORMAT`: `text` (default), `tree` (nested spans
//!   via `tracing-tree`) or `json` (one object per event).
//!
//! ```bash
//! SYNTAXHIGHLIGHT_LOG=trace SYNTAXHIGHLIGHT_LOG_FORMAT=tree cargo bench
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "SYNTAXHIGHLIGHT_LOG";
const LOG_FORMAT_ENV: &str = "SYNTAXHIGHLIGHT_LOG_FORMAT";
const TARGET: &str = "syntaxhighlight";
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized values fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Restrict a bare level to this crate's targets; anything else is kept.
pub fn scoped_directives(value: &str) -> String {
    let value = value.trim();
    if LEVELS.iter().any(|level| level.eq_ignore_ascii_case(value)) {
        format!("{TARGET}={}", value.to_ascii_lowercase())
    } else {
        value.to_string()
    }
}

/// Resolved subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingConfig {
    /// Build from the variable values; `None` when logging is not requested.
    pub fn from_vars(
        log: Option<&str>,
        rust_log: Option<&str>,
        format: Option<&str>,
    ) -> Option<Self> {
        let directives = match (log, rust_log) {
            (Some(log), _) => scoped_directives(log),
            (None, Some(rust_log)) => rust_log.trim().to_string(),
            (None, None) => return None,
        };
        Some(TracingConfig {
            directives,
            format: format.map_or(LogFormat::Text, LogFormat::parse),
        })
    }

    pub fn from_env() -> Option<Self> {
        let log = std::env::var(LOG_ENV).ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let format = std::env::var(LOG_FORMAT_ENV).ok();
        Self::from_vars(log.as_deref(), rust_log.as_deref(), format.as_deref())
    }

    /// Install a global subscriber writing to stderr.
    ///
    /// Returns `false` when another subscriber is already installed; it is
    /// left in place.
    pub fn try_init(&self) -> bool {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_bracketed_fields(true)
                    .with_targets(false);
                Registry::default().with(filter).with(tree_layer).try_init().is_ok()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init().is_ok()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer()
                    .with_target(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init().is_ok()
            }
        }
    }
}

/// Install a subscriber from `SYNTAXHIGHLIGHT_LOG` / `RUST_LOG`.
///
/// Returns whether one was installed: `false` when neither variable is set
/// or when the host already has a subscriber.
pub fn init_tracing() -> bool {
    TracingConfig::from_env().is_some_and(|config| config.try_init())
}
