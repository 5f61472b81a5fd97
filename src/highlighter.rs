//! Entry point tying the language registry, scanner and annotator together.

use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use syntaxhighlight_scanner::{Kind, Language, LanguageRegistry, Token, scan_with};

use crate::annotator::{AnnotatedOutput, Annotator};
use crate::config::{HighlightConfig, ResolvedConfig};
use crate::error::{ConfigError, Error};

/// A styled byte range, for consumers that apply their own markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub start: usize,
    pub end: usize,
    pub kind: Kind,
    pub class: String,
}

/// Result of [`Highlighter::highlight`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Highlighted {
    Tokens(Vec<Token>),
    Annotated(AnnotatedOutput),
}

impl Highlighted {
    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            Highlighted::Tokens(tokens) => Some(tokens),
            Highlighted::Annotated(_) => None,
        }
    }

    pub fn annotated(&self) -> Option<&AnnotatedOutput> {
        match self {
            Highlighted::Tokens(_) => None,
            Highlighted::Annotated(output) => Some(output),
        }
    }

    /// `{"format": "tokens", "tokens": [...]}` or
    /// `{"format": "html", "output": "..."}`.
    pub fn to_json(&self) -> Value {
        match self {
            Highlighted::Tokens(tokens) => json!({
                "format": "tokens",
                "tokens": tokens,
            }),
            Highlighted::Annotated(output) => json!({
                "format": output.format().as_str(),
                "output": output.to_string_lossy(),
            }),
        }
    }
}

/// Validated configuration plus the tables it selects.
///
/// Immutable after construction and `Send + Sync`; one instance can serve
/// any number of threads.
#[derive(Clone, Debug)]
pub struct Highlighter {
    registry: Arc<LanguageRegistry>,
    config: ResolvedConfig,
    annotator: Option<Annotator>,
}

impl Highlighter {
    pub fn new(config: &HighlightConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_resolved(config.resolve()?))
    }

    /// Extra languages in the config are registered after the built-ins,
    /// so they can replace a built-in of the same name.
    pub fn from_resolved(config: ResolvedConfig) -> Self {
        let registry = if config.languages.is_empty() {
            LanguageRegistry::builtin()
        } else {
            let specs = LanguageRegistry::builtin_specs()
                .into_iter()
                .chain(config.languages.iter().cloned());
            Arc::new(LanguageRegistry::with_specs(specs))
        };
        let annotator = config.format.annotation_format().map(|format| {
            Annotator::new(config.styles.clone(), format).with_coalesce(config.coalesce)
        });

        let highlighter = Highlighter {
            registry,
            config,
            annotator,
        };
        highlighter.note_fallback();
        highlighter
    }

    /// Replace the language registry, e.g. with one shared across several
    /// highlighters.
    pub fn with_registry(mut self, registry: Arc<LanguageRegistry>) -> Self {
        self.registry = registry;
        self.note_fallback();
        self
    }

    fn note_fallback(&self) {
        if let Some(hint) = self.config.language.as_deref() {
            if self.registry.lookup(hint).is_none() {
                tracing::debug!(hint, "unknown language hint, using the merged default table");
            }
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    /// The table the configured hint selects.
    pub fn language(&self) -> &Language {
        self.registry.resolve(self.config.language.as_deref())
    }

    /// Scan `source`. Never fails.
    pub fn tokens(&self, source: &[u8]) -> Vec<Token> {
        let language = self.language();
        let _span = tracing::trace_span!("scan", len = source.len(), language = language.name())
            .entered();
        let tokens = scan_with(source, language);
        tracing::trace!(tokens = tokens.len(), "scanned");
        tokens
    }

    /// Scan and, unless the format is `tokens`, annotate `source`.
    pub fn highlight(&self, source: &[u8]) -> Result<Highlighted, Error> {
        let tokens = self.tokens(source);
        match &self.annotator {
            None => Ok(Highlighted::Tokens(tokens)),
            Some(annotator) => {
                let _span = tracing::trace_span!("annotate", len = source.len()).entered();
                Ok(Highlighted::Annotated(annotator.annotate(source, &tokens)?))
            }
        }
    }

    /// Styled ranges of `source`, in order. Unstyled kinds are skipped;
    /// adjacent same-kind tokens merge when coalescing is on.
    pub fn annotations(&self, source: &[u8]) -> Vec<Annotation> {
        let mut annotations: Vec<Annotation> = Vec::new();
        for token in self.tokens(source) {
            let Some(class) = self.config.styles.get(token.kind) else {
                continue;
            };
            if self.config.coalesce {
                if let Some(last) = annotations.last_mut() {
                    if last.kind == token.kind && last.end == token.start {
                        last.end = token.end;
                        continue;
                    }
                }
            }
            annotations.push(Annotation {
                start: token.start,
                end: token.end,
                kind: token.kind,
                class: class.to_string(),
            });
        }
        annotations
    }

    /// Highlight independent sources in parallel. Results keep input order.
    pub fn highlight_batch<S>(&self, sources: &[S]) -> Vec<Result<Highlighted, Error>>
    where
        S: AsRef<[u8]> + Sync,
    {
        let _span = tracing::debug_span!("highlight_batch", sources = sources.len()).entered();
        sources
            .par_iter()
            .map(|source| self.highlight(source.as_ref()))
            .collect()
    }
}

/// Highlight one source with a one-off configuration.
pub fn highlight(source: &[u8], config: &HighlightConfig) -> Result<Highlighted, Error> {
    Highlighter::new(config)?.highlight(source)
}
