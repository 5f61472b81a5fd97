//! Highlighter configuration.
//!
//! Configuration arrives as a loosely typed [`HighlightConfig`] (every field
//! optional, deserializable from JSON with comments and trailing commas) and
//! is checked once by [`resolve_config`] into a [`ResolvedConfig`] that the
//! facade can use without further validation.

use anyhow::{Context, Result, anyhow, bail};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use syntaxhighlight_scanner::tables::{AUTO_HINT, BlockComment};
use syntaxhighlight_scanner::{Kind, Language, LanguageSpec, scan_with};

use crate::annotator::Format;
use crate::annotator::ansi::sgr_for_style;
use crate::error::ConfigError;
use crate::style::{DEFAULT_CLASS_PREFIX, StyleMap};

/// Accept both `true` and `"true"` (also `"yes"`, `"on"`, `"1"` and their
/// negatives) for boolean options.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                s
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    /// Path of a base config file, relative to the file that names it.
    #[serde(default)]
    pub extends: Option<String>,
    /// Language hint: a name, alias, file name or `"auto"`.
    #[serde(default)]
    pub language: Option<String>,
    /// `tokens`, `html`, `ansi` or `raw`.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub class_prefix: Option<String>,
    /// Kind name → class (HTML) or color/SGR style (ANSI).
    #[serde(default)]
    pub style_overrides: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub coalesce: Option<bool>,
    /// Extra language tables, added after (and overriding) the built-ins.
    #[serde(default)]
    pub languages: Option<Vec<LanguageSpec>>,
}

impl HighlightConfig {
    /// Parse a config document. Comments and trailing commas are allowed.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let normalized = normalize_jsonc(source);
        serde_json::from_str(&normalized).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        resolve_config(self)
    }
}

/// What the facade returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw token list.
    Tokens,
    Html,
    Ansi,
    Raw,
}

impl OutputFormat {
    /// The annotator format, or `None` for raw tokens.
    pub fn annotation_format(self) -> Option<Format> {
        match self {
            OutputFormat::Tokens => None,
            OutputFormat::Html => Some(Format::Html),
            OutputFormat::Ansi => Some(Format::Ansi),
            OutputFormat::Raw => Some(Format::Raw),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Tokens => "tokens",
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Raw => "raw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` selects the merged default table.
    pub language: Option<String>,
    pub format: OutputFormat,
    pub class_prefix: String,
    pub styles: StyleMap,
    pub coalesce: bool,
    pub languages: Vec<LanguageSpec>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ResolvedConfig {
            language: None,
            format: OutputFormat::Html,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            styles: StyleMap::html_classes(DEFAULT_CLASS_PREFIX),
            coalesce: true,
            languages: Vec::new(),
        }
    }
}

pub fn resolve_config(config: &HighlightConfig) -> Result<ResolvedConfig, ConfigError> {
    let mut resolved = ResolvedConfig::default();

    if let Some(language) = config.language.as_deref() {
        let hint = language.trim();
        if !hint.is_empty() && !hint.eq_ignore_ascii_case(AUTO_HINT) {
            resolved.language = Some(hint.to_string());
        }
    }

    if let Some(format) = config.format.as_deref() {
        resolved.format = parse_output_format(format)?;
    }

    if let Some(prefix) = config.class_prefix.as_deref() {
        if !is_valid_class_prefix(prefix) {
            return Err(ConfigError::InvalidClassPrefix(prefix.to_string()));
        }
        resolved.class_prefix = prefix.to_string();
    }

    resolved.styles = match resolved.format {
        OutputFormat::Ansi => StyleMap::ansi_palette(),
        _ => StyleMap::html_classes(&resolved.class_prefix),
    };

    if let Some(overrides) = &config.style_overrides {
        // Sorted so the first reported error does not depend on hash order.
        let mut entries: Vec<(&String, &String)> = overrides.iter().collect();
        entries.sort();
        for (name, style) in entries {
            let kind: Kind = name
                .parse()
                .map_err(|_| ConfigError::UnknownKind(name.clone()))?;
            let style = style.trim();
            if style.is_empty() {
                resolved.styles.remove(kind);
                continue;
            }
            match resolved.format {
                OutputFormat::Ansi => {
                    let sgr = sgr_for_style(style).ok_or_else(|| ConfigError::InvalidAnsiStyle {
                        kind,
                        style: style.to_string(),
                    })?;
                    resolved.styles.set(kind, sgr);
                }
                _ => resolved.styles.set(kind, style),
            }
        }
    }

    if let Some(coalesce) = config.coalesce {
        resolved.coalesce = coalesce;
    }

    if let Some(languages) = &config.languages {
        resolved.languages = languages.clone();
    }

    Ok(resolved)
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "tokens" => Ok(OutputFormat::Tokens),
        "html" => Ok(OutputFormat::Html),
        "ansi" => Ok(OutputFormat::Ansi),
        "raw" => Ok(OutputFormat::Raw),
        _ => Err(ConfigError::UnknownFormat(value.to_string())),
    }
}

/// The prefix ends up inside a double-quoted `class` attribute.
fn is_valid_class_prefix(prefix: &str) -> bool {
    !prefix
        .chars()
        .any(|ch| ch.is_whitespace() || matches!(ch, '"' | '\'' | '<' | '>' | '&'))
}

// =============================================================================
// Config files
// =============================================================================

/// Load a config file, following `extends` chains.
pub fn load_config(path: &Path) -> Result<HighlightConfig> {
    let mut visited = HashSet::new();
    load_config_inner(path, &mut visited)
}

fn load_config_inner(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<HighlightConfig> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("config extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read highlight config: {}", path.display()))?;
    let mut config = HighlightConfig::from_json(&source)
        .with_context(|| format!("failed to parse highlight config: {}", path.display()))?;

    if let Some(extends) = config.extends.take() {
        let base_path = resolve_extends_path(path, &extends)?;
        let base = load_config_inner(&base_path, visited)?;
        config = merge_configs(base, config);
    }

    visited.remove(&canonical);
    Ok(config)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("highlight config has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }
    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

/// Child settings win; style overrides merge per kind; languages from both
/// files are kept, the child's registered last.
fn merge_configs(base: HighlightConfig, child: HighlightConfig) -> HighlightConfig {
    let style_overrides = match (base.style_overrides, child.style_overrides) {
        (Some(mut base_styles), Some(child_styles)) => {
            base_styles.extend(child_styles);
            Some(base_styles)
        }
        (base_styles, child_styles) => child_styles.or(base_styles),
    };
    let languages = match (base.languages, child.languages) {
        (Some(mut base_languages), Some(child_languages)) => {
            base_languages.extend(child_languages);
            Some(base_languages)
        }
        (base_languages, child_languages) => child_languages.or(base_languages),
    };

    HighlightConfig {
        extends: None,
        language: child.language.or(base.language),
        format: child.format.or(base.format),
        class_prefix: child.class_prefix.or(base.class_prefix),
        style_overrides,
        coalesce: child.coalesce.or(base.coalesce),
        languages,
    }
}

// =============================================================================
// JSON with comments
// =============================================================================

/// Table for JSON with `//` and `/* */` comments, so config files are
/// cleaned up by the same scanner that highlights code.
static JSONC: Lazy<Language> = Lazy::new(|| {
    let mut spec = LanguageSpec::new("jsonc");
    spec.quotes = "\"".to_string();
    spec.line_comments = vec!["//".to_string()];
    spec.block_comments = vec![BlockComment::new("/*", "*/")];
    Language::from_spec(&spec)
});

/// Drop comments, and commas directly before a closing `}` or `]`.
fn normalize_jsonc(source: &str) -> String {
    let bytes = source.as_bytes();
    let tokens = scan_with(bytes, &JSONC);
    let mut out = Vec::with_capacity(bytes.len());

    for (index, token) in tokens.iter().enumerate() {
        let text = token.text(bytes);
        if token.kind == Kind::Comment {
            continue;
        }
        if token.kind == Kind::Punctuation && text == b"," {
            let next = tokens[index + 1..]
                .iter()
                .find(|next| !next.kind.is_trivia())
                .map(|next| next.text(bytes));
            if matches!(next, Some(b"}") | Some(b"]")) {
                continue;
            }
        }
        out.extend_from_slice(text);
    }

    // Only whole tokens of valid UTF-8 were removed.
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
