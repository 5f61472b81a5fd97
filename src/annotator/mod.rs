//! Annotator: renders a token sequence back over its source.
//!
//! The output is a list of [`Chunk`]s, each holding escaped source bytes,
//! either bare or wrapped in a kind-tagged open/close pair. Un-escaping the
//! content of every chunk in order yields the original source byte for
//! byte, whatever the source contains (`<`, `&`, escape sequences, invalid
//! UTF-8).
//!
//! Output formats plug in through the [`Markup`] trait:
//! - `html` - `<span class="...">` wrappers around HTML-escaped text
//! - `ansi` - SGR color sequences around text with control bytes made visible
//! - `raw` - no decoration at all

pub mod ansi;
pub mod html;

use std::borrow::Cow;
use std::io;

use syntaxhighlight_scanner::{Kind, Token, validate_partition};

use crate::error::Error;
use crate::style::StyleMap;

/// Display format produced by the annotator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Ansi,
    Raw,
}

impl Format {
    pub fn markup(self) -> &'static dyn Markup {
        match self {
            Format::Html => &html::HtmlMarkup,
            Format::Ansi => &ansi::AnsiMarkup,
            Format::Raw => &RawMarkup,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Ansi => "ansi",
            Format::Raw => "raw",
        }
    }
}

/// How one output format decorates and escapes text.
///
/// `unescape(escape(x)) == x` must hold for every byte string `x`.
pub trait Markup: Sync {
    /// Write the opening decoration for a styled chunk.
    fn open(&self, kind: Kind, style: &str, out: &mut Vec<u8>);
    /// Write the closing decoration for a styled chunk.
    fn close(&self, kind: Kind, style: &str, out: &mut Vec<u8>);
    /// Append `text` escaped for this format.
    fn escape(&self, text: &[u8], out: &mut Vec<u8>);
    /// Reverse [`Markup::escape`].
    fn unescape<'a>(&self, escaped: &'a [u8]) -> Cow<'a, [u8]>;
}

/// Undecorated output; content is copied verbatim.
pub struct RawMarkup;

impl Markup for RawMarkup {
    fn open(&self, _kind: Kind, _style: &str, _out: &mut Vec<u8>) {}

    fn close(&self, _kind: Kind, _style: &str, _out: &mut Vec<u8>) {}

    fn escape(&self, text: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(text);
    }

    fn unescape<'a>(&self, escaped: &'a [u8]) -> Cow<'a, [u8]> {
        Cow::Borrowed(escaped)
    }
}

/// One piece of annotated output. Content is already escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chunk {
    Literal(Vec<u8>),
    Styled {
        kind: Kind,
        style: String,
        content: Vec<u8>,
    },
}

impl Chunk {
    pub fn content(&self) -> &[u8] {
        match self {
            Chunk::Literal(content) => content,
            Chunk::Styled { content, .. } => content,
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            Chunk::Literal(_) => None,
            Chunk::Styled { kind, .. } => Some(*kind),
        }
    }
}

/// Annotated rendering of one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedOutput {
    format: Format,
    chunks: Vec<Chunk>,
}

impl AnnotatedOutput {
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Rendered bytes: every chunk's content with its decoration.
    pub fn render(&self) -> Vec<u8> {
        let markup = self.format.markup();
        let capacity = self.chunks.iter().map(|c| c.content().len() + 32).sum();
        let mut out = Vec::with_capacity(capacity);
        for chunk in &self.chunks {
            match chunk {
                Chunk::Literal(content) => out.extend_from_slice(content),
                Chunk::Styled {
                    kind,
                    style,
                    content,
                } => {
                    markup.open(*kind, style, &mut out);
                    out.extend_from_slice(content);
                    markup.close(*kind, style, &mut out);
                }
            }
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.render())
    }

    /// Rendered output as text. Invalid UTF-8 carried over from the source
    /// becomes U+FFFD here; use [`AnnotatedOutput::render`] to keep it.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.render()).into_owned()
    }

    /// The source reconstructed by dropping decoration and un-escaping each
    /// chunk.
    pub fn source_bytes(&self) -> Vec<u8> {
        let markup = self.format.markup();
        let mut out = Vec::new();
        for chunk in &self.chunks {
            out.extend_from_slice(&markup.unescape(chunk.content()));
        }
        out
    }
}

/// Stateless renderer configured with a style map and output format.
#[derive(Clone, Debug)]
pub struct Annotator {
    styles: StyleMap,
    format: Format,
    coalesce: bool,
}

impl Annotator {
    pub fn new(styles: StyleMap, format: Format) -> Self {
        Annotator {
            styles,
            format,
            coalesce: true,
        }
    }

    /// Merge adjacent tokens of the same kind into one chunk (on by default).
    pub fn with_coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn annotate(&self, source: &[u8], tokens: &[Token]) -> Result<AnnotatedOutput, Error> {
        if let Err(err) = validate_partition(tokens, source.len()) {
            tracing::warn!(error = %err, len = source.len(), "rejecting token stream");
            return Err(Error::InvalidTokenStream(err));
        }

        let markup = self.format.markup();
        let mut chunks: Vec<Chunk> = Vec::with_capacity(tokens.len());
        let mut previous: Option<Kind> = None;

        for token in tokens {
            let text = token.text(source);
            let style = self.styles.get(token.kind);
            let merge = self.coalesce
                && match (chunks.last(), style) {
                    (Some(Chunk::Literal(_)), None) => previous == Some(token.kind),
                    (Some(Chunk::Styled { kind, .. }), Some(_)) => *kind == token.kind,
                    _ => false,
                };

            if merge {
                if let Some(last) = chunks.last_mut() {
                    let content = match last {
                        Chunk::Literal(content) => content,
                        Chunk::Styled { content, .. } => content,
                    };
                    markup.escape(text, content);
                }
            } else {
                let mut content = Vec::with_capacity(text.len());
                markup.escape(text, &mut content);
                chunks.push(match style {
                    Some(style) => Chunk::Styled {
                        kind: token.kind,
                        style: style.to_string(),
                        content,
                    },
                    None => Chunk::Literal(content),
                });
            }
            previous = Some(token.kind);
        }

        tracing::trace!(
            tokens = tokens.len(),
            chunks = chunks.len(),
            format = self.format.as_str(),
            "annotated"
        );
        Ok(AnnotatedOutput {
            format: self.format,
            chunks,
        })
    }
}

/// Render `tokens` over `source` with `styles` in `format`.
///
/// Fails only when `tokens` do not exactly partition `source`.
pub fn annotate(
    source: &[u8],
    tokens: &[Token],
    styles: &StyleMap,
    format: Format,
) -> Result<AnnotatedOutput, Error> {
    Annotator::new(styles.clone(), format).annotate(source, tokens)
}
