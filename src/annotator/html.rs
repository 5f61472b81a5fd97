//! HTML output: `<span class="...">` wrappers around escaped source.

use std::borrow::Cow;

use memchr::memchr;
use syntaxhighlight_scanner::Kind;

use super::Markup;

const ENTITIES: &[(u8, &[u8])] = &[
    (b'&', b"&amp;"),
    (b'<', b"&lt;"),
    (b'>', b"&gt;"),
    (b'"', b"&quot;"),
    (b'\'', b"&#39;"),
];

pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn open(&self, _kind: Kind, style: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<span class=\"");
        escape_into(style.as_bytes(), out);
        out.extend_from_slice(b"\">");
    }

    fn close(&self, _kind: Kind, _style: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(b"</span>");
    }

    fn escape(&self, text: &[u8], out: &mut Vec<u8>) {
        escape_into(text, out);
    }

    fn unescape<'a>(&self, escaped: &'a [u8]) -> Cow<'a, [u8]> {
        unescape(escaped)
    }
}

#[inline]
fn entity_for(b: u8) -> Option<&'static [u8]> {
    ENTITIES
        .iter()
        .find(|(raw, _)| *raw == b)
        .map(|(_, entity)| *entity)
}

/// Append `text` with `& < > " '` replaced by entities. Every other byte,
/// including invalid UTF-8, is copied unchanged.
pub fn escape_into(text: &[u8], out: &mut Vec<u8>) {
    let mut copied = 0;
    for (i, &b) in text.iter().enumerate() {
        if let Some(entity) = entity_for(b) {
            out.extend_from_slice(&text[copied..i]);
            out.extend_from_slice(entity);
            copied = i + 1;
        }
    }
    out.extend_from_slice(&text[copied..]);
}

pub fn escape(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

/// Reverse [`escape`]. Only the five entities `escape` produces are
/// decoded; any other `&` sequence is kept as is.
pub fn unescape(escaped: &[u8]) -> Cow<'_, [u8]> {
    let Some(first) = memchr(b'&', escaped) else {
        return Cow::Borrowed(escaped);
    };

    let mut out = Vec::with_capacity(escaped.len());
    out.extend_from_slice(&escaped[..first]);
    let mut pos = first;
    while pos < escaped.len() {
        let rest = &escaped[pos..];
        if rest[0] == b'&' {
            if let Some((raw, entity)) =
                ENTITIES.iter().find(|(_, entity)| rest.starts_with(entity))
            {
                out.push(*raw);
                pos += entity.len();
                continue;
            }
        }
        out.push(rest[0]);
        pos += 1;
    }
    Cow::Owned(out)
}

/// Drop every `<...>` tag from rendered HTML, keeping the text between tags.
///
/// Source text never contains a raw `<` after escaping, so every `<` in
/// rendered output starts a tag emitted by the annotator.
pub fn strip_tags(rendered: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rendered.len());
    let mut pos = 0;
    while pos < rendered.len() {
        match memchr(b'<', &rendered[pos..]) {
            Some(offset) => {
                out.extend_from_slice(&rendered[pos..pos + offset]);
                let tag_start = pos + offset;
                pos = match memchr(b'>', &rendered[tag_start..]) {
                    Some(end) => tag_start + end + 1,
                    None => rendered.len(),
                };
            }
            None => {
                out.extend_from_slice(&rendered[pos..]);
                break;
            }
        }
    }
    out
}

/// Recover the source from rendered HTML: strip tags, then un-escape.
pub fn to_source(rendered: &[u8]) -> Vec<u8> {
    unescape(&strip_tags(rendered)).into_owned()
}
