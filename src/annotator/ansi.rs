//! ANSI terminal output: SGR color sequences around escaped source.
//!
//! Styles are stored as SGR parameter strings (`"34;1"`); the conversion
//! from human-readable names (`"bold blue"`, `"bright black"`) happens once,
//! when the style map is built.
//!
//! Control bytes in the source other than tab, newline and carriage return
//! are shown as their Unicode control pictures (`ESC` becomes `␛`, U+241B),
//! so source text can never emit terminal sequences of its own. A control
//! picture already present in the source is prefixed with U+2426 to keep
//! the mapping reversible.

use std::borrow::Cow;

use colored::Color;
use memchr::memchr;
use syntaxhighlight_scanner::Kind;

use super::Markup;

const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;
const RESET: &[u8] = b"\x1b[0m";

/// First two UTF-8 bytes of U+2400..=U+243F.
const PICTURE_LEAD: [u8; 2] = [0xE2, 0x90];
/// Third byte of U+2421, the picture for DEL.
const DEL_PICTURE: u8 = 0xA1;
/// Third byte of U+2426, the prefix marking a literal picture.
const LITERAL_MARK: u8 = 0xA6;

pub struct AnsiMarkup;

impl Markup for AnsiMarkup {
    fn open(&self, _kind: Kind, style: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(b"\x1b[");
        out.extend_from_slice(style.as_bytes());
        out.push(b'm');
    }

    fn close(&self, _kind: Kind, _style: &str, out: &mut Vec<u8>) {
        out.extend_from_slice(RESET);
    }

    fn escape(&self, text: &[u8], out: &mut Vec<u8>) {
        escape_into(text, out);
    }

    fn unescape<'a>(&self, escaped: &'a [u8]) -> Cow<'a, [u8]> {
        unescape(escaped)
    }
}

#[inline]
fn is_hidden_control(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r')) || b == DEL
}

/// Whether `bytes` starts with a picture in the range `escape` produces.
#[inline]
fn starts_with_picture(bytes: &[u8]) -> bool {
    matches!(bytes, [0xE2, 0x90, third, ..] if (0x80..=LITERAL_MARK).contains(third))
}

/// Append `text` with hidden control bytes replaced by control pictures.
pub fn escape_into(text: &[u8], out: &mut Vec<u8>) {
    let mut copied = 0;
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        if is_hidden_control(b) {
            out.extend_from_slice(&text[copied..i]);
            out.extend_from_slice(&PICTURE_LEAD);
            out.push(if b == DEL { DEL_PICTURE } else { 0x80 + b });
            i += 1;
            copied = i;
        } else if starts_with_picture(&text[i..]) {
            out.extend_from_slice(&text[copied..i]);
            out.extend_from_slice(&PICTURE_LEAD);
            out.push(LITERAL_MARK);
            out.extend_from_slice(&text[i..i + 3]);
            i += 3;
            copied = i;
        } else {
            i += 1;
        }
    }
    out.extend_from_slice(&text[copied..]);
}

pub fn escape(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

/// Reverse [`escape`]. Text without control pictures is borrowed.
pub fn unescape(escaped: &[u8]) -> Cow<'_, [u8]> {
    if !escaped.windows(3).any(starts_with_picture) {
        return Cow::Borrowed(escaped);
    }

    let mut out = Vec::with_capacity(escaped.len());
    let mut pos = 0;
    while pos < escaped.len() {
        let rest = &escaped[pos..];
        match rest {
            [0xE2, 0x90, LITERAL_MARK, literal @ ..] if literal.len() >= 3 => {
                out.extend_from_slice(&literal[..3]);
                pos += 6;
            }
            [0xE2, 0x90, third @ 0x80..=0x9F, ..] => {
                out.push(third - 0x80);
                pos += 3;
            }
            [0xE2, 0x90, DEL_PICTURE, ..] => {
                out.push(DEL);
                pos += 3;
            }
            _ => {
                out.push(rest[0]);
                pos += 1;
            }
        }
    }
    Cow::Owned(out)
}

/// Drop every SGR sequence (`ESC [ ... m`) from rendered output.
///
/// Escaped source text never contains `ESC`, so every sequence found was
/// written by the annotator.
pub fn strip_sgr(rendered: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rendered.len());
    let mut pos = 0;
    while let Some(offset) = memchr(ESC, &rendered[pos..]) {
        out.extend_from_slice(&rendered[pos..pos + offset]);
        let sequence = pos + offset;
        pos = match memchr(b'm', &rendered[sequence..]) {
            Some(end) => sequence + end + 1,
            None => rendered.len(),
        };
    }
    out.extend_from_slice(&rendered[pos..]);
    out
}

/// Recover the source from rendered ANSI output: strip SGR, then un-escape.
pub fn to_source(rendered: &[u8]) -> Vec<u8> {
    unescape(&strip_sgr(rendered)).into_owned()
}

/// SGR parameters for a foreground color, optionally bold.
pub fn sgr_for_color(color: Color, bold: bool) -> String {
    let fg = color.to_fg_str();
    if bold { format!("{fg};1") } else { fg.into_owned() }
}

fn modifier_code(word: &str) -> Option<&'static str> {
    match word {
        "bold" => Some("1"),
        "dim" | "dimmed" => Some("2"),
        "italic" => Some("3"),
        "underline" => Some("4"),
        "reverse" | "reversed" => Some("7"),
        _ => None,
    }
}

/// Convert a user style to SGR parameters.
///
/// Accepts raw parameters (`"1;31"`) or words: any of `bold`, `dim`,
/// `italic`, `underline`, `reverse` plus at most one color name understood
/// by `colored` (`"red"`, `"bright blue"`). Returns `None` when the style
/// cannot be interpreted.
pub fn sgr_for_style(style: &str) -> Option<String> {
    let style = style.trim();
    if style.is_empty() {
        return None;
    }
    if style.bytes().all(|b| b.is_ascii_digit() || b == b';') {
        return Some(style.to_string());
    }

    let lowered = style.to_ascii_lowercase();
    let mut codes: Vec<Cow<'static, str>> = Vec::new();
    let mut color_words: Vec<&str> = Vec::new();
    for word in lowered.split_whitespace() {
        match modifier_code(word) {
            Some(code) => codes.push(Cow::Borrowed(code)),
            None => color_words.push(word),
        }
    }

    if !color_words.is_empty() {
        let color: Color = color_words.join(" ").parse().ok()?;
        codes.insert(0, color.to_fg_str());
    }
    Some(codes.join(";"))
}
