//! Byte and code point classification used by the scanner.
//!
//! Everything here works on raw bytes: the scanner never assumes its input
//! is valid UTF-8, so multi-byte sequences are decoded one code point at a
//! time and rejected (rather than replaced) when malformed.

pub const TAB: u8 = b'\t';
pub const LINE_FEED: u8 = b'\n';
pub const VERTICAL_TAB: u8 = 0x0b;
pub const FORM_FEED: u8 = 0x0c;
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const SPACE: u8 = b' ';
pub const BACKSLASH: u8 = b'\\';
pub const DOT: u8 = b'.';

/// Characters that may begin an operator.
const OPERATOR_CHARS: &[u8] = b"+-*/%=<>!&|^~?:.@";

/// Brackets and separators. These become `Punctuation` when no operator in
/// the active table matches at the cursor.
const PUNCTUATION_CHARS: &[u8] = b"()[]{};,#\\";

#[inline]
pub const fn is_ascii_whitespace(b: u8) -> bool {
    matches!(
        b,
        SPACE | TAB | LINE_FEED | CARRIAGE_RETURN | VERTICAL_TAB | FORM_FEED
    )
}

#[inline]
pub const fn is_line_break(b: u8) -> bool {
    b == LINE_FEED || b == CARRIAGE_RETURN
}

#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub const fn is_ascii_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
pub const fn is_ascii_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[inline]
pub fn is_operator_char(b: u8) -> bool {
    OPERATOR_CHARS.contains(&b)
}

#[inline]
pub fn is_punctuation_char(b: u8) -> bool {
    PUNCTUATION_CHARS.contains(&b)
}

/// Closing brackets end an operand, like identifiers and numbers do.
#[inline]
pub const fn is_closing_bracket(b: u8) -> bool {
    matches!(b, b')' | b']' | b'}')
}

/// Digits valid after a `0x` / `0o` / `0b` prefix, or plain decimal digits.
#[inline]
pub const fn is_radix_digit(b: u8, radix: u32) -> bool {
    match radix {
        16 => b.is_ascii_hexdigit(),
        8 => matches!(b, b'0'..=b'7'),
        2 => matches!(b, b'0' | b'1'),
        _ => b.is_ascii_digit(),
    }
}

/// Expected length of the UTF-8 sequence introduced by `lead`, or 0 when
/// `lead` cannot start a sequence.
#[inline]
pub const fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

/// Decode the code point starting at `pos`.
///
/// Returns `None` for an invalid or truncated sequence, so the caller can
/// fall back to a single-byte token.
pub fn decode_char(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    let lead = *bytes.get(pos)?;
    let width = utf8_sequence_len(lead);
    if width == 0 {
        return None;
    }
    let slice = bytes.get(pos..pos + width)?;
    let decoded = std::str::from_utf8(slice).ok()?;
    decoded.chars().next().map(|ch| (ch, width))
}

/// Unicode identifier start (XID_Start), used for non-ASCII code points.
#[inline]
pub fn is_unicode_ident_start(ch: char) -> bool {
    unicode_ident::is_xid_start(ch)
}

/// Unicode identifier continuation (XID_Continue), used for non-ASCII code points.
#[inline]
pub fn is_unicode_ident_continue(ch: char) -> bool {
    unicode_ident::is_xid_continue(ch)
}
