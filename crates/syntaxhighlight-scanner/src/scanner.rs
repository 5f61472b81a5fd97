//! Single-pass scanner.
//!
//! The scanner turns arbitrary bytes into a gap-free sequence of [`Token`]s.
//! It is total: every input, including invalid UTF-8 and binary data, yields
//! tokens that exactly partition the source, and every step consumes at
//! least one byte.
//!
//! Dispatch happens on the byte under the cursor, in a fixed priority order:
//! whitespace, string quote, comment delimiter, number, identifier,
//! operator/punctuation, and finally plaintext. Delimiter searches use
//! `memchr`, so the cost stays linear in the input length.

use memchr::{memchr2, memchr3, memmem};

use crate::char_codes::{
    BACKSLASH, CARRIAGE_RETURN, DOT, LINE_FEED, decode_char, is_ascii_ident_continue,
    is_ascii_ident_start, is_ascii_whitespace, is_closing_bracket, is_digit, is_operator_char,
    is_punctuation_char, is_radix_digit, is_unicode_ident_continue, is_unicode_ident_start,
};
use crate::tables::{Language, LanguageRegistry};
use crate::token::{Kind, Token};

/// Keywords after which an expression starts, so `.5` is a number.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "and", "await", "case", "do", "echo", "else", "in", "not", "of", "or", "print", "return",
    "select", "then", "throw", "when", "where", "yield",
];

fn is_expression_keyword(text: &[u8]) -> bool {
    EXPRESSION_KEYWORDS
        .iter()
        .any(|keyword| keyword.as_bytes().eq_ignore_ascii_case(text))
}

/// Cursor plus the lookback needed for local disambiguation.
///
/// Only lives for the duration of one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    pub pos: usize,
    /// Kind of the last non-trivia token.
    pub last_significant: Option<Kind>,
    /// Whether the last non-trivia token can end an operand (identifier,
    /// number, string, closing bracket, or a keyword such as `self` that
    /// names a value). After an operand a `.` is member access, not the
    /// start of a number.
    pub after_operand: bool,
}

/// Streaming scanner over a byte buffer.
pub struct Scanner<'a> {
    source: &'a [u8],
    language: &'a Language,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8], language: &'a Language) -> Self {
        Scanner {
            source,
            language,
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn language(&self) -> &'a Language {
        self.language
    }

    #[inline]
    fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.state.pos + offset).copied()
    }

    fn scan_token(&mut self) -> Kind {
        let pos = self.state.pos;
        let b = self.source[pos];
        let language = self.language;

        if is_ascii_whitespace(b) || self.unicode_whitespace_len(pos).is_some() {
            return self.scan_whitespace();
        }

        if language.is_quote(b) {
            return self.scan_string(b);
        }

        if let Some((open_len, close)) = language.block_comment_at(self.source, pos) {
            return self.scan_block_comment(open_len, close);
        }
        if let Some(delimiter_len) = language.line_comment_at(self.source, pos) {
            return self.scan_line_comment(delimiter_len);
        }

        if is_digit(b)
            || (b == DOT && !self.state.after_operand && self.peek(1).is_some_and(is_digit))
        {
            return self.scan_number();
        }

        if is_ascii_ident_start(b) {
            return self.scan_identifier();
        }
        if b >= 0x80 {
            if let Some((ch, _)) = decode_char(self.source, pos) {
                if is_unicode_ident_start(ch) {
                    return self.scan_identifier();
                }
            }
        }

        if is_operator_char(b) || is_punctuation_char(b) {
            return match language.match_operator(self.source, pos) {
                Some(len) => {
                    self.state.pos += len;
                    Kind::Operator
                }
                None => {
                    self.state.pos += 1;
                    Kind::Punctuation
                }
            };
        }

        // Valid non-ASCII code points stay whole so rendered output never
        // splits a character; anything else is one byte.
        let width = if b >= 0x80 {
            decode_char(self.source, pos).map_or(1, |(_, width)| width)
        } else {
            1
        };
        self.state.pos += width;
        Kind::Plaintext
    }

    fn unicode_whitespace_len(&self, pos: usize) -> Option<usize> {
        if self.source[pos] < 0x80 {
            return None;
        }
        match decode_char(self.source, pos) {
            Some((ch, width)) if ch.is_whitespace() => Some(width),
            _ => None,
        }
    }

    fn scan_whitespace(&mut self) -> Kind {
        let len = self.source.len();
        while self.state.pos < len {
            let b = self.source[self.state.pos];
            if is_ascii_whitespace(b) {
                self.state.pos += 1;
            } else if let Some(width) = self.unicode_whitespace_len(self.state.pos) {
                self.state.pos += width;
            } else {
                break;
            }
        }
        Kind::Whitespace
    }

    /// Scan a string opened by `quote`.
    ///
    /// A backslash escapes the following byte. Single- and double-quoted
    /// strings stop before an unescaped line feed when unterminated;
    /// backtick and triple-quoted strings may span lines.
    fn scan_string(&mut self, quote: u8) -> Kind {
        let source = self.source;
        let len = source.len();
        let start = self.state.pos;
        let triple = self.language.triple_quoted_strings()
            && quote != b'`'
            && source[start..].starts_with(&[quote, quote, quote]);
        let multiline = triple || quote == b'`';
        let mut pos = start + if triple { 3 } else { 1 };

        loop {
            let rest = &source[pos..];
            let hit = if multiline {
                memchr2(quote, BACKSLASH, rest)
            } else {
                memchr3(quote, BACKSLASH, LINE_FEED, rest)
            };
            let Some(offset) = hit else {
                pos = len;
                break;
            };
            let at = pos + offset;
            match source[at] {
                BACKSLASH => pos = (at + 2).min(len),
                LINE_FEED => {
                    pos = at;
                    if source[pos - 1] == CARRIAGE_RETURN && pos - 1 > start {
                        pos -= 1;
                    }
                    break;
                }
                _ if triple => {
                    if source[at..].starts_with(&[quote, quote, quote]) {
                        pos = at + 3;
                        break;
                    }
                    pos = at + 1;
                }
                _ => {
                    pos = at + 1;
                    break;
                }
            }
        }

        self.state.pos = pos;
        Kind::String
    }

    fn scan_line_comment(&mut self, delimiter_len: usize) -> Kind {
        let body = self.state.pos + delimiter_len;
        self.state.pos = match memchr2(LINE_FEED, CARRIAGE_RETURN, &self.source[body..]) {
            Some(offset) => body + offset,
            None => self.source.len(),
        };
        Kind::Comment
    }

    /// Block comments do not nest; an unterminated one runs to the end.
    fn scan_block_comment(&mut self, open_len: usize, close: &[u8]) -> Kind {
        let body = self.state.pos + open_len;
        self.state.pos = match memmem::find(&self.source[body..], close) {
            Some(offset) => body + offset + close.len(),
            None => self.source.len(),
        };
        Kind::Comment
    }

    fn scan_number(&mut self) -> Kind {
        let mut radix = 10;

        if self.peek(0) == Some(b'0') {
            radix = match self.peek(1) {
                Some(b'x' | b'X') => 16,
                Some(b'o' | b'O') => 8,
                Some(b'b' | b'B') => 2,
                _ => 10,
            };
            if radix != 10 {
                self.state.pos += 2;
            }
        }

        if self.peek(0) != Some(DOT) {
            self.consume_digits(radix);
        }

        // At most one fractional part, and only when a digit follows the dot,
        // so `1..2` and `1.max(2)` keep their operators.
        if (radix == 10 || radix == 16)
            && self.peek(0) == Some(DOT)
            && self.peek(1).is_some_and(|b| is_radix_digit(b, radix))
        {
            self.state.pos += 1;
            self.consume_digits(radix);
        }

        let exponent_markers: &[u8] = match radix {
            10 => b"eE",
            16 => b"pP",
            _ => b"",
        };
        if self.peek(0).is_some_and(|b| exponent_markers.contains(&b)) {
            let sign = usize::from(matches!(self.peek(1), Some(b'+' | b'-')));
            if self.peek(1 + sign).is_some_and(is_digit) {
                self.state.pos += 1 + sign;
                self.consume_digits(10);
            }
        }

        // Type suffixes: `u32`, `f64`, `n`, `L`, `i`.
        while self.peek(0).is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_') {
            self.state.pos += 1;
        }
        Kind::Number
    }

    fn consume_digits(&mut self, radix: u32) {
        while self.peek(0).is_some_and(|b| is_radix_digit(b, radix) || b == b'_') {
            self.state.pos += 1;
        }
    }

    fn scan_identifier(&mut self) -> Kind {
        let start = self.state.pos;
        let len = self.source.len();
        while self.state.pos < len {
            let b = self.source[self.state.pos];
            if b < 0x80 {
                if !is_ascii_ident_continue(b) {
                    break;
                }
                self.state.pos += 1;
                continue;
            }
            match decode_char(self.source, self.state.pos) {
                Some((ch, width)) if is_unicode_ident_continue(ch) => self.state.pos += width,
                _ => break,
            }
        }

        if self.language.is_keyword(&self.source[start..self.state.pos]) {
            Kind::Keyword
        } else {
            Kind::Ident
        }
    }

    fn record(&mut self, token: &Token) {
        if token.kind.is_trivia() {
            return;
        }
        self.state.last_significant = Some(token.kind);
        self.state.after_operand = match token.kind {
            Kind::Ident | Kind::Number | Kind::String => true,
            Kind::Keyword => !is_expression_keyword(token.text(self.source)),
            Kind::Punctuation => is_closing_bracket(self.source[token.end - 1]),
            _ => false,
        };
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let start = self.state.pos;
        if start >= self.source.len() {
            return None;
        }

        let mut kind = self.scan_token();
        // Every step must consume input.
        if self.state.pos <= start {
            self.state.pos = start + 1;
            kind = Kind::Plaintext;
        }
        self.state.pos = self.state.pos.min(self.source.len());

        let token = Token::new(kind, start, self.state.pos);
        self.record(&token);
        Some(token)
    }
}

/// Scan `source` with the merged default table of the built-in registry.
pub fn scan(source: &[u8]) -> Vec<Token> {
    let registry = LanguageRegistry::builtin();
    scan_with(source, registry.default_language())
}

/// Scan `source` with an explicit language table.
pub fn scan_with(source: &[u8], language: &Language) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    tokens.extend(Scanner::new(source, language));
    tokens
}
