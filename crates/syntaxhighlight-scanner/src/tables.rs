//! Per-language keyword, operator, comment and quote tables.
//!
//! A language is pure data: the scanner runs the same algorithm for every
//! language and only consults the active [`Language`]. Adding a language is
//! adding one [`LanguageSpec`], either to the built-in list below or to a
//! custom [`LanguageRegistry`] at runtime (specs deserialize from JSON).
//!
//! When no hint is given (or the hint is unknown) the registry hands out a
//! merged default table holding the union of every registered language's
//! keywords and operators. This misclassifies the occasional identifier as a
//! keyword, which is acceptable for a best-effort highlighter.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::char_codes::{is_operator_char, is_punctuation_char};

/// Name of the merged table used when no language hint applies.
pub const DEFAULT_LANGUAGE: &str = "default";

/// Hint value that explicitly asks for the merged default table.
pub const AUTO_HINT: &str = "auto";

// =============================================================================
// Externally configurable table data
// =============================================================================

/// A block comment delimiter pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockComment {
    pub open: String,
    pub close: String,
    /// Both delimiters only count at the start of a line (Ruby's
    /// `=begin` / `=end`).
    #[serde(default)]
    pub line_start: bool,
}

impl BlockComment {
    pub fn new(open: &str, close: &str) -> Self {
        BlockComment {
            open: open.to_string(),
            close: close.to_string(),
            line_start: false,
        }
    }

    pub fn at_line_start(open: &str, close: &str) -> Self {
        BlockComment {
            line_start: true,
            ..BlockComment::new(open, close)
        }
    }
}

fn default_quotes() -> String {
    "'\"`".to_string()
}

/// Owned, serializable description of one language family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSpec {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// File extensions without the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Multi- and single-character operators. Order does not matter; the
    /// compiled table sorts them longest first.
    #[serde(default)]
    pub operators: Vec<String>,
    #[serde(default)]
    pub line_comments: Vec<String>,
    #[serde(default)]
    pub block_comments: Vec<BlockComment>,
    /// ASCII characters that open (and close) a string literal.
    #[serde(default = "default_quotes")]
    pub quotes: String,
    /// `"""` / `'''` open a string closed by the same triple.
    #[serde(default)]
    pub triple_quoted_strings: bool,
    #[serde(default)]
    pub case_insensitive_keywords: bool,
}

impl LanguageSpec {
    /// An empty table: no keywords, no operators, no comments.
    pub fn new(name: &str) -> Self {
        LanguageSpec {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: Vec::new(),
            keywords: Vec::new(),
            operators: Vec::new(),
            line_comments: Vec::new(),
            block_comments: Vec::new(),
            quotes: default_quotes(),
            triple_quoted_strings: false,
            case_insensitive_keywords: false,
        }
    }
}

// =============================================================================
// Compiled tables
// =============================================================================

/// Compiled, immutable table consulted by the scanner.
#[derive(Clone, Debug)]
pub struct Language {
    name: String,
    keywords: FxHashSet<Box<[u8]>>,
    case_insensitive_keywords: bool,
    /// Operators indexed by first byte, longest first.
    operators: FxHashMap<u8, Vec<Box<[u8]>>>,
    max_operator_len: usize,
    line_comments: Vec<Box<[u8]>>,
    block_comments: Vec<CompiledBlockComment>,
    quotes: Vec<u8>,
    triple_quoted_strings: bool,
}

#[derive(Clone, Debug)]
struct CompiledBlockComment {
    open: Box<[u8]>,
    /// For line-start comments this includes the preceding `\n`.
    close: Box<[u8]>,
    line_start: bool,
}

impl CompiledBlockComment {
    fn new(open: &[u8], close: &[u8], line_start: bool) -> Self {
        let close = if line_start {
            [b"\n", close].concat().into_boxed_slice()
        } else {
            Box::from(close)
        };
        CompiledBlockComment {
            open: Box::from(open),
            close,
            line_start,
        }
    }
}

impl Language {
    pub fn from_spec(spec: &LanguageSpec) -> Self {
        let mut language = Language {
            name: spec.name.trim().to_ascii_lowercase(),
            keywords: FxHashSet::default(),
            case_insensitive_keywords: spec.case_insensitive_keywords,
            operators: FxHashMap::default(),
            max_operator_len: 0,
            line_comments: Vec::new(),
            block_comments: Vec::new(),
            quotes: Vec::new(),
            triple_quoted_strings: spec.triple_quoted_strings,
        };
        language.absorb(spec);
        language.finish();
        language
    }

    /// Union of every spec's keywords and operators, with generic comment
    /// and quote rules. Case-insensitive keyword sets are merged in their
    /// lowercase form.
    pub fn merged<'a>(name: &str, specs: impl IntoIterator<Item = &'a LanguageSpec>) -> Self {
        let mut language = Language {
            name: name.to_string(),
            keywords: FxHashSet::default(),
            case_insensitive_keywords: false,
            operators: FxHashMap::default(),
            max_operator_len: 0,
            line_comments: vec![Box::from(&b"//"[..]), Box::from(&b"#"[..])],
            block_comments: vec![CompiledBlockComment::new(b"/*", b"*/", false)],
            quotes: default_quotes().into_bytes(),
            triple_quoted_strings: true,
        };
        for spec in specs {
            language.absorb_keywords(spec);
            language.absorb_operators(spec);
        }
        language.finish();
        language
    }

    fn absorb(&mut self, spec: &LanguageSpec) {
        self.absorb_keywords(spec);
        self.absorb_operators(spec);
        for delimiter in &spec.line_comments {
            if !delimiter.is_empty() {
                self.line_comments.push(Box::from(delimiter.as_bytes()));
            }
        }
        for pair in &spec.block_comments {
            if !pair.open.is_empty() && !pair.close.is_empty() {
                self.block_comments.push(CompiledBlockComment::new(
                    pair.open.as_bytes(),
                    pair.close.as_bytes(),
                    pair.line_start,
                ));
            }
        }
        // Only ASCII punctuation can be a quote; letters and digits would
        // shadow identifiers and numbers.
        for quote in spec.quotes.bytes() {
            if quote.is_ascii_punctuation() && !self.quotes.contains(&quote) {
                self.quotes.push(quote);
            }
        }
    }

    fn absorb_keywords(&mut self, spec: &LanguageSpec) {
        for keyword in &spec.keywords {
            if keyword.is_empty() {
                continue;
            }
            let bytes = if spec.case_insensitive_keywords {
                keyword.to_ascii_lowercase().into_bytes()
            } else {
                keyword.clone().into_bytes()
            };
            self.keywords.insert(bytes.into_boxed_slice());
        }
    }

    fn absorb_operators(&mut self, spec: &LanguageSpec) {
        for operator in &spec.operators {
            let bytes = operator.as_bytes();
            let Some(&first) = bytes.first() else {
                continue;
            };
            // Unreachable operators (not starting with an operator or
            // punctuation char) are dropped.
            if !is_operator_char(first) && !is_punctuation_char(first) {
                continue;
            }
            let bucket = self.operators.entry(first).or_default();
            if !bucket.iter().any(|existing| &**existing == bytes) {
                bucket.push(Box::from(bytes));
            }
        }
    }

    fn finish(&mut self) {
        for bucket in self.operators.values_mut() {
            bucket.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }
        self.max_operator_len = self
            .operators
            .values()
            .flat_map(|bucket| bucket.iter().map(|op| op.len()))
            .max()
            .unwrap_or(0);
        // Longer delimiters first so `///` wins over `//` if both are listed.
        self.line_comments.sort_by(|a, b| b.len().cmp(&a.len()));
        self.block_comments.sort_by(|a, b| b.open.len().cmp(&a.open.len()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_keyword(&self, lexeme: &[u8]) -> bool {
        if self.case_insensitive_keywords {
            self.keywords.contains(lexeme.to_ascii_lowercase().as_slice())
        } else {
            self.keywords.contains(lexeme)
        }
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn max_operator_len(&self) -> usize {
        self.max_operator_len
    }

    #[inline]
    pub fn is_quote(&self, b: u8) -> bool {
        self.quotes.contains(&b)
    }

    pub fn triple_quoted_strings(&self) -> bool {
        self.triple_quoted_strings
    }

    /// Length of the longest operator matching at `pos`.
    pub fn match_operator(&self, bytes: &[u8], pos: usize) -> Option<usize> {
        let first = *bytes.get(pos)?;
        let rest = &bytes[pos..];
        self.operators
            .get(&first)?
            .iter()
            .find(|op| rest.starts_with(op))
            .map(|op| op.len())
    }

    /// Length of the line comment delimiter at `pos`, if any.
    pub fn line_comment_at(&self, bytes: &[u8], pos: usize) -> Option<usize> {
        let rest = bytes.get(pos..)?;
        self.line_comments
            .iter()
            .find(|delimiter| rest.starts_with(delimiter))
            .map(|delimiter| delimiter.len())
    }

    /// Opening length and closing delimiter of the block comment at `pos`.
    ///
    /// Line-start comments only open at offset 0 or right after `\n`; their
    /// closing delimiter is returned with the `\n` it must follow.
    pub fn block_comment_at(&self, bytes: &[u8], pos: usize) -> Option<(usize, &[u8])> {
        let rest = bytes.get(pos..)?;
        let at_line_start = pos == 0 || bytes[pos - 1] == b'\n';
        self.block_comments
            .iter()
            .filter(|comment| at_line_start || !comment.line_start)
            .find(|comment| rest.starts_with(&comment.open))
            .map(|comment| (comment.open.len(), &*comment.close))
    }
}

// =============================================================================
// Registry
// =============================================================================

static BUILTIN_REGISTRY: Lazy<Arc<LanguageRegistry>> =
    Lazy::new(|| Arc::new(LanguageRegistry::with_specs(LanguageRegistry::builtin_specs())));

/// Set of compiled languages plus the merged default, resolved by hint.
///
/// Built once and shared read-only; nothing mutates a registry after
/// construction.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_name: FxHashMap<String, usize>,
    by_extension: FxHashMap<String, usize>,
    default: Language,
}

impl LanguageRegistry {
    /// The process-wide registry of built-in languages.
    pub fn builtin() -> Arc<LanguageRegistry> {
        Arc::clone(&BUILTIN_REGISTRY)
    }

    /// Build a registry from specs. A later spec with the same name, alias
    /// or extension as an earlier one takes its place for lookups.
    pub fn with_specs(specs: impl IntoIterator<Item = LanguageSpec>) -> Self {
        let specs: Vec<LanguageSpec> = specs.into_iter().collect();
        let mut registry = LanguageRegistry {
            languages: Vec::with_capacity(specs.len()),
            by_name: FxHashMap::default(),
            by_extension: FxHashMap::default(),
            default: Language::merged(DEFAULT_LANGUAGE, &specs),
        };
        for spec in &specs {
            let index = registry.languages.len();
            registry.languages.push(Language::from_spec(spec));
            for name in std::iter::once(&spec.name).chain(&spec.aliases) {
                registry.by_name.insert(normalize_hint(name), index);
            }
            for extension in &spec.extensions {
                let extension = normalize_hint(extension.trim_start_matches('.'));
                registry.by_extension.insert(extension, index);
            }
        }
        registry
    }

    /// Specs for every built-in language family.
    pub fn builtin_specs() -> Vec<LanguageSpec> {
        BUILTINS.iter().map(BuiltinLanguage::to_spec).collect()
    }

    pub fn default_language(&self) -> &Language {
        &self.default
    }

    /// Find a language by name, alias, file name or bare extension.
    pub fn lookup(&self, hint: &str) -> Option<&Language> {
        let hint = normalize_hint(hint);
        if hint.is_empty() || hint == AUTO_HINT {
            return None;
        }
        if let Some(&index) = self.by_name.get(&hint) {
            return self.languages.get(index);
        }
        if let Some(&index) = self.by_extension.get(&hint) {
            return self.languages.get(index);
        }
        let file_name = hint.rsplit(['/', '\\']).next().unwrap_or(hint.as_str());
        let (_, extension) = file_name.rsplit_once('.')?;
        let index = *self.by_extension.get(extension)?;
        self.languages.get(index)
    }

    /// The language for `hint`, or the merged default when the hint is
    /// absent, `"auto"` or unrecognized.
    pub fn resolve(&self, hint: Option<&str>) -> &Language {
        hint.and_then(|hint| self.lookup(hint)).unwrap_or(&self.default)
    }

    /// Names of registered languages, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(Language::name)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

fn normalize_hint(hint: &str) -> String {
    hint.trim().to_ascii_lowercase()
}

// =============================================================================
// Built-in language data
// =============================================================================

struct BuiltinLanguage {
    name: &'static str,
    aliases: &'static [&'static str],
    extensions: &'static [&'static str],
    keywords: &'static [&'static str],
    operators: &'static [&'static str],
    line_comments: &'static [&'static str],
    block_comments: &'static [BuiltinBlockComment],
    quotes: &'static str,
    triple_quoted_strings: bool,
    case_insensitive_keywords: bool,
}

impl BuiltinLanguage {
    fn to_spec(&self) -> LanguageSpec {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        LanguageSpec {
            name: self.name.to_string(),
            aliases: owned(self.aliases),
            extensions: owned(self.extensions),
            keywords: owned(self.keywords),
            operators: owned(self.operators),
            line_comments: owned(self.line_comments),
            block_comments: self
                .block_comments
                .iter()
                .map(|block| BlockComment {
                    open: block.open.to_string(),
                    close: block.close.to_string(),
                    line_start: block.line_start,
                })
                .collect(),
            quotes: self.quotes.to_string(),
            triple_quoted_strings: self.triple_quoted_strings,
            case_insensitive_keywords: self.case_insensitive_keywords,
        }
    }
}

struct BuiltinBlockComment {
    open: &'static str,
    close: &'static str,
    line_start: bool,
}

const C_COMMENTS: &[BuiltinBlockComment] = &[BuiltinBlockComment {
    open: "/*",
    close: "*/",
    line_start: false,
}];

const C_FAMILY_OPERATORS: &[&str] = &[
    "<<=", ">>=", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|",
    "^", "~", "?", ":",
];

const JS_OPERATORS: &[&str] = &[
    ">>>=", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "...", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^",
    "~", "?", ":", "@",
];

const BUILTINS: &[BuiltinLanguage] = &[
    BuiltinLanguage {
        name: "c",
        aliases: &["h"],
        extensions: &["c", "h"],
        keywords: &[
            "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
            "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
            "register", "restrict", "return", "short", "signed", "sizeof", "static", "struct",
            "switch", "typedef", "union", "unsigned", "void", "volatile", "while", "_Bool",
            "NULL",
        ],
        operators: C_FAMILY_OPERATORS,
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "cpp",
        aliases: &["c++", "cxx", "hpp"],
        extensions: &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
        keywords: &[
            "alignas", "alignof", "auto", "bool", "break", "case", "catch", "char", "class",
            "const", "constexpr", "const_cast", "continue", "decltype", "default", "delete", "do",
            "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
            "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable",
            "namespace", "new", "noexcept", "nullptr", "operator", "private", "protected",
            "public", "register", "reinterpret_cast", "return", "short", "signed", "sizeof",
            "static", "static_assert", "static_cast", "struct", "switch", "template", "this",
            "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
            "virtual", "void", "volatile", "while",
        ],
        operators: &[
            "<=>", "<<=", ">>=", "->*", "::", "->", ".*", "++", "--", "<<", ">>", "<=", ">=",
            "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-",
            "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
        ],
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "csharp",
        aliases: &["c#", "cs"],
        extensions: &["cs"],
        keywords: &[
            "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
            "class", "const", "continue", "decimal", "default", "delegate", "do", "double",
            "else", "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float",
            "for", "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal",
            "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out",
            "override", "params", "private", "protected", "public", "readonly", "ref", "return",
            "sbyte", "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct",
            "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong", "unchecked",
            "unsafe", "ushort", "using", "var", "virtual", "void", "volatile", "while", "async",
            "await",
        ],
        operators: &[
            "??=", "<<=", ">>=", "=>", "??", "?.", "::", "->", "++", "--", "<<", ">>", "<=",
            ">=", "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+",
            "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
        ],
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "go",
        aliases: &["golang"],
        extensions: &["go"],
        keywords: &[
            "break", "case", "chan", "const", "continue", "default", "defer", "else",
            "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
            "package", "range", "return", "select", "struct", "switch", "type", "var", "nil",
            "true", "false", "iota",
        ],
        operators: &[
            "<<=", ">>=", "&^=", "...", ":=", "<-", "&^", "++", "--", "<<", ">>", "<=", ">=",
            "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-",
            "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", ":",
        ],
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"`",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "java",
        aliases: &[],
        extensions: &["java"],
        keywords: &[
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
            "interface", "long", "native", "new", "package", "private", "protected", "public",
            "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
            "throw", "throws", "transient", "try", "void", "volatile", "while", "var", "record",
            "true", "false", "null",
        ],
        operators: &[
            ">>>=", "<<=", ">>=", ">>>", "->", "::", "++", "--", "<<", ">>", "<=", ">=", "==",
            "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*",
            "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":", "@",
        ],
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"",
        triple_quoted_strings: true,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "javascript",
        aliases: &["js", "jsx", "typescript", "ts", "tsx", "node"],
        extensions: &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"],
        keywords: &[
            "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
            "from", "function", "if", "import", "in", "instanceof", "let", "new", "null", "of",
            "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof",
            "undefined", "var", "void", "while", "with", "yield", "abstract", "as", "declare",
            "enum", "implements", "interface", "keyof", "namespace", "private", "protected",
            "public", "readonly", "type",
        ],
        operators: JS_OPERATORS,
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "'\"`",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "python",
        aliases: &["py", "python3"],
        extensions: &["py", "pyi", "pyw"],
        keywords: &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield", "match", "case",
        ],
        operators: &[
            "**=", "//=", ">>=", "<<=", "->", ":=", "**", "//", "<<", ">>", "<=", ">=", "==",
            "!=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "@=", "+", "-", "*", "/",
            "%", "=", "<", ">", "&", "|", "^", "~", ":", "@",
        ],
        line_comments: &["#"],
        block_comments: &[],
        quotes: "'\"",
        triple_quoted_strings: true,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "ruby",
        aliases: &["rb"],
        extensions: &["rb", "rake", "gemspec"],
        keywords: &[
            "BEGIN", "END", "alias", "and", "begin", "break", "case", "class", "def", "defined",
            "do", "else", "elsif", "end", "ensure", "false", "for", "if", "in", "module", "next",
            "nil", "not", "or", "redo", "rescue", "retry", "return", "self", "super", "then",
            "true", "undef", "unless", "until", "when", "while", "yield", "require",
        ],
        operators: &[
            "**=", "<=>", "===", "...", "||=", "&&=", "<<=", ">>=", "=>", "->", "=~", "!~",
            "**", "..", "::", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=", "*=",
            "/=", "%=", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~", "?",
            ":",
        ],
        line_comments: &["#"],
        block_comments: &[BuiltinBlockComment {
            open: "=begin",
            close: "=end",
            line_start: true,
        }],
        quotes: "'\"`",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "rust",
        aliases: &["rs"],
        extensions: &["rs"],
        keywords: &[
            "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
            "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
            "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
            "trait", "true", "type", "unsafe", "use", "where", "while", "yield",
        ],
        operators: &[
            "<<=", ">>=", "...", "..=", "::", "->", "=>", "..", "<<", ">>", "<=", ">=", "==",
            "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*",
            "/", "%", "=", "<", ">", "!", "&", "|", "^", "?", ":", "@",
        ],
        line_comments: &["//"],
        block_comments: C_COMMENTS,
        quotes: "\"",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "shell",
        aliases: &["sh", "bash", "zsh"],
        extensions: &["sh", "bash", "zsh"],
        keywords: &[
            "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until", "do",
            "done", "in", "function", "return", "local", "export", "readonly", "select", "time",
            "exit", "set", "unset", "shift", "source",
        ],
        operators: &[
            "&&", "||", ";;", ">>", "<<", "<=", ">=", "==", "!=", "=~", "|&", ">&", "<&", "=",
            "<", ">", "!", "&", "|", "+", "-", "*", "/", "%",
        ],
        line_comments: &["#"],
        block_comments: &[],
        quotes: "'\"`",
        triple_quoted_strings: false,
        case_insensitive_keywords: false,
    },
    BuiltinLanguage {
        name: "sql",
        aliases: &["postgres", "postgresql", "mysql", "sqlite"],
        extensions: &["sql"],
        keywords: &[
            "select", "from", "where", "insert", "into", "values", "update", "set", "delete",
            "create", "alter", "drop", "table", "index", "view", "join", "inner", "outer",
            "left", "right", "full", "on", "group", "by", "order", "having", "limit", "offset",
            "union", "all", "distinct", "and", "or", "not", "null", "is", "in", "like",
            "between", "exists", "case", "when", "then", "else", "end", "as", "asc", "desc",
            "primary", "key", "foreign", "references", "default", "returning", "with",
        ],
        operators: &[
            "<>", "<=", ">=", "!=", "||", "::", "+", "-", "*", "/", "%", "=", "<", ">",
        ],
        line_comments: &["--"],
        block_comments: C_COMMENTS,
        quotes: "'\"`",
        triple_quoted_strings: false,
        case_insensitive_keywords: true,
    },
];
