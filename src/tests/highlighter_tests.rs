//! Tests for highlighter.rs

use crate::annotator::html;
use crate::config::HighlightConfig;
use crate::error::{ConfigError, Error};
use crate::highlighter::*;
use serde_json::json;
use syntaxhighlight_scanner::{Kind, LanguageRegistry, LanguageSpec, Token};

fn highlighter(json: &str) -> Highlighter {
    let config = HighlightConfig::from_json(json).expect("config parses");
    Highlighter::new(&config).expect("config resolves")
}

fn kinds_and_text<'a>(source: &'a [u8], tokens: &[Token]) -> Vec<(Kind, &'a [u8])> {
    tokens.iter().map(|t| (t.kind, t.text(source))).collect()
}

#[test]
fn test_comment_then_assignment_tokens() {
    let hl = highlighter(r#"{"format": "tokens"}"#);
    let source = b"// hi\nx=1";
    let output = hl.highlight(source).expect("highlight");
    let tokens = output.tokens().expect("token output");
    assert_eq!(
        kinds_and_text(source, tokens),
        vec![
            (Kind::Comment, &b"// hi"[..]),
            (Kind::Whitespace, &b"\n"[..]),
            (Kind::Ident, &b"x"[..]),
            (Kind::Operator, &b"="[..]),
            (Kind::Number, &b"1"[..]),
        ]
    );
}

#[test]
fn test_unterminated_string_is_one_token() {
    let hl = highlighter(r#"{"format": "tokens"}"#);
    let source = b"'unterminated \"str";
    let output = hl.highlight(source).expect("highlight");
    assert_eq!(
        output.tokens(),
        Some(&[Token::new(Kind::String, 0, source.len())][..])
    );
}

#[test]
fn test_empty_source() {
    let hl = highlighter("{}");
    assert!(hl.tokens(b"").is_empty());
    let output = hl.highlight(b"").expect("highlight");
    let annotated = output.annotated().expect("html output");
    assert!(annotated.is_empty());
    assert_eq!(annotated.to_string_lossy(), "");
}

#[test]
fn test_html_round_trip_of_markup_literal() {
    let hl = highlighter(r#"{"format": "html"}"#);
    let source = b"<b>&amp;</b>";
    let output = hl.highlight(source).expect("highlight");
    let rendered = output.annotated().expect("html output").render();

    assert!(rendered.starts_with(b"<span class=\"kind-"));
    assert_eq!(html::strip_tags(&rendered), b"&lt;b&gt;&amp;amp;&lt;/b&gt;".to_vec());
    assert_eq!(html::to_source(&rendered), source.to_vec());
}

#[test]
fn test_invalid_byte_is_isolated() {
    let hl = highlighter(r#"{"format": "tokens"}"#);
    let source = b"a=\xFF+b";
    let tokens = hl.tokens(source);
    assert_eq!(
        kinds_and_text(source, &tokens),
        vec![
            (Kind::Ident, &b"a"[..]),
            (Kind::Operator, &b"="[..]),
            (Kind::Plaintext, &b"\xFF"[..]),
            (Kind::Operator, &b"+"[..]),
            (Kind::Ident, &b"b"[..]),
        ]
    );

    let html_output = highlighter("{}").highlight(source).expect("highlight");
    let rendered = html_output.annotated().expect("html output").render();
    assert_eq!(html::to_source(&rendered), source.to_vec());
}

#[test]
fn test_language_hint_selects_table() {
    let hl = highlighter(r#"{"language": "main.rs"}"#);
    assert_eq!(hl.language().name(), "rust");
    let output = hl.highlight(b"fn f() {}").expect("highlight");
    assert!(
        output
            .annotated()
            .expect("html output")
            .to_string_lossy()
            .starts_with("<span class=\"kind-keyword\">fn</span>")
    );
}

#[test]
fn test_unknown_hint_falls_back_to_default() {
    let hl = highlighter(r#"{"language": "klingon"}"#);
    assert_eq!(hl.language().name(), "default");
    assert_eq!(hl.tokens(b"x=1").len(), 3);
}

#[test]
fn test_custom_language_from_config() {
    let hl = highlighter(
        r#"{
          "language": "toy",
          "format": "tokens",
          "languages": [{"name": "toy", "keywords": ["loop"], "lineComments": [";;"]}]
        }"#,
    );
    let source = b"loop ;; done";
    let tokens = hl.tokens(source);
    assert_eq!(
        kinds_and_text(source, &tokens),
        vec![
            (Kind::Keyword, &b"loop"[..]),
            (Kind::Whitespace, &b" "[..]),
            (Kind::Comment, &b";; done"[..]),
        ]
    );
    // Built-ins stay available alongside the custom table.
    assert!(hl.registry().lookup("rust").is_some());
}

#[test]
fn test_with_registry_replaces_tables() {
    let mut spec = LanguageSpec::new("mini");
    spec.keywords = vec!["x".to_string()];
    let registry = std::sync::Arc::new(LanguageRegistry::with_specs([spec]));
    let hl = highlighter(r#"{"language": "mini"}"#).with_registry(registry);
    assert_eq!(hl.language().name(), "mini");
    assert_eq!(hl.tokens(b"x")[0].kind, Kind::Keyword);
}

#[test]
fn test_annotations_skip_unstyled_kinds() {
    let hl = highlighter("{}");
    assert_eq!(
        hl.annotations(b"x = 1"),
        vec![
            Annotation {
                start: 0,
                end: 1,
                kind: Kind::Ident,
                class: "kind-ident".to_string(),
            },
            Annotation {
                start: 2,
                end: 3,
                kind: Kind::Operator,
                class: "kind-operator".to_string(),
            },
            Annotation {
                start: 4,
                end: 5,
                kind: Kind::Number,
                class: "kind-number".to_string(),
            },
        ]
    );
}

#[test]
fn test_annotations_coalesce_adjacent_tokens() {
    let source = b"+-";
    assert_eq!(highlighter(r#"{"format": "tokens"}"#).tokens(source).len(), 2);

    let merged = highlighter("{}").annotations(source);
    assert_eq!(merged.len(), 1);
    assert_eq!((merged[0].start, merged[0].end), (0, 2));

    let separate = highlighter(r#"{"coalesce": false}"#).annotations(source);
    assert_eq!(separate.len(), 2);
}

#[test]
fn test_to_json() {
    let tokens = highlighter(r#"{"format": "tokens"}"#)
        .highlight(b"x")
        .expect("highlight");
    assert_eq!(
        tokens.to_json(),
        json!({
            "format": "tokens",
            "tokens": [{"kind": "ident", "start": 0, "end": 1}],
        })
    );

    let raw = highlighter(r#"{"format": "raw"}"#)
        .highlight(b"x < y")
        .expect("highlight");
    assert_eq!(raw.to_json(), json!({"format": "raw", "output": "x < y"}));
}

#[test]
fn test_highlight_batch_keeps_order() {
    let hl = highlighter("{}");
    let sources: Vec<&[u8]> = vec![&b"a"[..], &b"// c"[..], &b""[..], &b"'s'"[..], &b"1.5e3"[..]];
    let batch = hl.highlight_batch(&sources);
    assert_eq!(batch.len(), sources.len());
    for (source, result) in sources.iter().zip(batch) {
        assert_eq!(result, hl.highlight(source));
    }
}

#[test]
fn test_concurrent_highlighting_is_deterministic() {
    let hl = highlighter(r#"{"language": "javascript"}"#);
    let source = b"const s = `a\n${b}` + 0x1F; /* done */";
    let expected = hl.highlight(source).expect("highlight");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| hl.highlight(source).expect("highlight")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), expected);
        }
    });
}

#[test]
fn test_highlighter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Highlighter>();
}

#[test]
fn test_free_highlight_reports_config_errors() {
    let config = HighlightConfig {
        format: Some("pdf".to_string()),
        ..Default::default()
    };
    assert_eq!(
        highlight(b"x", &config),
        Err(Error::Config(ConfigError::UnknownFormat("pdf".to_string())))
    );
}

#[test]
fn test_free_highlight_ansi() {
    let config = HighlightConfig {
        language: Some("python".to_string()),
        format: Some("ansi".to_string()),
        ..Default::default()
    };
    let output = highlight(b"def f", &config).expect("highlight");
    let annotated = output.annotated().expect("ansi output");
    assert_eq!(annotated.render(), b"\x1b[34;1mdef\x1b[0m f".to_vec());
    assert_eq!(annotated.source_bytes(), b"def f".to_vec());
}
