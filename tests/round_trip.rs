//! Property tests: annotated output always decodes back to its source.

use proptest::prelude::*;
use syntaxhighlight::annotator::{ansi, html};
use syntaxhighlight::{
    Format, HighlightConfig, Highlighter, LanguageRegistry, StyleMap, annotate, scan, scan_with,
};

fn markup_heavy() -> impl Strategy<Value = Vec<u8>> {
    let pieces: Vec<Vec<u8>> = vec![
        b"<b>".to_vec(),
        b"&amp;".to_vec(),
        b"&lt;".to_vec(),
        b"\"q\"".to_vec(),
        b"'".to_vec(),
        b"// x\n".to_vec(),
        b"\x1b[31m".to_vec(),
        b"\x07\x7f".to_vec(),
        "\u{241B}\u{2426}".as_bytes().to_vec(),
        vec![0xFF, 0xFE],
        "é".as_bytes().to_vec(),
    ];
    let piece = prop_oneof![
        prop::sample::select(pieces),
        "[a-z0-9 =;{}]{0,5}".prop_map(String::into_bytes),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn html_round_trips_arbitrary_bytes(source in prop::collection::vec(any::<u8>(), 0..256)) {
        let tokens = scan(&source);
        let output = annotate(&source, &tokens, &StyleMap::html_classes("kind-"), Format::Html)
            .expect("scanner tokens are valid");
        prop_assert_eq!(html::to_source(&output.render()), source.clone());
        prop_assert_eq!(output.source_bytes(), source);
    }

    #[test]
    fn ansi_round_trips_arbitrary_bytes(source in prop::collection::vec(any::<u8>(), 0..256)) {
        let tokens = scan(&source);
        let output = annotate(&source, &tokens, &StyleMap::ansi_palette(), Format::Ansi)
            .expect("scanner tokens are valid");
        prop_assert_eq!(ansi::to_source(&output.render()), source);
    }

    #[test]
    fn ansi_text_never_contains_control_sequences(source in markup_heavy()) {
        let output = annotate(&source, &scan(&source), &StyleMap::ansi_palette(), Format::Ansi)
            .expect("scanner tokens are valid");
        let text = ansi::strip_sgr(&output.render());
        prop_assert!(!text.iter().any(|&b| b == 0x1B || b == 0x07 || b == 0x7F));
        prop_assert_eq!(ansi::to_source(&output.render()), source);
    }

    #[test]
    fn html_text_never_contains_raw_markup(source in markup_heavy()) {
        let styles = StyleMap::html_classes("kind-");
        let output = annotate(&source, &scan(&source), &styles, Format::Html)
            .expect("scanner tokens are valid");
        let text = html::strip_tags(&output.render());
        prop_assert!(!text.iter().any(|b| matches!(b, b'<' | b'>' | b'"' | b'\'')));
    }

    #[test]
    fn every_format_round_trips(source in markup_heavy()) {
        let registry = LanguageRegistry::builtin();
        for name in registry.names() {
            let tokens = scan_with(&source, registry.resolve(Some(name)));
            for (format, styles) in [
                (Format::Html, StyleMap::html_classes("kind-")),
                (Format::Ansi, StyleMap::ansi_palette()),
                (Format::Raw, StyleMap::html_classes("kind-")),
            ] {
                let output = annotate(&source, &tokens, &styles, format)
                    .expect("scanner tokens are valid");
                prop_assert_eq!(output.source_bytes(), source.clone(), "{} {:?}", name, format);
            }
        }
    }

    #[test]
    fn facade_is_deterministic(source in markup_heavy()) {
        let config = HighlightConfig::from_json(r#"{"format": "ansi", "coalesce": "false"}"#)
            .expect("config parses");
        let highlighter = Highlighter::new(&config).expect("config resolves");
        let first = highlighter.highlight(&source).expect("highlight");
        let second = highlighter.highlight(&source).expect("highlight");
        prop_assert_eq!(first, second);
    }
}

#[test]
fn raw_render_is_identity() {
    let source = b"fn main() { let s = \"<&>\"; }\n\xFF";
    let output = annotate(
        source,
        &scan(source),
        &StyleMap::html_classes("kind-"),
        Format::Raw,
    )
    .expect("scanner tokens are valid");
    assert_eq!(output.render(), source.to_vec());
}
