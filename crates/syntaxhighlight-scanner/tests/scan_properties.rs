//! Property tests: the scanner is total and its tokens partition the input.

use proptest::prelude::*;
use syntaxhighlight_scanner::{Kind, LanguageRegistry, scan, scan_with, validate_partition};

/// Source-like text: mostly code characters with some invalid bytes mixed in.
fn code_like() -> impl Strategy<Value = Vec<u8>> {
    let fixed: Vec<Vec<u8>> = vec![
        b"fn ".to_vec(),
        b"// c\n".to_vec(),
        b"/* b */".to_vec(),
        b"\"s\\\"t\"".to_vec(),
        b"'".to_vec(),
        b"`".to_vec(),
        b"\"\"\"".to_vec(),
        b"0x1F".to_vec(),
        b".5e-3".to_vec(),
        b">>>=".to_vec(),
        b"\r\n".to_vec(),
        "é→😀\u{00A0}".as_bytes().to_vec(),
        vec![0xFF],
        vec![0xE2, 0x82],
    ];
    let piece = prop_oneof![
        prop::sample::select(fixed),
        "[a-z_]{1,6}".prop_map(String::into_bytes),
        "[ -~]{0,4}".prop_map(String::into_bytes),
    ];
    prop::collection::vec(piece, 0..32).prop_map(|pieces| pieces.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn tokens_partition_arbitrary_bytes(source in prop::collection::vec(any::<u8>(), 0..512)) {
        let tokens = scan(&source);
        prop_assert_eq!(validate_partition(&tokens, source.len()), Ok(()));
    }

    #[test]
    fn tokens_round_trip_source(source in code_like()) {
        let tokens = scan(&source);
        let rebuilt: Vec<u8> = tokens
            .iter()
            .flat_map(|token| token.text(&source).iter().copied())
            .collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn every_language_is_total(source in code_like()) {
        let registry = LanguageRegistry::builtin();
        for name in registry.names() {
            let language = registry.resolve(Some(name));
            let tokens = scan_with(&source, language);
            prop_assert_eq!(
                validate_partition(&tokens, source.len()),
                Ok(()),
                "language {}", name
            );
        }
    }

    #[test]
    fn scanning_is_deterministic(source in code_like()) {
        prop_assert_eq!(scan(&source), scan(&source));
    }

    #[test]
    fn plaintext_never_swallows_ascii_code(source in "[ -~\n\t]{0,128}") {
        // Printable ASCII always lands in a real category; plaintext is
        // reserved for control bytes and non-ASCII leftovers.
        for token in scan(source.as_bytes()) {
            prop_assert_ne!(token.kind, Kind::Plaintext);
        }
    }
}
