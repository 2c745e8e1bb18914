//! Scanner properties over generated Java-ish input.

use jlex::{LanguageProfile, LexErrorKind, ProfileBuilder, Scanner, SourceBuffer, StringRecovery};
use proptest::prelude::*;

/// Fragments that exercise every scanner path, including broken ones.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "class", "int", "x", "$y", "_z", "λ", "true", "null", " ", "\t", "\n", "\r\n", "\r",
        "0", "42", "0x1F", "0b10", "017", "1_000", "3.5", ".5", "1e3", "1e", "2f", "9L", "23sd",
        "08", "\"str\"", "\"", "\"a\\qb\"", "'c'", "'", "''", "'\\n'", "'\\z'", "// line",
        "/* b */", "/*", "*/", "+", "++", ">>>=", "->", "::", "...", ".", ";", "(", ")", "{", "}", "#", "@",
        "\\", "`", "→", "\0",
    ])
}

fn java_ish() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..48).prop_map(|parts| parts.concat())
}

fn profiles() -> Vec<LanguageProfile> {
    let semicolon = ProfileBuilder::java()
        .string_recovery(StringRecovery::NextSemicolon)
        .build();
    let digit_leading = ProfileBuilder::java().digit_leading_identifiers(true).build();
    let mut out = vec![LanguageProfile::java(), LanguageProfile::java_with_annotations()];
    out.extend(semicolon);
    out.extend(digit_leading);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn raw_lexemes_cover_the_source(src in java_ish()) {
        let buffer = SourceBuffer::new(&src);
        for profile in profiles() {
            let rebuilt: String = Scanner::new(&buffer, &profile).map(|t| t.lexeme).collect();
            prop_assert_eq!(&rebuilt, &src);
        }
    }

    #[test]
    fn spans_are_contiguous_and_non_empty(src in java_ish()) {
        let buffer = SourceBuffer::new(&src);
        for profile in profiles() {
            let mut expected_start = 0;
            for tok in Scanner::new(&buffer, &profile) {
                prop_assert_eq!(tok.span.start.offset, expected_start);
                prop_assert!(tok.span.end.offset > tok.span.start.offset, "{}", tok);
                prop_assert_eq!(
                    &src[tok.span.start.offset as usize..tok.span.end.offset as usize],
                    tok.lexeme
                );
                expected_start = tok.span.end.offset;
            }
        }
    }

    #[test]
    fn positions_agree_with_line_index(src in java_ish()) {
        let buffer = SourceBuffer::new(&src);
        for profile in profiles() {
            let mut scanner = Scanner::new(&buffer, &profile);
            loop {
                let tok = scanner.next_raw_token();
                prop_assert_eq!(tok.span.start, buffer.position(tok.span.start.offset));
                prop_assert_eq!(tok.span.end, buffer.position(tok.span.end.offset));
                if tok.is_eof() {
                    break;
                }
            }
            for diag in scanner.diagnostics() {
                prop_assert_eq!(diag.span.start, buffer.position(diag.span.start.offset));
                prop_assert_eq!(diag.span.end, buffer.position(diag.span.end.offset));
            }
        }
    }

    #[test]
    fn every_error_token_has_one_diagnostic(src in java_ish()) {
        let buffer = SourceBuffer::new(&src);
        let profile = LanguageProfile::java();
        let mut scanner = Scanner::new(&buffer, &profile);
        let mut error_starts = Vec::new();
        loop {
            let tok = scanner.next_raw_token();
            if tok.is_eof() {
                break;
            }
            if tok.kind.is_error() {
                error_starts.push(tok.span.start);
            }
        }
        let diagnostics = scanner.into_diagnostics();
        let token_diagnostics: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.category != LexErrorKind::InvalidEscapeSequence)
            .map(|d| d.span.start)
            .collect();
        prop_assert_eq!(token_diagnostics, error_starts);

        let offsets: Vec<_> = diagnostics.iter().map(|d| d.span.start.offset).collect();
        prop_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn end_of_input_repeats(src in java_ish()) {
        let buffer = SourceBuffer::new(&src);
        let profile = LanguageProfile::java();
        let mut scanner = Scanner::new(&buffer, &profile);
        let mut first = scanner.next_token();
        while !first.is_eof() {
            first = scanner.next_token();
        }
        let before = scanner.diagnostics().len();
        for _ in 0..3 {
            prop_assert_eq!(&scanner.next_token(), &first);
        }
        prop_assert_eq!(scanner.diagnostics().len(), before);
    }
}
