use super::*;

// === Java Profile ===

#[test]
fn java_builder_is_valid() {
    assert!(ProfileBuilder::java().build().is_ok());
}

#[test]
fn java_tables() {
    let java = LanguageProfile::java();
    assert_eq!(java.keyword_count(), Keyword::ALL.len());
    assert_eq!(
        java.symbol_count(),
        Operator::ALL.len() + Punctuation::ALL.len() - 1
    );
    let classifier = java.classifier();
    assert_eq!(classifier.keyword("var"), Some(Keyword::Var));
    assert_eq!(classifier.keyword("null"), Some(Keyword::Null));
    assert_eq!(classifier.longest_symbol("@Override"), None);
}

#[test]
fn java_policies() {
    let java = LanguageProfile::java();
    assert!(!java.surfaces_whitespace());
    assert!(!java.surfaces_comments());
    assert!(java.surfaces_errors());
    assert_eq!(java.string_recovery(), StringRecovery::NextLine);
    assert!(!java.allows_digit_leading_identifiers());
    assert_eq!(java.suffixes[b'L' as usize], Some(NumericSuffix::Long));
    assert_eq!(java.suffixes[b'f' as usize], Some(NumericSuffix::Float));
    assert_eq!(java.suffixes[b'D' as usize], Some(NumericSuffix::Double));
    assert_eq!(java.suffixes[b's' as usize], None);
}

#[test]
fn annotations_add_at() {
    let profile = LanguageProfile::java_with_annotations();
    assert_eq!(
        profile.classifier().longest_symbol("@Override"),
        Some((Symbol::Punct(Punctuation::At), 1))
    );
}

#[test]
fn visibility_follows_surface_flags() {
    let java = LanguageProfile::java();
    assert!(!java.is_visible(TokenKind::Whitespace));
    assert!(!java.is_visible(TokenKind::LineComment));
    assert!(java.is_visible(TokenKind::Error(
        jlex_diagnostic::LexErrorKind::IllegalCharacter
    )));
    assert!(java.is_visible(TokenKind::EndOfInput));

    let quiet = ProfileBuilder::java()
        .surface_errors(false)
        .surface_comments(true)
        .build();
    assert!(quiet.is_ok());
    if let Ok(quiet) = quiet {
        assert!(!quiet.is_visible(TokenKind::Error(
            jlex_diagnostic::LexErrorKind::IllegalCharacter
        )));
        assert!(quiet.is_visible(TokenKind::BlockComment));
    }
}

// === Builder ===

#[test]
fn custom_dialect() {
    let profile = ProfileBuilder::empty()
        .keyword("fun", Keyword::Void)
        .symbol("=>", Operator::Arrow)
        .symbol(";", Punctuation::Semicolon)
        .suffix('u', NumericSuffix::Long)
        .build();
    let Ok(profile) = profile else {
        panic!("custom dialect should build: {profile:?}");
    };
    let c = profile.classifier();
    assert_eq!(c.keyword("fun"), Some(Keyword::Void));
    assert_eq!(c.keyword("class"), None);
    assert_eq!(c.longest_symbol("=>x"), Some((Symbol::Op(Operator::Arrow), 2)));
    assert_eq!(c.longest_symbol("->"), None);
    assert_eq!(profile.suffixes[b'u' as usize], Some(NumericSuffix::Long));
}

#[test]
fn without_removes_entries() {
    let profile = ProfileBuilder::java()
        .without_keyword("var")
        .without_symbol("::")
        .without_suffix('d')
        .build();
    let Ok(profile) = profile else {
        panic!("removal should build");
    };
    let c = profile.classifier();
    assert_eq!(c.keyword("var"), None);
    assert_eq!(c.longest_symbol("::"), Some((Symbol::Op(Operator::Colon), 1)));
    assert_eq!(profile.suffixes[b'd' as usize], None);
    assert_eq!(profile.suffixes[b'D' as usize], Some(NumericSuffix::Double));
}

#[test]
fn to_builder_round_trips() {
    let java = LanguageProfile::java_with_annotations();
    let rebuilt = java.to_builder().surface_whitespace(true).build();
    let Ok(rebuilt) = rebuilt else {
        panic!("rebuild should succeed");
    };
    assert_eq!(rebuilt.keyword_count(), java.keyword_count());
    assert_eq!(rebuilt.symbol_count(), java.symbol_count());
    assert!(rebuilt.surfaces_whitespace());
}

#[test]
fn re_adding_same_mapping_is_fine() {
    assert!(ProfileBuilder::java()
        .keyword("class", Keyword::Class)
        .symbol("+", Operator::Plus)
        .build()
        .is_ok());
}

// === Configuration Errors ===

#[test]
fn empty_symbol() {
    assert_eq!(
        ProfileBuilder::empty().symbol("", Operator::Plus).build().err(),
        Some(ProfileError::EmptySymbol)
    );
}

#[test]
fn conflicting_symbol() {
    let err = ProfileBuilder::java().symbol("+", Operator::Minus).build().err();
    assert_eq!(
        err,
        Some(ProfileError::ConflictingSymbol {
            text: "+".into(),
            existing: Symbol::Op(Operator::Plus),
            new: Symbol::Op(Operator::Minus),
        })
    );
}

#[test]
fn symbols_colliding_with_other_tokens() {
    let cases = [
        ("\"", "string and character literals"),
        ("'", "string and character literals"),
        ("a+", "identifiers"),
        ("$", "identifiers"),
        ("_", "identifiers"),
        ("+1", "numeric literals"),
        ("+ ", "whitespace"),
        ("→", "non-ASCII or control characters"),
        ("//", "comment openers"),
        ("*/*", "comment openers"),
    ];
    for (text, reason) in cases {
        assert_eq!(
            ProfileBuilder::empty().symbol(text, Operator::Plus).build().err(),
            Some(ProfileError::SymbolCollision {
                text: text.into(),
                reason
            }),
            "{text:?}"
        );
    }
}

#[test]
fn keywords_must_be_identifier_shaped() {
    for text in ["", "1st", "if-else", "a b", "#define"] {
        assert_eq!(
            ProfileBuilder::empty().keyword(text, Keyword::If).build().err(),
            Some(ProfileError::InvalidKeyword { text: text.into() }),
            "{text:?}"
        );
    }
    assert!(ProfileBuilder::empty()
        .keyword("fonction", Keyword::Void)
        .keyword("$x", Keyword::Var)
        .keyword("λ", Keyword::Var)
        .build()
        .is_ok());
}

#[test]
fn conflicting_keyword() {
    let err = ProfileBuilder::java().keyword("int", Keyword::Long).build().err();
    assert_eq!(
        err,
        Some(ProfileError::ConflictingKeyword {
            text: "int".into(),
            existing: Keyword::Int,
            new: Keyword::Long,
        })
    );
}

#[test]
fn invalid_suffixes() {
    for c in ['e', 'E', 'x', 'B', '1', '_', 'é'] {
        assert_eq!(
            ProfileBuilder::empty().suffix(c, NumericSuffix::Long).build().err(),
            Some(ProfileError::InvalidSuffix { suffix: c }),
            "{c:?}"
        );
    }
}

#[test]
fn first_error_wins() {
    let err = ProfileBuilder::empty()
        .symbol("", Operator::Plus)
        .keyword("1", Keyword::If)
        .build()
        .err();
    assert_eq!(err, Some(ProfileError::EmptySymbol));
}

#[test]
fn error_messages() {
    assert_eq!(
        ProfileError::SymbolCollision {
            text: "//".into(),
            reason: "comment openers"
        }
        .to_string(),
        "symbol `//` collides with comment openers"
    );
    assert_eq!(
        ProfileError::ConflictingKeyword {
            text: "int".into(),
            existing: Keyword::Int,
            new: Keyword::Long,
        }
        .to_string(),
        "keyword `int` is mapped to both `int` and `long`"
    );
}
