use super::*;

fn java_table() -> KeywordTable {
    KeywordTable::from_entries(Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)))
}

#[test]
fn every_keyword_round_trips_through_table() {
    let table = java_table();
    for &kw in Keyword::ALL {
        assert_eq!(table.lookup(kw.as_str()), Some(kw), "{kw:?}");
    }
    assert_eq!(table.len(), Keyword::ALL.len());
}

#[test]
fn prefixes_and_extensions_are_not_keywords() {
    let table = java_table();
    for text in ["classify", "clas", "Class", "iff", "_int", "int_", "var2", ""] {
        assert_eq!(table.lookup(text), None, "{text:?}");
    }
}

#[test]
fn literal_words() {
    let table = java_table();
    assert_eq!(table.lookup("true").and_then(Keyword::boolean_value), Some(true));
    assert_eq!(table.lookup("false").and_then(Keyword::boolean_value), Some(false));
    assert_eq!(table.lookup("null"), Some(Keyword::Null));
    assert_eq!(Keyword::Null.boolean_value(), None);
}

#[test]
fn long_identifiers_have_no_bucket() {
    let table = java_table();
    assert_eq!(table.lookup("synchronizedAndThenSome"), None);
}

#[test]
fn spellings_are_unique() {
    let mut seen: Vec<&str> = Keyword::ALL.iter().map(|k| k.as_str()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), Keyword::ALL.len());
}

#[test]
fn custom_spelling() {
    let table = KeywordTable::from_entries([("fn", Keyword::Void), ("klass", Keyword::Class)]);
    assert_eq!(table.lookup("klass"), Some(Keyword::Class));
    assert_eq!(table.lookup("class"), None);
    assert_eq!(table.iter().count(), 2);
}
