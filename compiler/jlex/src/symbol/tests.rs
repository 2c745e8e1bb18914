use super::*;

fn java_like() -> SymbolTable {
    SymbolTable::from_entries(
        Operator::ALL
            .iter()
            .map(|&op| (op.as_str(), Symbol::Op(op)))
            .chain(Punctuation::ALL.iter().map(|&p| (p.as_str(), Symbol::Punct(p)))),
    )
}

// === Maximal Munch ===

#[test]
fn shift_family_prefers_longest() {
    let table = java_like();
    assert_eq!(
        table.longest_match(">>>= 1"),
        Some((Symbol::Op(Operator::UShrAssign), 4))
    );
    assert_eq!(table.longest_match(">>>1"), Some((Symbol::Op(Operator::UShr), 3)));
    assert_eq!(table.longest_match(">>= x"), Some((Symbol::Op(Operator::ShrAssign), 3)));
    assert_eq!(table.longest_match(">> x"), Some((Symbol::Op(Operator::Shr), 2)));
    assert_eq!(table.longest_match("> x"), Some((Symbol::Op(Operator::Gt), 1)));
}

#[test]
fn ellipsis_and_dot() {
    let table = java_like();
    assert_eq!(
        table.longest_match("...args"),
        Some((Symbol::Punct(Punctuation::Ellipsis), 3))
    );
    // Two dots are a dot followed by a dot
    assert_eq!(table.longest_match("..x"), Some((Symbol::Punct(Punctuation::Dot), 1)));
}

#[test]
fn arrow_and_method_reference() {
    let table = java_like();
    assert_eq!(table.longest_match("->"), Some((Symbol::Op(Operator::Arrow), 2)));
    assert_eq!(table.longest_match("--x"), Some((Symbol::Op(Operator::Decrement), 2)));
    assert_eq!(table.longest_match("::new"), Some((Symbol::Op(Operator::ColonColon), 2)));
}

#[test]
fn no_match() {
    let table = java_like();
    assert_eq!(table.longest_match("#"), None);
    assert_eq!(table.longest_match("abc"), None);
    assert_eq!(table.longest_match(""), None);
    assert_eq!(table.longest_match("λ"), None);
}

// === Table Shape ===

#[test]
fn starts_symbol_by_byte() {
    let table = java_like();
    assert!(table.starts_symbol(b'>'));
    assert!(table.starts_symbol(b'@'));
    assert!(!table.starts_symbol(b'#'));
    assert!(!table.starts_symbol(b'a'));
    assert!(!table.starts_symbol(0xCE));
}

#[test]
fn counts_every_entry() {
    let table = java_like();
    assert_eq!(table.len(), Operator::ALL.len() + Punctuation::ALL.len());
    assert_eq!(table.iter().count(), table.len());
}

#[test]
fn spellings_are_unique() {
    let mut all: Vec<&str> = Operator::ALL
        .iter()
        .map(|o| o.as_str())
        .chain(Punctuation::ALL.iter().map(|p| p.as_str()))
        .collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
}
