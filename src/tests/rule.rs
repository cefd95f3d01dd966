// This is actually defined at `crate::rule::tests_for_rule`

use super::*;

#[test]
fn symbols_normalize() {
    assert_eq!(Symbol::new(" horse "), Symbol::new("HORSE"));
    assert_eq!(Symbol::new("nP").as_str(), "NP");
    assert_eq!(Symbol::new("five-string").as_str(), "FIVE-STRING");
}

#[test]
fn checked_symbols_reject_bad_input() {
    assert_eq!(Symbol::checked("  "), Err(RuleError::EmptySymbol));
    assert_eq!(
        Symbol::checked("two words"),
        Err(RuleError::EmbeddedWhitespace("two words".to_string())),
    );
    assert_eq!(Symbol::checked(" ok "), Ok(Symbol::new("OK")));
}

#[test]
fn production_from_parts() {
    let rule = Rule::production("np", &["dt", "n"]).unwrap();
    assert_eq!(rule.parent(), &Symbol::new("NP"));
    assert_eq!(rule.children(), &[Symbol::new("DT"), Symbol::new("N")]);
    assert_eq!(rule.first(), &Symbol::new("DT"));
    assert_eq!(rule.kind(), RuleKind::NonTerminal);
    assert!(!rule.is_terminal());

    assert_eq!(Rule::production("np", &[]), Err(RuleError::TooFewSymbols));
    assert_eq!(
        Rule::production("np", &["d t"]),
        Err(RuleError::EmbeddedWhitespace("d t".to_string())),
    );
}

#[test]
fn entry_from_parts() {
    let rule = Rule::entry(" n ", "horse ").unwrap();
    assert_eq!(rule.parent(), &Symbol::new("N"));
    assert_eq!(rule.first(), &Symbol::new("HORSE"));
    assert!(rule.is_terminal());
}

#[test]
fn parse_production_notation() {
    let rule = Rule::parse_production("np --> n").unwrap();
    assert_eq!(rule, Rule::production("NP", &["N"]).unwrap());

    let rule = Rule::parse_production(" vp -->  v   np ").unwrap();
    assert_eq!(rule, Rule::production("VP", &["V", "NP"]).unwrap());

    assert!(matches!(
        Rule::parse_production("x"),
        Err(RuleError::MalformedProduction(_)),
    ));
    assert!(matches!(
        Rule::parse_production("z --> "),
        Err(RuleError::MalformedProduction(_)),
    ));
    // one parent only
    assert!(matches!(
        Rule::parse_production("a b --> c"),
        Err(RuleError::MalformedProduction(_)),
    ));
}

#[test]
fn parse_entries_notation() {
    let rules = Rule::parse_entries("N : can, play, guitar").unwrap();
    assert_eq!(
        rules,
        vec![
            Rule::entry("N", "CAN").unwrap(),
            Rule::entry("N", "PLAY").unwrap(),
            Rule::entry("N", "GUITAR").unwrap(),
        ],
    );
    assert!(rules.iter().all(Rule::is_terminal));

    assert_eq!(
        Rule::parse_entries("pn : i").unwrap(),
        vec![Rule::entry("PN", "I").unwrap()],
    );

    assert!(matches!(Rule::parse_entries("x"), Err(RuleError::MalformedEntry(_))));
    assert!(matches!(Rule::parse_entries("N :"), Err(RuleError::MalformedEntry(_))));
    assert!(matches!(
        Rule::parse_entries("N : a,"),
        Err(RuleError::MalformedEntry(_)),
    ));
}

// The kind tag is bookkeeping, not identity: `V : play` and `V --> PLAY`
// stand for the same production.
#[test]
fn rule_identity_ignores_kind() {
    let terminal = Rule::entry("v", "play").unwrap();
    let production = Rule::production("v", &["play"]).unwrap();
    assert_eq!(terminal, production);
}

#[test]
fn rule_ordering_is_by_parent_then_children() {
    let mut rules = vec![
        Rule::production("VP", &["V"]).unwrap(),
        Rule::production("NP", &["PN"]).unwrap(),
        Rule::production("NP", &["DT", "N"]).unwrap(),
    ];
    rules.sort();
    assert_eq!(
        rules,
        vec![
            Rule::production("NP", &["DT", "N"]).unwrap(),
            Rule::production("NP", &["PN"]).unwrap(),
            Rule::production("VP", &["V"]).unwrap(),
        ],
    );
}

#[test]
fn rule_display() {
    assert_eq!(
        Rule::production("np", &["dt", "n"]).unwrap().to_string(),
        "NP --> DT N",
    );
    assert_eq!(Rule::entry("v", "play").unwrap().to_string(), "V : PLAY");
}
