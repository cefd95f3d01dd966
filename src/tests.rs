use super::*;

pub(crate) fn grammar(text: &str) -> Grammar {
    let mut grammar = Grammar::new();
    let report = grammar.load(text);
    assert!(report.skipped.is_empty(), "bad grammar fixture: {:?}", report.skipped);
    grammar
}

pub(crate) fn lexicon(text: &str) -> Lexicon {
    let mut lexicon = Lexicon::new();
    let report = lexicon.load(text);
    assert!(report.skipped.is_empty(), "bad lexicon fixture: {:?}", report.skipped);
    lexicon
}

pub(crate) fn parser(gram: &str, lex: &str) -> Parser {
    Parser::new(grammar(gram), lexicon(lex))
}

const SIMPLE_GRAMMAR: &str = "
    S --> NP VP
    NP --> PN
    VP --> V
";

const SIMPLE_LEXICON: &str = "
    PN : I
    V : sleep
";

#[test]
fn parse_simple_sentence() {
    let parser = parser(SIMPLE_GRAMMAR, SIMPLE_LEXICON);
    expect_test::expect!["[.S [.NP [.PN I]][.VP [.V SLEEP]]]"]
        .assert_eq(&parser.parse("i sleep").unwrap());
}

#[test]
fn tokenization_is_forgiving() {
    let parser = parser(SIMPLE_GRAMMAR, SIMPLE_LEXICON);
    let tidy = parser.parse("i sleep").unwrap();
    assert_eq!(parser.parse("  I   SLEEP  ").unwrap(), tidy);
    assert_eq!(parser.parse("\ti\nSleep\n").unwrap(), tidy);
}

#[test]
fn unknown_word_is_reported_uppercased() {
    let parser = parser(SIMPLE_GRAMMAR, SIMPLE_LEXICON);
    assert_eq!(
        parser.parse("i fly"),
        Err(ParseError::UnknownWord("FLY".to_string())),
    );
}

#[test]
fn ungrammatical_sentence_exhausts_agenda() {
    let parser = parser(SIMPLE_GRAMMAR, SIMPLE_LEXICON);
    assert_eq!(parser.parse("i i"), Err(ParseError::NoDerivation));
}

#[test]
fn empty_sentence_has_no_derivation() {
    let parser = parser(SIMPLE_GRAMMAR, SIMPLE_LEXICON);
    assert_eq!(parser.parse(""), Err(ParseError::NoDerivation));
    assert_eq!(parser.parse("   "), Err(ParseError::NoDerivation));
}

#[test]
fn missing_language_fails_fast() {
    let empty = Parser::default();
    assert_eq!(empty.parse("i sleep"), Err(ParseError::NoGrammar));

    let no_lexicon = Parser::new(grammar(SIMPLE_GRAMMAR), Lexicon::new());
    assert_eq!(no_lexicon.parse("i sleep"), Err(ParseError::NoLexicon));

    // an unknown word is only diagnosed once both systems are present
    let no_grammar = Parser::new(Grammar::new(), lexicon(SIMPLE_LEXICON));
    assert_eq!(no_grammar.parse("i fly"), Err(ParseError::NoGrammar));
}

#[test]
fn parse_with_two_child_constituent() {
    let parser = parser(
        "
        S --> NP VP
        NP --> DT N
        VP --> V
        ",
        "
        DT : the
        N : dog
        V : barks
        ",
    );
    expect_test::expect!["[.S [.NP [.DT THE][.N DOG]][.VP [.V BARKS]]]"]
        .assert_eq(&parser.parse("the dog barks").unwrap());
}

// Both readings of PLAY are seeded, but the FIFO agenda settles the race
// the same way every time: the first lexicon line wins.
#[test]
fn ambiguous_word_parses_deterministically() {
    let p = parser("S --> V\nS --> N", "V : play\nN : play");
    let first = p.parse("play").unwrap();
    assert_eq!(first, "[.S [.V PLAY]]");
    for _ in 0..10 {
        assert_eq!(p.parse("play").unwrap(), first);
    }

    // with the lexicon lines swapped, the other reading wins
    let flipped = parser("S --> V\nS --> N", "N : play\nV : play");
    assert_eq!(flipped.parse("play").unwrap(), "[.S [.N PLAY]]");
}

#[test]
fn parse_complex_sentence() {
    let parser = parser(
        "
        S --> NP VP
        NP --> DT N
        NP --> DT ADJ N
        NP --> PN
        VP --> V
        VP --> VP NP
        VP --> AUX VP
        ",
        "
        PN : I
        ADJ : little, five-string
        N : can, play, guitar, boy
        V : play
        AUX : can
        DT : a, the
        ",
    );
    let parse = parser.parse("the little boy can play the guitar").unwrap();
    // one spanning derivation despite CAN and PLAY being ambiguous
    for piece in [
        "[.NP [.DT THE][.ADJ LITTLE][.N BOY]]",
        "[.AUX CAN]",
        "[.V PLAY]",
        "[.NP [.DT THE][.N GUITAR]]",
    ] {
        assert!(parse.contains(piece), "{:?} missing from {:?}", piece, parse);
    }
    assert!(parse.starts_with("[.S "));
    assert_eq!(parser.parse("the little boy can play the guitar").unwrap(), parse);
}

#[test]
fn load_language_from_files() -> Result<(), std::io::Error> {
    let gram = temp_file::with_contents(SIMPLE_GRAMMAR.as_bytes());
    let lex = temp_file::with_contents(SIMPLE_LEXICON.as_bytes());

    let mut parser = Parser::default();
    let report = parser.grammar_mut().load(&fs_err::read_to_string(gram.path())?);
    assert_eq!((report.loaded, report.skipped.len()), (3, 0));
    let report = parser.lexicon_mut().load(&fs_err::read_to_string(lex.path())?);
    assert_eq!((report.loaded, report.skipped.len()), (2, 0));

    assert_eq!(
        parser.parse("i sleep").unwrap(),
        "[.S [.NP [.PN I]][.VP [.V SLEEP]]]",
    );
    Ok(())
}
