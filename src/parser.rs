//! The parser ties the pieces together: it owns the grammar and lexicon,
//! drives the agenda until the chart holds a sentence arc, and then reads
//! the derivation back out of the arc histories.

use thiserror::Error;

use crate::agenda::Agenda;
use crate::arc::{ArcArena, ArcId};
use crate::chart::Chart;
use crate::language::{Grammar, Lexicon};
use crate::rule::Symbol;

/// Ways a parse can fail before or without finding a derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token in the input has no part-of-speech entry in the lexicon.
    #[error("no part of speech known for {0:?}")]
    UnknownWord(String),
    #[error("cannot parse with an empty grammar")]
    NoGrammar,
    #[error("cannot parse with an empty lexicon")]
    NoLexicon,
    /// The agenda made a full pass without yielding a complete arc.
    #[error("agenda exhausted, no parse found")]
    NoDerivation,
}

/// Chart parser over a [`Grammar`] and a [`Lexicon`].
///
/// `parse` returns exactly one bracketed derivation per sentence. Which
/// derivation an ambiguous sentence gets is fixed by the agenda's FIFO
/// discipline and the insertion order of the rules, so repeated calls
/// agree with each other.
#[derive(Debug, Default)]
pub struct Parser {
    grammar: Grammar,
    lexicon: Lexicon,
}

impl Parser {
    pub fn new(grammar: Grammar, lexicon: Lexicon) -> Parser {
        Parser { grammar, lexicon }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn grammar_mut(&mut self) -> &mut Grammar {
        &mut self.grammar
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lexicon_mut(&mut self) -> &mut Lexicon {
        &mut self.lexicon
    }

    /// Uppercased whitespace-split tokens. A seam for fancier tokenization
    /// later; nothing downstream assumes more than this.
    pub fn tokenize(sentence: &str) -> Vec<Symbol> {
        sentence.split_whitespace().map(Symbol::new).collect()
    }

    /// Parses `sentence` and returns its bracketed derivation, e.g.
    /// `[.S [.NP [.PN I]][.VP [.V SLEEP]]]`.
    ///
    /// Fails fast on an empty grammar or lexicon and on words the lexicon
    /// has never seen; reports `NoDerivation` when the sentence is empty or
    /// the agenda runs dry.
    pub fn parse(&self, sentence: &str) -> Result<String, ParseError> {
        if self.grammar.is_empty() {
            return Err(ParseError::NoGrammar);
        }
        if self.lexicon.is_empty() {
            return Err(ParseError::NoLexicon);
        }
        let tokens = Parser::tokenize(sentence);
        if tokens.is_empty() {
            return Err(ParseError::NoDerivation);
        }
        let mut chart = Chart::new(tokens.len());
        let mut agenda = Agenda::new(&tokens, &self.lexicon)?;
        let root = loop {
            let current = agenda.choose_next()?;
            agenda.predict(&self.grammar, current);
            agenda.extend(current);
            chart.add(current, agenda.arena());
            if let Some(root) = chart.sentence() {
                break root;
            }
        };
        Ok(backtrace(root, agenda.arena()))
    }
}

/// Renders the derivation rooted at `root` by walking arc histories.
fn backtrace(root: ArcId, arena: &ArcArena<'_>) -> String {
    let mut out = String::new();
    recurse(&mut out, root, arena);
    out
}

fn recurse(out: &mut String, id: ArcId, arena: &ArcArena<'_>) {
    let arc = arena.arc(id);
    let rule = arc.rule();
    if rule.is_terminal() {
        out.push_str("[.");
        out.push_str(rule.parent().as_str());
        out.push(' ');
        out.push_str(rule.first().as_str());
        out.push(']');
        return;
    }
    out.push_str("[.");
    out.push_str(rule.parent().as_str());
    out.push(' ');
    for child in arc.history().iter().flatten() {
        recurse(out, *child, arena);
    }
    out.push(']');
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests_for_parser;
