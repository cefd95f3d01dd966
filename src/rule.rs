//! Symbols and rules.
//!
//! A rule is an immutable labeled production `parent --> child1 .. childN`.
//! Lexicon entries are rules too: a *terminal* rule has the surface token as
//! its only child (`V : sleep` is the rule `V --> SLEEP` tagged terminal).
//! Every symbol is case-folded at construction, so grammar authors and
//! sentence input match regardless of casing.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use derive_more::Display;
use thiserror::Error;

use crate::notation;

/// The designated start symbol: a sentence arc is rooted at `S`.
pub fn start_symbol() -> Symbol {
    Symbol::new("S")
}

/// A single grammar symbol (a category like `NP`, or a surface token).
/// Construction trims and uppercases, which is idempotent.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: &str) -> Symbol {
        Symbol(s.trim().to_uppercase())
    }

    /// Like [`Symbol::new`], but rejects the raw forms a rule may not
    /// contain: nothing at all, or several whitespace-divided items.
    pub fn checked(s: &str) -> Result<Symbol, RuleError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RuleError::EmptySymbol);
        }
        if trimmed.split_whitespace().nth(1).is_some() {
            return Err(RuleError::EmbeddedWhitespace(trimmed.to_string()));
        }
        Ok(Symbol::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Symbol {
        Symbol::new(s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RuleKind {
    /// A lexicon entry: the single child is a surface token.
    Terminal,
    /// A grammar production: every child is a category.
    NonTerminal,
}

/// `parent --> children`, with at least one child.
#[derive(Clone, Debug)]
pub struct Rule {
    parent: Symbol,
    children: Vec<Symbol>,
    kind: RuleKind,
}

impl Rule {
    /// Builds a grammar production from explicit parts.
    pub fn production(parent: &str, children: &[&str]) -> Result<Rule, RuleError> {
        if children.is_empty() {
            return Err(RuleError::TooFewSymbols);
        }
        let parent = Symbol::checked(parent)?;
        let children = children
            .iter()
            .map(|c| Symbol::checked(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rule::nonterminal(parent, children))
    }

    /// Builds a single lexicon entry from explicit parts.
    pub fn entry(pos: &str, token: &str) -> Result<Rule, RuleError> {
        Ok(Rule::terminal(Symbol::checked(pos)?, Symbol::checked(token)?))
    }

    /// Parses a grammar line, `PARENT --> CHILD1 CHILD2 ..`.
    pub fn parse_production(line: &str) -> Result<Rule, RuleError> {
        notation::ProductionParser::new()
            .parse(line)
            .map_err(|e| RuleError::MalformedProduction(e.to_string()))
    }

    /// Parses a lexicon line, `POS : token1, token2, ..`, yielding one
    /// terminal rule per token.
    pub fn parse_entries(line: &str) -> Result<Vec<Rule>, RuleError> {
        notation::LexiconEntryParser::new()
            .parse(line)
            .map_err(|e| RuleError::MalformedEntry(e.to_string()))
    }

    pub(crate) fn nonterminal(parent: Symbol, children: Vec<Symbol>) -> Rule {
        Rule { parent, children, kind: RuleKind::NonTerminal }
    }

    pub(crate) fn terminal(pos: Symbol, token: Symbol) -> Rule {
        Rule { parent: pos, children: vec![token], kind: RuleKind::Terminal }
    }

    pub fn parent(&self) -> &Symbol {
        &self.parent
    }

    pub fn children(&self) -> &[Symbol] {
        &self.children
    }

    /// The first child: the symbol this rule is indexed under for
    /// prediction.
    pub fn first(&self) -> &Symbol {
        &self.children[0]
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == RuleKind::Terminal
    }
}

// Identity is the (parent, children) tuple; the kind tag never takes part
// in it, and the ordering is only ever used for deterministic display.
impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.parent == other.parent && self.children == other.children
    }
}

impl Eq for Rule {}

impl PartialOrd for Rule {
    fn partial_cmp(&self, other: &Rule) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rule {
    fn cmp(&self, other: &Rule) -> Ordering {
        (&self.parent, &self.children).cmp(&(&other.parent, &other.children))
    }
}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.children.hash(state);
    }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum RuleError {
    #[error("a rule needs a parent and at least one child")]
    TooFewSymbols,
    #[error("symbols may not be empty")]
    EmptySymbol,
    #[error("symbol `{0}` contains embedded whitespace")]
    EmbeddedWhitespace(String),
    #[error("malformed production: {0}")]
    MalformedProduction(String),
    #[error("malformed lexicon entry: {0}")]
    MalformedEntry(String),
}

#[cfg(test)]
#[path = "tests/rule.rs"]
mod tests_for_rule;
