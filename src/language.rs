//! The grammar and lexicon stores.
//!
//! Both are views over the same structure, a [`RuleIndex`]: the rules in
//! insertion order, plus two symbol-keyed indexes derived from them. The
//! `by_first` index (first child, the *prediction* index) answers "which
//! productions could begin with this completed constituent"; the
//! `by_parent` index exists for enumeration and display. Insertion order is
//! load-bearing: prediction walks rules in the order they were added, and
//! that order decides which derivation an ambiguous grammar yields.
//!
//! Bulk import is best-effort and replaces the previous contents wholesale:
//! blank lines are skipped, malformed lines are reported per-line in the
//! [`ImportReport`], and the well-formed remainder still loads.

use linear_map::LinearMap;

use crate::rule::{Rule, RuleError, Symbol};

#[derive(Debug, Default)]
pub(crate) struct RuleIndex {
    rules: Vec<Rule>,
    by_first: LinearMap<Symbol, Vec<usize>>,
    by_parent: LinearMap<Symbol, Vec<usize>>,
}

impl RuleIndex {
    fn new() -> RuleIndex {
        RuleIndex::default()
    }

    /// Set semantics: duplicate rules collapse. Returns whether the rule
    /// was actually added.
    fn insert(&mut self, rule: Rule) -> bool {
        if self.rules.contains(&rule) {
            return false;
        }
        let index = self.rules.len();
        let first = rule.first().clone();
        let parent = rule.parent().clone();
        self.rules.push(rule);
        match self.by_first.get_mut(&first) {
            Some(indexes) => indexes.push(index),
            None => {
                self.by_first.insert(first, vec![index]);
            }
        }
        match self.by_parent.get_mut(&parent) {
            Some(indexes) => indexes.push(index),
            None => {
                self.by_parent.insert(parent, vec![index]);
            }
        }
        true
    }

    fn clear(&mut self) {
        self.rules.clear();
        self.by_first.clear();
        self.by_parent.clear();
    }

    pub(crate) fn starting_with<'a>(&'a self, first: &Symbol) -> impl Iterator<Item = &'a Rule> + 'a {
        let indexes: &[usize] = self.by_first.get(first).map(Vec::as_slice).unwrap_or(&[]);
        indexes.iter().map(move |&i| &self.rules[i])
    }

    pub(crate) fn with_parent<'a>(&'a self, parent: &Symbol) -> impl Iterator<Item = &'a Rule> + 'a {
        let indexes: &[usize] = self.by_parent.get(parent).map(Vec::as_slice).unwrap_or(&[]);
        indexes.iter().map(move |&i| &self.rules[i])
    }

    pub(crate) fn parents(&self) -> impl Iterator<Item = &Symbol> {
        self.by_parent.keys()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    fn len(&self) -> usize {
        self.rules.len()
    }

    fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The outcome of a bulk import: how many rules loaded, and which lines
/// were skipped and why.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ImportReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SkippedLine {
    /// 1-based line number within the imported text.
    pub line: usize,
    pub text: String,
    pub error: RuleError,
}

/// The non-terminal rules of the language.
#[derive(Debug, Default)]
pub struct Grammar {
    index: RuleIndex,
}

impl Grammar {
    pub fn new() -> Grammar {
        Grammar { index: RuleIndex::new() }
    }

    /// Replaces the grammar with the productions in `text`, one per line.
    pub fn load(&mut self, text: &str) -> ImportReport {
        self.index.clear();
        let mut report = ImportReport::default();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Rule::parse_production(line) {
                Ok(rule) => {
                    if self.index.insert(rule) {
                        report.loaded += 1;
                    }
                }
                Err(error) => report.skipped.push(SkippedLine {
                    line: number + 1,
                    text: line.trim().to_string(),
                    error,
                }),
            }
        }
        report
    }

    /// Adds one production given as a grammar line.
    pub fn add(&mut self, line: &str) -> Result<bool, RuleError> {
        Ok(self.index.insert(Rule::parse_production(line)?))
    }

    /// Adds one production given as explicit parts.
    pub fn add_production(&mut self, parent: &str, children: &[&str]) -> Result<bool, RuleError> {
        Ok(self.index.insert(Rule::production(parent, children)?))
    }

    /// Every production whose first child is `first` -- the prediction
    /// lookup. Empty for most symbols, which is not an error.
    pub fn rules_starting_with<'a>(&'a self, first: &Symbol) -> impl Iterator<Item = &'a Rule> + 'a {
        self.index.starting_with(first)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.index.iter()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn index(&self) -> &RuleIndex {
        &self.index
    }
}

/// The terminal rules of the language: words and their parts of speech,
/// queryable in both directions.
#[derive(Debug, Default)]
pub struct Lexicon {
    index: RuleIndex,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Lexicon { index: RuleIndex::new() }
    }

    /// Replaces the lexicon with the entries in `text`, one
    /// `POS : token1, token2, ..` line per part of speech.
    pub fn load(&mut self, text: &str) -> ImportReport {
        self.index.clear();
        let mut report = ImportReport::default();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Rule::parse_entries(line) {
                Ok(rules) => {
                    for rule in rules {
                        if self.index.insert(rule) {
                            report.loaded += 1;
                        }
                    }
                }
                Err(error) => report.skipped.push(SkippedLine {
                    line: number + 1,
                    text: line.trim().to_string(),
                    error,
                }),
            }
        }
        report
    }

    /// Adds one word/part-of-speech pairing.
    pub fn add_entry(&mut self, pos: &str, token: &str) -> Result<bool, RuleError> {
        Ok(self.index.insert(Rule::entry(pos, token)?))
    }

    /// The terminal rules for a (already-normalized) token: what seeds the
    /// agenda.
    pub fn terminal_rules_for<'a>(&'a self, token: &Symbol) -> impl Iterator<Item = &'a Rule> + 'a {
        self.index.starting_with(token)
    }

    pub fn has_word(&self, word: &str) -> bool {
        let word = Symbol::new(word);
        self.index.starting_with(&word).next().is_some()
    }

    pub fn has_pos(&self, pos: &str) -> bool {
        let pos = Symbol::new(pos);
        self.index.with_parent(&pos).next().is_some()
    }

    /// Every part of speech assigned to `word`, in insertion order.
    pub fn parts_of_speech<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a Symbol> + 'a {
        let word = Symbol::new(word);
        self.index.starting_with(&word).map(Rule::parent)
    }

    /// Every token carrying the part of speech `pos`, in insertion order.
    pub fn tokens_for<'a>(&'a self, pos: &str) -> impl Iterator<Item = &'a Symbol> + 'a {
        let pos = Symbol::new(pos);
        self.index.with_parent(&pos).map(Rule::first)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.index.iter()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn index(&self) -> &RuleIndex {
        &self.index
    }
}

#[cfg(test)]
#[path = "tests/language.rs"]
mod tests_for_language;
