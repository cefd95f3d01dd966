use crate::arc::Arc;
use crate::language::{Grammar, Lexicon};
use crate::rule::{Rule, RuleKind};

impl std::fmt::Display for Rule {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind() {
            RuleKind::Terminal => write!(w, "{} : {}", self.parent(), self.first()),
            RuleKind::NonTerminal => {
                write!(w, "{} -->", self.parent())?;
                for child in self.children() {
                    write!(w, " {}", child)?;
                }
                Ok(())
            }
        }
    }
}

/// One production per line, sorted by parent and then by children.
/// Insertion order governs parsing; sorting here is purely for the reader.
impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut rules: Vec<&Rule> = self.rules().collect();
        rules.sort();
        for (i, rule) in rules.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            write!(w, "{}", rule)?;
        }
        Ok(())
    }
}

/// One part of speech per line with its tokens comma-separated, both
/// sorted, e.g. `DT : A, THE`.
impl std::fmt::Display for Lexicon {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut parts: Vec<_> = self.index().parents().collect();
        parts.sort();
        for (i, pos) in parts.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            let mut tokens: Vec<_> = self
                .index()
                .with_parent(pos)
                .map(|rule| rule.first().as_str())
                .collect();
            tokens.sort_unstable();
            write!(w, "{} : {}", pos, tokens.join(", "))?;
        }
        Ok(())
    }
}

/// The dotted-rule form, e.g. `<0> NP --> *0 N [None] <0>`. The dot marker
/// `*d` sits before the first unmatched child, and the history shows one
/// slot per child.
impl std::fmt::Display for Arc<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "<{}> {} -->", self.start(), self.rule().parent())?;
        for (i, child) in self.rule().children().iter().enumerate() {
            if i == self.dot() {
                write!(w, " *{}", self.dot())?;
            }
            write!(w, " {}", child)?;
        }
        if self.dot() == self.rule().children().len() {
            write!(w, " *{}", self.dot())?;
        }
        write!(w, " [")?;
        for (i, slot) in self.history().iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            match slot {
                Some(id) => write!(w, "#{}", id.0)?,
                None => write!(w, "None")?,
            }
        }
        write!(w, "] <{}>", self.end())
    }
}
