//! Arcs: partially-recognized rule instances anchored to a token span.
//!
//! An arc pairs a rule (borrowed from the grammar or lexicon, never owned)
//! with a span `[start, end)` into the token sequence, a progress dot, and a
//! history recording which arc satisfied each already-matched child. Arcs
//! reference each other freely -- one arc may appear in the history of many
//! dependents, and must stay extendable after it does -- so every arc lives
//! in an append-only [`ArcArena`] and history entries are non-owning
//! [`ArcId`] handles into it.
//!
//! Extension is copy-on-write: advancing an arc's dot allocates a fresh arc
//! and leaves the original untouched, so the same incomplete arc can later
//! be completed along a different path. That is what keeps ambiguous
//! grammars from cross-contaminating their competing derivations.

use crate::rule::Rule;

/// A stable handle to an arc within its arena.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ArcId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Arc<'g> {
    rule: &'g Rule,
    start: usize,
    end: usize,
    dot: usize,
    /// One slot per child; slot `i` holds the arc that satisfied
    /// `children[i]` once matched.
    history: Vec<Option<ArcId>>,
}

impl<'g> Arc<'g> {
    /// A complete arc over the single token at `at`, seeded from a lexicon
    /// entry.
    pub(crate) fn terminal(rule: &'g Rule, at: usize) -> Arc<'g> {
        Arc {
            rule,
            start: at,
            end: at + 1,
            dot: rule.children().len(),
            history: vec![None; rule.children().len()],
        }
    }

    /// A zero-progress arc anchored where the predicted constituent could
    /// begin: an empty span at `at`.
    pub(crate) fn predicted(rule: &'g Rule, at: usize) -> Arc<'g> {
        Arc {
            rule,
            start: at,
            end: at,
            dot: 0,
            history: vec![None; rule.children().len()],
        }
    }

    pub fn rule(&self) -> &'g Rule {
        self.rule
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// For an incomplete arc, the end of whatever it last matched (its
    /// start if nothing has been matched yet).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    pub fn history(&self) -> &[Option<ArcId>] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.dot == self.rule.children().len()
    }

    fn extendable_by(&self, key: &Arc<'g>) -> bool {
        !self.is_complete()
            && self.rule.children()[self.dot] == *key.rule.parent()
            && self.end == key.start
    }

    /// The copy-on-extend step: `None` unless `key` is a contiguous match
    /// for the child at the dot.
    fn extended(&self, key: &Arc<'g>, key_id: ArcId) -> Option<Arc<'g>> {
        if !self.extendable_by(key) {
            return None;
        }
        let mut history = self.history.clone();
        history[self.dot] = Some(key_id);
        Some(Arc {
            rule: self.rule,
            start: self.start,
            end: key.end,
            dot: self.dot + 1,
            history,
        })
    }
}

// History is deliberately excluded: re-deriving the same span along a
// different path must not count as a new arc.
impl PartialEq for Arc<'_> {
    fn eq(&self, other: &Arc<'_>) -> bool {
        self.rule == other.rule
            && self.start == other.start
            && self.end == other.end
            && self.dot == other.dot
    }
}

impl Eq for Arc<'_> {}

/// Append-only storage for every arc created during one parse.
#[derive(Debug, Default)]
pub struct ArcArena<'g> {
    arcs: Vec<Arc<'g>>,
}

impl<'g> ArcArena<'g> {
    pub(crate) fn new() -> ArcArena<'g> {
        ArcArena { arcs: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, arc: Arc<'g>) -> ArcId {
        let id = ArcId(self.arcs.len());
        self.arcs.push(arc);
        id
    }

    pub fn arc(&self, id: ArcId) -> &Arc<'g> {
        &self.arcs[id.0]
    }

    /// Extends `candidate` with `key` if possible, allocating the new arc.
    pub(crate) fn extended(&mut self, candidate: ArcId, key: ArcId) -> Option<ArcId> {
        let new = self.arcs[candidate.0].extended(self.arc(key), key)?;
        Some(self.alloc(new))
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/arc.rs"]
mod tests_for_arc;
