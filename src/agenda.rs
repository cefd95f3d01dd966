//! The agenda: the worklist of arcs, and the operations of the parse loop.
//!
//! The loop steps are the classic chart-parsing moves, driven bottom-up:
//!
//! ```text
//!   token w at i,  POS : w
//!  ----------------------------------------- (seed)
//!   [POS --> w ., i, i+1]
//!
//!   [B --> gamma ., j, ..],  A --> B beta
//!  ----------------------------------------- (predict)
//!   [A --> . B beta, j, j]
//!
//!   [A --> alpha . B beta, i, j],  [B --> gamma ., j, k]
//!  ----------------------------------------- (extend)
//!   [A --> alpha B . beta, i, k]
//! ```
//!
//! Selection is fixed: the earliest-queued complete arc wins, and incomplete
//! arcs cycle back to the tail. One full pass over the worklist without
//! finding a complete arc is the exhaustion condition -- no parse. Nothing
//! is ever removed from the worklist except by selection, so the worklist
//! grows monotonically within a parse; acceptable for classroom-length
//! sentences, unbounded on pathological grammars.

use std::collections::VecDeque;

use crate::arc::{Arc, ArcArena, ArcId};
use crate::language::{Grammar, Lexicon};
use crate::parser::ParseError;
use crate::rule::Symbol;

pub struct Agenda<'g> {
    arena: ArcArena<'g>,
    queue: VecDeque<ArcId>,
}

impl<'g> Agenda<'g> {
    /// Seeds the worklist: one complete terminal arc per part of speech the
    /// lexicon assigns each token, in token order then lexicon insertion
    /// order. A token the lexicon does not know aborts the whole parse.
    pub fn new(tokens: &[Symbol], lexicon: &'g Lexicon) -> Result<Agenda<'g>, ParseError> {
        let mut arena = ArcArena::new();
        let mut queue = VecDeque::new();
        for (index, token) in tokens.iter().enumerate() {
            let mut known = false;
            for rule in lexicon.terminal_rules_for(token) {
                known = true;
                let id = arena.alloc(Arc::terminal(rule, index));
                queue.push_back(id);
            }
            if !known {
                return Err(ParseError::UnknownWord(token.as_str().to_string()));
            }
        }
        Ok(Agenda { arena, queue })
    }

    /// Pops the earliest-queued complete arc, requeueing incomplete arcs at
    /// the tail as it passes them. A full unproductive pass (or an empty
    /// worklist) means no further progress is possible.
    pub fn choose_next(&mut self) -> Result<ArcId, ParseError> {
        for _ in 0..self.queue.len() {
            match self.queue.pop_front() {
                Some(id) if self.arena.arc(id).is_complete() => return Ok(id),
                Some(id) => self.queue.push_back(id),
                None => break,
            }
        }
        Err(ParseError::NoDerivation)
    }

    /// Pushes a zero-progress arc for every grammar rule whose first child
    /// is the completed arc's parent, anchored at the completed arc's
    /// start. A symbol no production starts with predicts nothing.
    pub fn predict(&mut self, grammar: &'g Grammar, current: ArcId) {
        let (parent, at) = {
            let arc = self.arena.arc(current);
            if !arc.is_complete() {
                return;
            }
            (arc.rule().parent().clone(), arc.start())
        };
        for rule in grammar.rules_starting_with(&parent) {
            let id = self.arena.alloc(Arc::predicted(rule, at));
            self.queue.push_back(id);
        }
    }

    /// Attempts to extend every arc currently on the worklist with `key`,
    /// pushing each successful extension at the tail. The originals stay
    /// queued untouched: a later key may extend them along another path.
    pub fn extend(&mut self, key: ArcId) {
        for i in 0..self.queue.len() {
            let candidate = self.queue[i];
            if let Some(extended) = self.arena.extended(candidate, key) {
                self.queue.push_back(extended);
            }
        }
    }

    pub fn arena(&self) -> &ArcArena<'g> {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The queued arcs front to back.
    pub fn queued(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.queue.iter().copied()
    }
}

#[cfg(test)]
#[path = "tests/agenda.rs"]
mod tests_for_agenda;
