//! Agenda-driven bottom-up chart parsing for context-free grammars, with
//! Earley-style prediction.
//!
//! The parse of a sentence is organized around three structures. The
//! [`Agenda`] is the worklist of [`Arc`]s: partially- or fully-recognized
//! rule instances anchored to a token span. The [`Chart`] is the append-only
//! record of every complete arc discovered so far. The [`Parser`] drives the
//! loop: pick a complete arc off the agenda, *predict* new arcs for every
//! grammar rule that could start with it, *extend* every agenda arc that was
//! waiting for it, and deposit it in the chart. Once the chart holds a
//! complete arc rooted at the start symbol and spanning the whole input, the
//! arc's history is backtraced into a bracketed tree such as
//! `[.S [.NP [.PN I]][.VP [.V SLEEP]]]`.
//!
//! The grammar and lexicon are read-only during a parse; each parse owns its
//! own agenda and chart, so one [`Grammar`]/[`Lexicon`] pair may serve many
//! concurrent parses. The loop is deliberately non-exhaustive: it returns
//! the *first* sentence-spanning arc found under a fixed selection order,
//! which makes the result deterministic for a fixed grammar, lexicon, and
//! rule insertion order.

#[macro_use] extern crate lalrpop_util;

pub mod agenda;
pub mod arc;
pub mod chart;
pub mod language;
pub mod parser;
pub mod rule;

mod display;

lalrpop_mod!(pub notation); // synthesized by LALRPOP

pub use agenda::Agenda;
pub use arc::{Arc, ArcArena, ArcId};
pub use chart::Chart;
pub use language::{Grammar, ImportReport, Lexicon, SkippedLine};
pub use parser::{ParseError, Parser};
pub use rule::{Rule, RuleError, RuleKind, Symbol};

#[cfg(test)]
mod tests;
