//! The chart: the append-only record of completed constituents.

use crate::arc::{ArcArena, ArcId};
use crate::rule::start_symbol;

/// Completed arcs in discovery order, de-duplicated, plus the distinguished
/// sentence slot. Nothing is ever removed; growth is monotonic for the
/// duration of one parse.
#[derive(Debug)]
pub struct Chart {
    arcs: Vec<ArcId>,
    sentence: Option<ArcId>,
    token_count: usize,
}

impl Chart {
    pub fn new(token_count: usize) -> Chart {
        Chart { arcs: Vec::new(), sentence: None, token_count }
    }

    /// No-op when a structurally equal arc is already recorded. The first
    /// start-symbol arc spanning the whole sentence claims the sentence
    /// slot, and keeps it.
    pub fn add(&mut self, id: ArcId, arena: &ArcArena<'_>) {
        if self.contains(id, arena) {
            return;
        }
        self.arcs.push(id);
        let arc = arena.arc(id);
        if self.sentence.is_none()
            && *arc.rule().parent() == start_symbol()
            && arc.start() == 0
            && arc.end() == self.token_count
        {
            self.sentence = Some(id);
        }
    }

    pub fn contains(&self, id: ArcId, arena: &ArcArena<'_>) -> bool {
        let arc = arena.arc(id);
        self.arcs.iter().any(|&seen| arena.arc(seen) == arc)
    }

    pub fn is_sentence(&self) -> bool {
        self.sentence.is_some()
    }

    /// The first complete start-symbol arc covering `[0, token_count)`, if
    /// one has been found.
    pub fn sentence(&self) -> Option<ArcId> {
        self.sentence
    }

    pub fn iter(&self) -> impl Iterator<Item = ArcId> + '_ {
        self.arcs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// A span diagram of the chart: the token positions as a header, then
    /// one dashed row per arc.
    ///
    /// ```text
    /// 0    1    2
    ///  ----       PN : I
    ///  ---------  S --> NP VP
    /// ```
    pub fn diagram(&self, arena: &ArcArena<'_>) -> String {
        let header = (0..=self.token_count)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("    ");
        let mut lines = vec![header];
        for &id in &self.arcs {
            let arc = arena.arc(id);
            let mut row = String::new();
            for i in 0..self.token_count {
                row.push(if arc.start() < i && i < arc.end() { '-' } else { ' ' });
                let fill = if arc.start() <= i && i < arc.end() { '-' } else { ' ' };
                for _ in 0..4 {
                    row.push(fill);
                }
            }
            lines.push(format!("{}  {}", row, arc.rule()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;
