use crate::clues::ClueTable;
use crate::geometry::{Grid, Point, Side};
use crate::mirrors::MirrorField;
use crate::tracer::{shoot_laser, Segment, Trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    pub fn of(product: u64, expected: u64) -> Self {
        if product == expected {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    pub fn is_match(self) -> bool {
        self == Self::Match
    }
}

/// A segment carrying the verdict of the whole ray it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitOutput {
    pub product: u64,
    pub verdict: Verdict,
    pub side: Side,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueResult {
    pub side: Side,
    pub index: usize,
    pub expected: u64,
    pub trace: Trace,
    pub verdict: Verdict,
    pub exit_cell: Option<Point>,
}

/// Full re-evaluation of a board snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub results: Vec<ClueResult>,
    pub segments: Vec<GradedSegment>,
    /// Last writer wins per border cell.
    pub outputs: BTreeMap<Point, ExitOutput>,
    /// Every writer per border cell, in evaluation order.
    pub candidates: BTreeMap<Point, Vec<ExitOutput>>,
    pub solved: bool,
}

impl Evaluation {
    /// Border cells reached by more than one clue's ray.
    pub fn collisions(&self) -> impl Iterator<Item = (&Point, &Vec<ExitOutput>)> {
        self.candidates.iter().filter(|(_, c)| c.len() > 1)
    }

    pub fn output_at(&self, cell: Point) -> Option<&ExitOutput> {
        self.outputs.get(&cell)
    }

    pub fn matched(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_match()).count()
    }
}

/// Traces every clue of `clues` against `mirrors`.
///
/// Pure with respect to its inputs; callers re-run it after every mutation.
pub fn evaluate(grid: &Grid, mirrors: &MirrorField, clues: &ClueTable) -> Evaluation {
    let mut eval = Evaluation::default();

    for (side, index, expected) in clues.iter() {
        let entry = grid.entry_dot(side, index);
        let trace = shoot_laser(grid, mirrors, entry, side.direction());
        let verdict = Verdict::of(trace.product, expected);

        eval.segments.extend(
            trace
                .segments
                .iter()
                .map(|&segment| GradedSegment { segment, verdict }),
        );

        let exit_cell = grid.exit_border_cell(trace.final_dot);
        if let Some(cell) = exit_cell {
            let output = ExitOutput {
                product: trace.product,
                verdict,
                side,
                index,
            };
            eval.outputs.insert(cell, output);
            eval.candidates.entry(cell).or_default().push(output);
        }

        debug!(
            "{}[{}]: product {} (expected {}) -> {}, exit {:?}",
            side, index, trace.product, expected, verdict, exit_cell
        );

        eval.results.push(ClueResult {
            side,
            index,
            expected,
            trace,
            verdict,
            exit_cell,
        });
    }

    for (cell, writers) in eval.collisions() {
        if let Some(kept) = writers.last() {
            warn!(
                "Exit cell ({},{}) reached by {} rays; keeping {}[{}]",
                cell.row,
                cell.col,
                writers.len(),
                kept.side,
                kept.index
            );
        }
    }

    eval.solved = eval.segments.iter().all(|s| s.verdict.is_match());
    eval
}
