use crate::clues::ClueTable;
use crate::error::{LaserError, LgResult};
use crate::evaluator::{evaluate, Evaluation, ExitOutput, GradedSegment, Verdict};
use crate::geometry::{Grid, Offset, Point, Side};
use crate::meta::{recover_hidden, HiddenAnswer};
use crate::mirrors::{InputPolicy, Mirror, MirrorField, MirrorPlacement};
use crate::puzzle::PuzzleDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Owns one board: its mirrors, the active clue table and the latest
/// evaluation. Every mutation re-evaluates before returning.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    grid: Grid,
    mirrors: MirrorField,
    clues: ClueTable,
    evaluation: Evaluation,
    hidden_answer: Option<HiddenAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitAnnotation {
    pub cell: Point,
    #[serde(flatten)]
    pub output: ExitOutput,
}

/// Everything a presentation layer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub center_size: usize,
    pub mirrors: Vec<MirrorPlacement>,
    pub segments: Vec<GradedSegment>,
    pub exits: Vec<ExitAnnotation>,
    pub solved: bool,
    pub hidden_answer: Option<HiddenAnswer>,
}

impl PuzzleEngine {
    pub fn new(grid: Grid, clues: ClueTable) -> LgResult<Self> {
        clues.validate(&grid)?;
        let mirrors = MirrorField::new(grid.center_size());
        let mut engine = Self {
            grid,
            mirrors,
            clues,
            evaluation: Evaluation::default(),
            hidden_answer: None,
        };
        engine.reevaluate();
        Ok(engine)
    }

    pub fn from_definition(def: &PuzzleDefinition) -> LgResult<Self> {
        def.validate()?;
        Self::new(def.grid()?, def.clues.clone())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mirrors(&self) -> &MirrorField {
        &self.mirrors
    }

    pub fn clues(&self) -> &ClueTable {
        &self.clues
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn segments(&self) -> &[GradedSegment] {
        &self.evaluation.segments
    }

    pub fn outputs(&self) -> &BTreeMap<Point, ExitOutput> {
        &self.evaluation.outputs
    }

    pub fn is_solved(&self) -> bool {
        self.evaluation.solved
    }

    pub fn hidden_answer(&self) -> Option<&HiddenAnswer> {
        self.hidden_answer.as_ref()
    }

    pub fn set_mirror(&mut self, offset: Offset, mirror: Option<Mirror>) -> LgResult<()> {
        self.mirrors.set(offset, mirror)?;
        self.board_changed();
        Ok(())
    }

    pub fn press(&mut self, offset: Offset, mirror: Mirror) -> LgResult<Option<Mirror>> {
        let next = self.mirrors.press(offset, mirror)?;
        self.board_changed();
        Ok(next)
    }

    pub fn cycle_mirror(&mut self, offset: Offset) -> LgResult<Option<Mirror>> {
        let next = self.mirrors.cycle(offset)?;
        self.board_changed();
        Ok(next)
    }

    /// One activation under `policy`. `mirror` picks the button for the
    /// discrete policy and is ignored when cycling.
    pub fn apply(
        &mut self,
        policy: InputPolicy,
        offset: Offset,
        mirror: Mirror,
    ) -> LgResult<Option<Mirror>> {
        match policy {
            InputPolicy::Discrete => self.press(offset, mirror),
            InputPolicy::Cycle => self.cycle_mirror(offset),
        }
    }

    /// Applies a batch of placements, validating all of them first so a bad
    /// entry leaves the board untouched.
    pub fn place_all(&mut self, placements: &[MirrorPlacement]) -> LgResult<()> {
        if let Some(bad) = placements
            .iter()
            .find(|p| !self.grid.contains_offset(p.offset))
        {
            return Err(LaserError::OffsetOutOfRange {
                row: bad.offset.row,
                col: bad.offset.col,
                size: self.grid.center_size(),
            });
        }
        for p in placements {
            self.mirrors.set(p.offset, Some(p.mirror))?;
        }
        self.board_changed();
        Ok(())
    }

    pub fn clear_mirrors(&mut self) {
        self.mirrors.clear();
        self.board_changed();
    }

    pub fn activate_table(&mut self, table: ClueTable) -> LgResult<()> {
        table.validate(&self.grid)?;
        self.clues = table;
        self.board_changed();
        Ok(())
    }

    /// Any answer recovered earlier belongs to the previous board.
    fn board_changed(&mut self) {
        self.hidden_answer = None;
        self.reevaluate();
    }

    pub fn reevaluate(&mut self) {
        let was_solved = self.evaluation.solved;
        self.evaluation = evaluate(&self.grid, &self.mirrors, &self.clues);
        debug!(
            "Re-evaluated {} clues with {} mirrors: {}/{} matching, solved={}",
            self.clues.len(),
            self.mirrors.count(),
            self.evaluation.matched(),
            self.evaluation.results.len(),
            self.evaluation.solved
        );
        if self.evaluation.solved && !was_solved {
            info!(
                "✅ Solved: {} clues matched with {} mirrors",
                self.clues.len(),
                self.mirrors.count()
            );
        }
    }

    /// Switches to the hidden variant of the current table and derives the
    /// final answer from the exit products observed before the switch.
    ///
    /// Fails without touching any state unless the board is solved and
    /// `hidden` is a variant of the active table.
    pub fn reveal_hidden(&mut self, hidden: ClueTable) -> LgResult<&HiddenAnswer> {
        if !self.evaluation.solved {
            return Err(LaserError::NotSolved);
        }
        hidden.validate(&self.grid)?;
        self.clues.check_hidden_variant(&hidden)?;

        let observed = self.evaluation.outputs.clone();
        self.activate_table(hidden)?;
        let answer = recover_hidden(&self.grid, &observed, &self.clues);
        info!(
            "Hidden clues recovered: sums {:?}, answer {}",
            answer.sums, answer.answer
        );
        Ok(self.hidden_answer.insert(answer))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            center_size: self.grid.center_size(),
            mirrors: self.mirrors.placements(),
            segments: self.evaluation.segments.clone(),
            exits: self
                .evaluation
                .outputs
                .iter()
                .map(|(&cell, &output)| ExitAnnotation { cell, output })
                .collect(),
            solved: self.evaluation.solved,
            hidden_answer: self.hidden_answer.clone(),
        }
    }

    /// Verdict of a single clue in the latest evaluation.
    pub fn verdict_of(&self, side: Side, index: usize) -> Option<Verdict> {
        self.evaluation
            .results
            .iter()
            .find(|r| r.side == side && r.index == index)
            .map(|r| r.verdict)
    }
}
