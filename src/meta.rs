use crate::clues::ClueTable;
use crate::evaluator::ExitOutput;
use crate::geometry::{Grid, Point, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recovered {
    pub index: usize,
    pub value: u64,
}

/// Values recovered at hidden clue positions and the number derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenAnswer {
    pub top: Vec<Recovered>,
    pub left: Vec<Recovered>,
    pub right: Vec<Recovered>,
    pub bottom: Vec<Recovered>,
    /// Per-side sums in `top, left, right, bottom` order.
    pub sums: [u64; 4],
    pub answer: u64,
}

impl HiddenAnswer {
    pub fn side(&self, side: Side) -> &[Recovered] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Recovered> {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn sum(&self, side: Side) -> u64 {
        match side {
            Side::Top => self.sums[0],
            Side::Left => self.sums[1],
            Side::Right => self.sums[2],
            Side::Bottom => self.sums[3],
        }
    }
}

/// Reads the products observed at every hidden position of `hidden` out of
/// `outputs`, which must come from the solved primary table. Nothing is
/// re-traced: a re-trace under `hidden` would grade against sentinels.
pub fn recover_hidden(
    grid: &Grid,
    outputs: &BTreeMap<Point, ExitOutput>,
    hidden: &ClueTable,
) -> HiddenAnswer {
    let mut result = HiddenAnswer::default();

    for side in Side::iter() {
        let recovered: Vec<Recovered> = hidden
            .hidden_indices(side)
            .map(|index| Recovered {
                index,
                value: outputs
                    .get(&grid.border_cell(side, index))
                    .map_or(0, |o| o.product),
            })
            .collect();
        *result.side_mut(side) = recovered;
    }

    result.sums = [Side::Top, Side::Left, Side::Right, Side::Bottom].map(|side| {
        result
            .side(side)
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.value))
    });
    result.answer = result
        .sums
        .iter()
        .fold(1u64, |acc, &s| acc.saturating_mul(s));
    result
}
