use crate::error::{LaserError, LgResult};
use crate::geometry::{Grid, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Clue value meaning "unknown, recover it from play".
pub const HIDDEN: u64 = 0;

/// Expected products per side, keyed by clue index.
///
/// All four sides must be present when deserialized; an absent side is a
/// malformed table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueTable {
    pub top: BTreeMap<usize, u64>,
    pub left: BTreeMap<usize, u64>,
    pub right: BTreeMap<usize, u64>,
    pub bottom: BTreeMap<usize, u64>,
}

impl ClueTable {
    pub fn side(&self, side: Side) -> &BTreeMap<usize, u64> {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut BTreeMap<usize, u64> {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn with(mut self, side: Side, index: usize, value: u64) -> Self {
        self.side_mut(side).insert(index, value);
        self
    }

    /// Every clue in evaluation order: sides as declared on `Side`, indices ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Side, usize, u64)> + '_ {
        Side::iter().flat_map(move |side| self.side(side).iter().map(move |(&i, &v)| (side, i, v)))
    }

    pub fn len(&self) -> usize {
        Side::iter().map(|s| self.side(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hidden_indices(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.side(side)
            .iter()
            .filter(|&(_, &v)| v == HIDDEN)
            .map(|(&i, _)| i)
    }

    pub fn has_hidden(&self) -> bool {
        self.iter().any(|(_, _, v)| v == HIDDEN)
    }

    /// Rejects indices that do not address a row/column of the mirror field.
    pub fn validate(&self, grid: &Grid) -> LgResult<()> {
        for (side, index, _) in self.iter() {
            grid.check_index(side, index)?;
        }
        Ok(())
    }

    /// Checks that `hidden` has the same clue positions as `self` and that
    /// every non-sentinel entry keeps its value.
    pub fn check_hidden_variant(&self, hidden: &ClueTable) -> LgResult<()> {
        for side in Side::iter() {
            let original = self.side(side);
            let variant = hidden.side(side);
            if original.len() != variant.len() || !original.keys().eq(variant.keys()) {
                return Err(LaserError::HiddenTableMismatch(format!(
                    "side '{}' has different clue positions",
                    side
                )));
            }
            for ((index, &expected), &given) in original.iter().zip(variant.values()) {
                if given != HIDDEN && given != expected {
                    return Err(LaserError::HiddenTableMismatch(format!(
                        "{}[{}] is {} but the primary table says {}",
                        side, index, given, expected
                    )));
                }
            }
        }
        Ok(())
    }

    /// Copy of this table with the given positions replaced by the sentinel.
    pub fn hide(&self, positions: &[(Side, usize)]) -> ClueTable {
        let mut table = self.clone();
        for &(side, index) in positions {
            if let Some(v) = table.side_mut(side).get_mut(&index) {
                *v = HIDDEN;
            }
        }
        table
    }
}
