use crate::error::{LaserError, LgResult};
use crate::geometry::{Direction, Offset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum Mirror {
    #[strum(serialize = "/")]
    #[serde(rename = "/")]
    Forward,
    #[strum(serialize = "\\")]
    #[serde(rename = "\\")]
    Backward,
}

impl Mirror {
    /// Outgoing heading for a ray arriving with `incoming`.
    ///
    /// `Forward` turns up->left and down->right; `Backward` is the opposite.
    pub fn reflect(self, incoming: Direction) -> Direction {
        use Direction::*;
        match (self, incoming) {
            (Mirror::Forward, Up) => Left,
            (Mirror::Forward, Down) => Right,
            (Mirror::Forward, Left) => Up,
            (Mirror::Forward, Right) => Down,
            (Mirror::Backward, Up) => Right,
            (Mirror::Backward, Down) => Left,
            (Mirror::Backward, Left) => Down,
            (Mirror::Backward, Right) => Up,
        }
    }
}

/// How a single user activation mutates a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum InputPolicy {
    /// One button per orientation: set it, or clear it if already set.
    Discrete,
    /// Single button: empty -> `/` -> `\` -> empty.
    Cycle,
}

/// Sparse-by-value mirror storage over a flat `size * size` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorField {
    size: usize,
    cells: Vec<Option<Mirror>>,
}

impl MirrorField {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, offset: Offset) -> LgResult<usize> {
        if offset.row < self.size && offset.col < self.size {
            Ok(offset.row * self.size + offset.col)
        } else {
            Err(LaserError::OffsetOutOfRange {
                row: offset.row,
                col: offset.col,
                size: self.size,
            })
        }
    }

    /// Mirror at `offset`; `None` for empty or out-of-field cells.
    pub fn get(&self, offset: Offset) -> Option<Mirror> {
        self.index(offset).ok().and_then(|i| self.cells[i])
    }

    /// Sets or clears a cell, replacing whatever was there.
    pub fn set(&mut self, offset: Offset, mirror: Option<Mirror>) -> LgResult<()> {
        let i = self.index(offset)?;
        self.cells[i] = mirror;
        Ok(())
    }

    /// Discrete-button policy.
    pub fn press(&mut self, offset: Offset, mirror: Mirror) -> LgResult<Option<Mirror>> {
        let i = self.index(offset)?;
        let next = if self.cells[i] == Some(mirror) {
            None
        } else {
            Some(mirror)
        };
        self.cells[i] = next;
        Ok(next)
    }

    /// Cycle policy.
    pub fn cycle(&mut self, offset: Offset) -> LgResult<Option<Mirror>> {
        let i = self.index(offset)?;
        let next = match self.cells[i] {
            None => Some(Mirror::Forward),
            Some(Mirror::Forward) => Some(Mirror::Backward),
            Some(Mirror::Backward) => None,
        };
        self.cells[i] = next;
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Offset, Mirror)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|m| (Offset::new(i / size, i % size), m)))
    }

    pub fn placements(&self) -> Vec<MirrorPlacement> {
        self.iter()
            .map(|(offset, mirror)| MirrorPlacement { offset, mirror })
            .collect()
    }
}

/// A mirror at a field offset. Text form: `row,col,/` or `row,col,\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorPlacement {
    #[serde(flatten)]
    pub offset: Offset,
    pub mirror: Mirror,
}

impl FromStr for MirrorPlacement {
    type Err = LaserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || LaserError::InvalidPlacement(s.to_string());
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        let row = parts[0].parse().map_err(|_| bad())?;
        let col = parts[1].parse().map_err(|_| bad())?;
        let mirror = Mirror::from_str(parts[2]).map_err(|_| bad())?;
        Ok(Self {
            offset: Offset::new(row, col),
            mirror,
        })
    }
}

impl fmt::Display for MirrorPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.offset.row, self.offset.col, self.mirror)
    }
}
