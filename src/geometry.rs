use crate::error::{LaserError, LgResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Absolute position on the playing field.
///
/// Signed because a ray may step one cell past the border before it stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// Zero-based position inside the mirror field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub row: usize,
    pub col: usize,
}

impl Offset {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, col delta)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A side of the board carrying clues. Declaration order is evaluation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Direction a ray fired from this side travels in.
    pub fn direction(self) -> Direction {
        match self {
            Self::Top => Direction::Down,
            Self::Bottom => Direction::Up,
            Self::Left => Direction::Right,
            Self::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Zone {
    Border,
    CornerDot,
    Dot,
    Mirror,
    Outside,
}

/// Largest accepted mirror field side.
pub const MAX_CENTER_SIZE: usize = 1024;

/// Concentric layout of an N×N mirror field: a dot ring around it and a
/// clue ring around that, so `total_size = center_size + 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    center_size: usize,
}

impl Grid {
    pub fn new(center_size: usize) -> LgResult<Self> {
        if center_size == 0 || center_size > MAX_CENTER_SIZE {
            return Err(LaserError::InvalidSize(center_size));
        }
        Ok(Self { center_size })
    }

    pub fn center_size(&self) -> usize {
        self.center_size
    }

    pub fn total_size(&self) -> usize {
        self.center_size + 4
    }

    pub fn last(&self) -> i32 {
        self.total_size() as i32 - 1
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        let last = self.last();
        (0..=last).contains(&p.row) && (0..=last).contains(&p.col)
    }

    /// True on any row/col of the dot ring, corners included.
    pub fn on_dot_ring(&self, p: Point) -> bool {
        let inner = self.last() - 1;
        p.row == 1 || p.row == inner || p.col == 1 || p.col == inner
    }

    pub fn in_mirror_field(&self, p: Point) -> bool {
        let hi = self.last() - 2;
        (2..=hi).contains(&p.row) && (2..=hi).contains(&p.col)
    }

    pub fn zone(&self, p: Point) -> Zone {
        let last = self.last();
        if !self.in_bounds(p) {
            Zone::Outside
        } else if p.row == 0 || p.row == last || p.col == 0 || p.col == last {
            Zone::Border
        } else if self.in_mirror_field(p) {
            Zone::Mirror
        } else if (p.row == 1 || p.row == last - 1) && (p.col == 1 || p.col == last - 1) {
            Zone::CornerDot
        } else {
            Zone::Dot
        }
    }

    pub fn offset_of(&self, p: Point) -> Option<Offset> {
        if self.in_mirror_field(p) {
            Some(Offset::new((p.row - 2) as usize, (p.col - 2) as usize))
        } else {
            None
        }
    }

    pub fn to_absolute(&self, offset: Offset) -> Point {
        Point::new(offset.row as i32 + 2, offset.col as i32 + 2)
    }

    pub fn contains_offset(&self, offset: Offset) -> bool {
        offset.row < self.center_size && offset.col < self.center_size
    }

    pub fn check_index(&self, side: Side, index: usize) -> LgResult<()> {
        if (1..=self.center_size).contains(&index) {
            Ok(())
        } else {
            Err(LaserError::ClueIndexOutOfRange {
                side,
                index,
                size: self.center_size,
            })
        }
    }

    /// Dot a ray for clue `index` on `side` starts from.
    pub fn entry_dot(&self, side: Side, index: usize) -> Point {
        let along = index as i32 + 1;
        let inner = self.last() - 1;
        match side {
            Side::Top => Point::new(1, along),
            Side::Bottom => Point::new(inner, along),
            Side::Left => Point::new(along, 1),
            Side::Right => Point::new(along, inner),
        }
    }

    /// Border cell that displays the clue `index` on `side`.
    pub fn border_cell(&self, side: Side, index: usize) -> Point {
        let along = index as i32 + 1;
        let last = self.last();
        match side {
            Side::Top => Point::new(0, along),
            Side::Bottom => Point::new(last, along),
            Side::Left => Point::new(along, 0),
            Side::Right => Point::new(along, last),
        }
    }

    /// Projects a dot-ring position outward onto the border ring.
    ///
    /// Independent of the side that fired the ray. Points off the dot ring
    /// have no exit cell.
    pub fn exit_border_cell(&self, dot: Point) -> Option<Point> {
        if !self.in_bounds(dot) {
            return None;
        }
        let last = self.last();
        if dot.row == 1 {
            Some(Point::new(0, dot.col))
        } else if dot.row == last - 1 {
            Some(Point::new(last, dot.col))
        } else if dot.col == 1 {
            Some(Point::new(dot.row, 0))
        } else if dot.col == last - 1 {
            Some(Point::new(dot.row, last))
        } else {
            None
        }
    }

    /// Upper bound on ray length: every cell entered at most once per heading.
    pub fn max_trace_steps(&self) -> usize {
        let n = self.total_size();
        n.saturating_mul(n).saturating_mul(4).saturating_add(1)
    }
}
