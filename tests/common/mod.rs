#![allow(dead_code)]

use lasergrid::clues::ClueTable;
use lasergrid::geometry::{Grid, Offset, Side};
use lasergrid::mirrors::{Mirror, MirrorField};
use lasergrid::PuzzleEngine;

pub fn grid(size: usize) -> Grid {
    Grid::new(size).expect("valid size")
}

pub fn field_with(size: usize, mirrors: &[(usize, usize, Mirror)]) -> MirrorField {
    let mut field = MirrorField::new(size);
    for &(r, c, m) in mirrors {
        field.set(Offset::new(r, c), Some(m)).expect("offset in range");
    }
    field
}

pub fn clues(entries: &[(Side, usize, u64)]) -> ClueTable {
    entries
        .iter()
        .fold(ClueTable::default(), |t, &(s, i, v)| t.with(s, i, v))
}

pub fn engine_with(
    size: usize,
    entries: &[(Side, usize, u64)],
    mirrors: &[(usize, usize, Mirror)],
) -> PuzzleEngine {
    let mut engine = PuzzleEngine::new(grid(size), clues(entries)).expect("valid table");
    for &(r, c, m) in mirrors {
        engine
            .set_mirror(Offset::new(r, c), Some(m))
            .expect("offset in range");
    }
    engine
}

/// Every entry on every side of a `size` field.
pub fn all_entries(size: usize) -> Vec<(Side, usize)> {
    use strum::IntoEnumIterator;
    Side::iter()
        .flat_map(|s| (1..=size).map(move |i| (s, i)))
        .collect()
}
