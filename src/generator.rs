use crate::clues::ClueTable;
use crate::config::{BoardParams, GenerateParams};
use crate::error::LgResult;
use crate::geometry::{Grid, Offset, Side};
use crate::mirrors::{Mirror, MirrorField};
use crate::puzzle::{PuzzleDefinition, PuzzleMeta};
use crate::tracer::shoot_laser;
use fastrand::Rng;
use strum::IntoEnumIterator;
use tracing::info;

pub fn random_field(size: usize, density: f32, rng: &mut Rng) -> LgResult<MirrorField> {
    let mut field = MirrorField::new(size);
    for row in 0..size {
        for col in 0..size {
            if rng.f32() < density {
                let mirror = if rng.bool() {
                    Mirror::Forward
                } else {
                    Mirror::Backward
                };
                field.set(Offset::new(row, col), Some(mirror))?;
            }
        }
    }
    Ok(field)
}

/// Clue table that `field` solves: one clue per entry dot.
pub fn derive_clues(grid: &Grid, field: &MirrorField, require_reflection: bool) -> ClueTable {
    let mut clues = ClueTable::default();
    for side in Side::iter() {
        for index in 1..=grid.center_size() {
            let trace = shoot_laser(grid, field, grid.entry_dot(side, index), side.direction());
            if require_reflection && trace.segments.len() < 2 {
                continue;
            }
            clues.side_mut(side).insert(index, trace.product);
        }
    }
    clues
}

/// Random puzzle with a known solution and a hidden-clue variant.
pub fn generate(board: &BoardParams, params: &GenerateParams) -> LgResult<PuzzleDefinition> {
    params.validate()?;
    let grid = Grid::new(board.center_size)?;
    let mut rng = match params.seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    };

    let field = random_field(grid.center_size(), params.density, &mut rng)?;
    let clues = derive_clues(&grid, &field, params.require_reflection);

    let mut positions: Vec<(Side, usize)> = clues.iter().map(|(s, i, _)| (s, i)).collect();
    rng.shuffle(&mut positions);
    positions.truncate(params.hidden);
    let hidden = if positions.is_empty() {
        None
    } else {
        Some(clues.hide(&positions))
    };

    info!(
        "Generated {}x{} puzzle: {} mirrors, {} clues, {} hidden",
        grid.center_size(),
        grid.center_size(),
        field.count(),
        clues.len(),
        positions.len()
    );

    Ok(PuzzleDefinition {
        meta: PuzzleMeta {
            name: "Generated".to_string(),
            author: "lasergrid".to_string(),
            notes: match params.seed {
                Some(s) => format!("seed {}, density {}", s, params.density),
                None => format!("density {}", params.density),
            },
        },
        center_size: grid.center_size(),
        clues,
        hidden,
        solution: field.placements(),
    })
}
