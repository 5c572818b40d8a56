use crate::clues::ClueTable;
use crate::error::{LaserError, LgResult};
use crate::geometry::Grid;
use crate::mirrors::MirrorPlacement;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PuzzleMeta {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub notes: String,
}

/// A puzzle as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuzzleDefinition {
    #[serde(default)]
    pub meta: PuzzleMeta,
    pub center_size: usize,
    pub clues: ClueTable,
    /// Meta-puzzle variant of `clues` with some values set to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<ClueTable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solution: Vec<MirrorPlacement>,
}

impl PuzzleDefinition {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LgResult<Self> {
        let content = fs::read_to_string(path)?;
        let def: PuzzleDefinition = serde_json::from_str(&content)?;
        def.validate()?;
        Ok(def)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LgResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn grid(&self) -> LgResult<Grid> {
        Grid::new(self.center_size)
    }

    /// Structural checks only; whether `solution` actually solves the
    /// clues is the evaluator's business.
    pub fn validate(&self) -> LgResult<()> {
        let grid = self.grid()?;
        self.clues.validate(&grid)?;
        if let Some(hidden) = &self.hidden {
            self.clues.check_hidden_variant(hidden)?;
        }
        for p in &self.solution {
            if !grid.contains_offset(p.offset) {
                return Err(LaserError::OffsetOutOfRange {
                    row: p.offset.row,
                    col: p.offset.col,
                    size: self.center_size,
                });
            }
        }
        Ok(())
    }

    /// The 5x5 board the game ships with.
    pub fn starter() -> Self {
        use crate::geometry::Side;
        let clues = ClueTable::default()
            .with(Side::Top, 3, 9)
            .with(Side::Left, 4, 16)
            .with(Side::Right, 2, 75)
            .with(Side::Bottom, 3, 36);
        Self {
            meta: PuzzleMeta {
                name: "Starter".to_string(),
                author: String::new(),
                notes: "Four clues on a 5x5 field.".to_string(),
            },
            center_size: 5,
            clues,
            hidden: None,
            solution: Vec::new(),
        }
    }
}
