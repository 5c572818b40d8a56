pub mod check;
pub mod generate;
pub mod reveal;

use clap::Args;
use lasergrid::mirrors::MirrorPlacement;
use lasergrid::puzzle::PuzzleDefinition;
use lasergrid::{LgResult, PuzzleEngine};
use tracing::info;

/// Mirror placements shared by `check` and `reveal`.
#[derive(Args, Debug, Clone)]
pub struct PlacementArgs {
    /// Mirror as `row,col,/` or `row,col,\` (mirror-field offsets). Repeatable.
    #[arg(short = 'm', long = "mirror")]
    pub mirrors: Vec<MirrorPlacement>,

    /// Apply the solution stored in the puzzle file first.
    #[arg(long, default_value_t = false)]
    pub solution: bool,
}

impl PlacementArgs {
    pub fn build_engine(&self, def: &PuzzleDefinition) -> LgResult<PuzzleEngine> {
        let mut engine = PuzzleEngine::from_definition(def)?;
        if self.solution {
            info!("🪞 Applying stored solution ({} mirrors)", def.solution.len());
            engine.place_all(&def.solution)?;
        }
        engine.place_all(&self.mirrors)?;
        Ok(engine)
    }
}
