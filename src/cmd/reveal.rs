use super::PlacementArgs;
use crate::reports;
use clap::Args;
use lasergrid::clues::ClueTable;
use lasergrid::puzzle::PuzzleDefinition;
use lasergrid::{LaserError, LgResult};
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct RevealArgs {
    #[command(flatten)]
    pub placements: PlacementArgs,

    /// JSON clue table to use instead of the puzzle's own `hidden` table.
    #[arg(long)]
    pub hidden: Option<String>,
}

pub fn run(args: RevealArgs, def: &PuzzleDefinition) -> LgResult<()> {
    let hidden: ClueTable = match &args.hidden {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => def.hidden.clone().ok_or_else(|| {
            LaserError::Config(format!(
                "puzzle '{}' has no hidden clue table; pass --hidden",
                def.meta.name
            ))
        })?,
    };

    let mut engine = args.placements.build_engine(def)?;
    if !engine.is_solved() {
        reports::print_clue_report(engine.evaluation());
    }
    let answer = engine.reveal_hidden(hidden)?;
    reports::print_hidden_answer(answer);
    Ok(())
}
