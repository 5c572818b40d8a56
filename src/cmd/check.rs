use super::PlacementArgs;
use crate::reports;
use clap::Args;
use lasergrid::puzzle::PuzzleDefinition;
use lasergrid::LgResult;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub placements: PlacementArgs,

    /// Print the board snapshot as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Returns whether the board is solved.
pub fn run(args: CheckArgs, def: &PuzzleDefinition) -> LgResult<bool> {
    let engine = args.placements.build_engine(def)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        reports::print_board(&def.meta.name, &engine);
        reports::print_clue_report(engine.evaluation());
    }

    Ok(engine.is_solved())
}
