use clap::Args;
use lasergrid::config::Config;
use lasergrid::generator;
use lasergrid::LgResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Write the puzzle here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: GenerateArgs) -> LgResult<()> {
    let def = generator::generate(&args.config.board, &args.config.generate)?;
    match &args.output {
        Some(path) => {
            def.save_to_file(path)?;
            info!("💾 Puzzle written to {}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&def)?),
    }
    Ok(())
}
