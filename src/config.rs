use crate::error::{LaserError, LgResult};
use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub board: BoardParams,
    #[command(flatten)]
    pub generate: GenerateParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct BoardParams {
    /// Side length of the mirror field.
    #[arg(long, default_value_t = 5)]
    pub center_size: usize,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self { center_size: 5 }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    /// Probability that a mirror-field cell receives a mirror.
    #[arg(long, default_value_t = 0.3)]
    pub density: f32,
    /// Number of clues to mark hidden in the meta-puzzle table.
    #[arg(long, default_value_t = 4)]
    pub hidden: usize,
    /// Keep only clues whose ray turns at least once.
    #[arg(long, default_value_t = false)]
    pub require_reflection: bool,
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            density: 0.3,
            hidden: 4,
            require_reflection: false,
            seed: None,
        }
    }
}

impl GenerateParams {
    pub fn validate(&self) -> LgResult<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LaserError::Config(format!(
                "--density must be within 0.0..=1.0, got {}",
                self.density
            )));
        }
        Ok(())
    }
}
