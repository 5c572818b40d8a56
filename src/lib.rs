pub mod clues;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod geometry;
pub mod meta;
pub mod mirrors;
pub mod puzzle;
pub mod tracer;
// cmd and reports belong to the binary (main.rs).

pub use engine::PuzzleEngine;
pub use error::{LaserError, LgResult};
