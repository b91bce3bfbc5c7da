//! CLI command implementations.

pub mod score;

pub use score::{run_score, ScoreConfig};
