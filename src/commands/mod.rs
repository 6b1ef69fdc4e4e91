//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;

pub use analyze::{SecretAnalysis, analyze_secrets};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
