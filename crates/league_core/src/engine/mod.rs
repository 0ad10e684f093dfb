//! Match simulation: model parameters and the outcome pipeline.

pub mod config;
pub mod outcome;

pub use config::EngineConfig;
pub use outcome::MatchEngine;
