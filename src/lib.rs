pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod optimizer;
pub mod scoring;
pub mod server;

pub use error::TeamError;
pub use optimizer::{generate_team, TeamScenario};
