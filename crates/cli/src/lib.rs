//! `gilded-rose` simulation runner: configuration and report rendering.

pub mod config;
pub mod report;

pub use config::SimulationConfig;
pub use report::{render_day, run};
