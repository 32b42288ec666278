pub mod config;
pub mod orchestrator;

pub use config::BoxConfig;
pub use orchestrator::Orchestrator;
