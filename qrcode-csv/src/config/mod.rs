//! Configuration: command-line parsing and validation.

pub mod cli;
pub mod settings;
pub mod validation;

pub use cli::Cli;
pub use settings::Settings;
pub use validation::ConfigError;
