//! Generate one captioned QR code image per label of an input file.

pub mod config;
pub mod services;

pub use config::{Cli, ConfigError, Settings};
pub use services::{GenerateError, run};
