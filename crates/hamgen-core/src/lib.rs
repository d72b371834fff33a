//! HamGen Core — configuration and error handling for the hazard
//! assessment map filename generator.

pub mod config;
pub mod error;

pub use config::{GeneratorConfig, DEFAULT_SUFFIX};
pub use error::{Error, Result};
