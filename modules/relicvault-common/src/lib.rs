pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SourceMode};
pub use error::RelicVaultError;
pub use types::*;
