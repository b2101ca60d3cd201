#[cfg(feature = "cli")]
pub mod cli;
pub mod file_source;
pub mod storage;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
