#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{file_source::FileSource, storage::LocalStorage};
pub use core::{
    builtin::BuiltinSource,
    export::ExportFormat,
    registry::{get_all_projects, ProjectRegistry},
};
pub use domain::{ProjectRecord, ProjectSource, ProjectsDocument, Storage};
pub use utils::error::{RegistryError, Result};
