pub mod builtin;
pub mod export;
pub mod registry;
pub mod view;

pub use crate::domain::model::{ProjectRecord, ProjectsDocument};
pub use crate::domain::ports::{ProjectSource, Storage};
pub use crate::utils::error::Result;
