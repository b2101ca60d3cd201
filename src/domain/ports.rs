use crate::domain::model::ProjectRecord;
use crate::utils::error::Result;

/// Anything that can produce the ordered list of projects for a registry.
pub trait ProjectSource {
    fn load(&self) -> Result<Vec<ProjectRecord>>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
