use crate::domain::model::{ProjectRecord, ProjectsDocument};
use crate::domain::ports::ProjectSource;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, validate_record, Validate};
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["toml", "json"];

impl ProjectsDocument {
    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegistryError::ParseError {
            format: "TOML".to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| RegistryError::ParseError {
            format: "JSON".to_string(),
            message: e.to_string(),
        })
    }
}

impl Validate for ProjectsDocument {
    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        for (index, record) in self.projects.iter().enumerate() {
            validate_record(index, record)?;
        }
        Ok(())
    }
}

/// Reads projects from a `.toml` or `.json` document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Validate for FileSource {
    fn validate(&self) -> Result<()> {
        let path = self.path.to_string_lossy();
        validate_path("source", &path)?;
        validate_file_extension("source", &path, &SUPPORTED_EXTENSIONS)
    }
}

impl ProjectSource for FileSource {
    fn load(&self) -> Result<Vec<ProjectRecord>> {
        self.validate()?;

        let content = std::fs::read_to_string(&self.path)?;
        let document = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ProjectsDocument::from_json_str(&content)?,
            _ => ProjectsDocument::from_toml_str(&content)?,
        };
        document.validate()?;

        tracing::debug!(
            "Parsed {} projects from {}",
            document.projects.len(),
            self.path.display()
        );
        Ok(document.projects)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
