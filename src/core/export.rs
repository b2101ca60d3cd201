use crate::domain::model::{ProjectRecord, ProjectsDocument};
use crate::domain::ports::Storage;
use crate::utils::error::{RegistryError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
        }
    }

    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(ExportFormat::Json),
            Some("toml") => Some(ExportFormat::Toml),
            _ => None,
        }
    }

    /// Explicit format first, then the output file's extension, then JSON.
    /// An explicit format must agree with a `.json` or `.toml` output file.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Result<Self> {
        let implied = output.and_then(Self::from_extension);
        match (explicit, implied) {
            (Some(format), Some(from_path)) if format != from_path => {
                Err(RegistryError::InvalidConfigValueError {
                    field: "--format".to_string(),
                    value: format.extension().to_string(),
                    reason: format!(
                        "output file extension implies {}",
                        from_path.extension()
                    ),
                })
            }
            (Some(format), _) => Ok(format),
            (None, Some(from_path)) => Ok(from_path),
            (None, None) => Ok(ExportFormat::default()),
        }
    }
}

/// Serializes the projects as a `ProjectsDocument` in the given format.
pub fn render(projects: &[ProjectRecord], format: ExportFormat) -> Result<String> {
    let document = ProjectsDocument {
        projects: projects.to_vec(),
    };

    let mut output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&document)?,
        ExportFormat::Toml => toml::to_string(&document)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn export_to<S: Storage>(
    storage: &S,
    path: &str,
    projects: &[ProjectRecord],
    format: ExportFormat,
) -> Result<()> {
    let output = render(projects, format)?;
    storage.write_file(path, output.as_bytes())?;
    tracing::info!(
        "Exported {} projects as {} to {}",
        projects.len(),
        format.extension(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builtin;

    #[test]
    fn test_json_has_top_level_projects_array() {
        let output = render(&builtin::projects(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 6);
        assert_eq!(projects[4]["href"], "http://przepis-na-lo.pl/");
        assert_eq!(projects[1]["starred"], true);
    }

    #[test]
    fn test_output_ends_with_newline() {
        for format in [ExportFormat::Json, ExportFormat::Toml] {
            let output = render(&builtin::projects(), format).unwrap();
            assert!(output.ends_with('\n'), "{format:?}");
        }
    }

    #[test]
    fn test_format_follows_output_extension() {
        let toml_path = Path::new("out/p.toml");
        assert_eq!(
            ExportFormat::resolve(None, Some(toml_path)).unwrap(),
            ExportFormat::Toml
        );
        assert_eq!(
            ExportFormat::resolve(None, Some(Path::new("p.json"))).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::resolve(None, Some(Path::new("p.txt"))).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(ExportFormat::resolve(None, None).unwrap(), ExportFormat::Json);
        assert_eq!(
            ExportFormat::resolve(Some(ExportFormat::Toml), None).unwrap(),
            ExportFormat::Toml
        );
    }

    #[test]
    fn test_format_contradicting_extension_rejected() {
        let err = ExportFormat::resolve(Some(ExportFormat::Json), Some(Path::new("p.toml")))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidConfigValueError { ref field, .. } if field == "--format"
        ));
    }

    #[test]
    fn test_toml_uses_array_of_tables() {
        let output = render(&builtin::projects(), ExportFormat::Toml).unwrap();
        assert_eq!(output.matches("[[projects]]").count(), 6);
        assert!(output.contains("imagetitle = \"przepis-na-lo\""));
    }
}
