use crate::config::{CliConfig, Command};
use crate::config::{file_source::FileSource, storage::LocalStorage};
use crate::core::builtin::BuiltinSource;
use crate::core::export::{self, ExportFormat};
use crate::core::registry::ProjectRegistry;
use crate::core::view;
use crate::domain::ports::ProjectSource;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_record, Validate};
use std::io::Write;
use std::path::Path;

/// Runs one CLI command, writing its user-facing output to `out`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    // 驗證配置
    config.validate()?;

    let loaded;
    let registry = match &config.source {
        Some(path) => {
            loaded = ProjectRegistry::from_source(&FileSource::new(path))?;
            &loaded
        }
        None => {
            tracing::debug!("Using {}", BuiltinSource.describe());
            ProjectRegistry::global()
        }
    };
    let projects = registry.get_all_projects();

    match &config.command {
        Command::List { starred, all } => {
            let selected: Vec<_> = if *all {
                projects.iter().collect()
            } else if *starred {
                view::starred(projects).collect()
            } else {
                view::displayable(projects).collect()
            };
            for record in selected {
                writeln!(out, "{}", view::summary_line(record))?;
            }
        }
        Command::Show { name } => {
            let record = view::find_by_name(projects, name)
                .ok_or_else(|| RegistryError::NotFound { name: name.clone() })?;
            writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
        }
        Command::Export { format, output } => {
            let format = ExportFormat::resolve(*format, output.as_deref())?;
            match output {
                Some(path) => {
                    let (storage, file_name) = storage_for(path);
                    export::export_to(&storage, &file_name, projects, format)?;
                    writeln!(out, "📁 Output saved to: {}", path.display())?;
                }
                None => write!(out, "{}", export::render(projects, format)?)?,
            }
        }
        Command::Check => {
            if config.source.is_none() {
                for (index, record) in projects.iter().enumerate() {
                    validate_record(index, record)?;
                }
            }
            writeln!(
                out,
                "✅ {} projects ({} displayable, {} starred)",
                registry.len(),
                view::displayable(projects).count(),
                view::starred(projects).count()
            )?;
        }
    }

    Ok(())
}

// 以輸出檔所在目錄作為儲存根目錄
fn storage_for(path: &Path) -> (LocalStorage, String) {
    let base = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    (LocalStorage::new(base), file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_for_splits_directory_and_file() {
        let (_, file_name) = storage_for(Path::new("site/data/projects.toml"));
        assert_eq!(file_name, "projects.toml");

        let (_, bare) = storage_for(Path::new("projects.json"));
        assert_eq!(bare, "projects.json");
    }
}
