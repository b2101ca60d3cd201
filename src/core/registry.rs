use crate::core::builtin;
use crate::domain::model::ProjectRecord;
use crate::domain::ports::ProjectSource;
use crate::utils::error::{RegistryError, Result};
use std::sync::LazyLock;

static PROJECTS: LazyLock<ProjectRegistry> = LazyLock::new(|| {
    tracing::debug!("Initializing built-in project registry");
    ProjectRegistry {
        projects: builtin::projects(),
    }
});

/// Ordered, read-only list of projects. Declaration order is display order.
///
/// The registry never filters, sorts or rewrites its records; see [`crate::core::view`]
/// for consumer-side selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: Vec<ProjectRecord>,
}

impl ProjectRegistry {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        if projects.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        Ok(Self { projects })
    }

    pub fn from_source<S: ProjectSource + ?Sized>(source: &S) -> Result<Self> {
        tracing::debug!("Loading projects from {}", source.describe());
        let projects = source.load()?;
        tracing::info!(
            "Loaded {} projects from {}",
            projects.len(),
            source.describe()
        );
        Self::new(projects)
    }

    /// The process-wide registry built from the built-in data on first access.
    pub fn global() -> &'static ProjectRegistry {
        &PROJECTS
    }

    pub fn get_all_projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProjectRegistry {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shorthand for `ProjectRegistry::global().get_all_projects()`.
pub fn get_all_projects() -> &'static [ProjectRecord] {
    ProjectRegistry::global().get_all_projects()
}
