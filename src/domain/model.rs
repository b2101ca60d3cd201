use serde::{Deserialize, Serialize};

/// One showcased project.
///
/// Every field is required when deserializing; an empty string, an empty tag list
/// or `false` are valid values but an absent field is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectRecord {
    pub name: String,
    /// Absolute URL or site-relative path; may be empty.
    pub href: String,
    /// Key used by the renderer to locate the project's image asset.
    pub imagetitle: String,
    /// Display order, never sorted.
    pub tags: Vec<String>,
    /// Pre-formatted text that may contain inline HTML; passed through untouched.
    pub description: String,
    pub starred: bool,
}

impl ProjectRecord {
    /// The blank placeholder entry that heads the list by convention.
    pub fn is_template(&self) -> bool {
        self.name.is_empty()
    }
}

/// Interchange shape for data files: a top-level `projects` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsDocument {
    pub projects: Vec<ProjectRecord>,
}
