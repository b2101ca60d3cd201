use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse {format} document: {message}")]
    ParseError { format: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Project #{index} is invalid: {message}")]
    ValidationError { index: usize, message: String },

    #[error("Project registry is empty")]
    EmptyRegistry,

    #[error("No project named '{name}'")]
    NotFound { name: String },
}

impl RegistryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Could not access a file: {}", e),
            RegistryError::SerializationError(_) | RegistryError::ParseError { .. } => {
                format!("The project data could not be read: {}", self)
            }
            RegistryError::TomlSerializeError(_) => {
                format!("The project data could not be written: {}", self)
            }
            RegistryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is not usable: {}", field, reason)
            }
            RegistryError::ValidationError { index, message } => {
                format!("Project at position {} is malformed: {}", index, message)
            }
            RegistryError::EmptyRegistry => "The project list contains no entries".to_string(),
            RegistryError::NotFound { name } => format!("There is no project called '{}'", name),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::IoError(_) => "Check that the path exists and is readable",
            RegistryError::SerializationError(_) | RegistryError::ParseError { .. } => {
                "Every project needs name, href, imagetitle, tags, description and starred"
            }
            RegistryError::TomlSerializeError(_) => "Try exporting as JSON instead",
            RegistryError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted values"
            }
            RegistryError::ValidationError { .. } => {
                "Fix the reported field in the source document and run `check` again"
            }
            RegistryError::EmptyRegistry => {
                "Add at least one project (the first entry may be a blank template)"
            }
            RegistryError::NotFound { .. } => "Run `list --all` to see the available names",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RegistryError::NotFound { .. } => 1,
            RegistryError::InvalidConfigValueError { .. } => 2,
            RegistryError::SerializationError(_)
            | RegistryError::TomlSerializeError(_)
            | RegistryError::ParseError { .. }
            | RegistryError::ValidationError { .. }
            | RegistryError::EmptyRegistry => 3,
            RegistryError::IoError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = RegistryError::NotFound {
            name: "x".to_string(),
        };
        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(RegistryError::EmptyRegistry.exit_code(), 3);
    }

    #[test]
    fn test_validation_message_mentions_index() {
        let err = RegistryError::ValidationError {
            index: 4,
            message: "tag 1 is empty".to_string(),
        };
        assert_eq!(err.to_string(), "Project #4 is invalid: tag 1 is empty");
        assert!(err.user_friendly_message().contains("position 4"));
    }
}
