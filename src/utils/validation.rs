use crate::domain::model::ProjectRecord;
use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts an empty link, a relative path, or an absolute http(s) URL.
pub fn validate_href(field_name: &str, href: &str) -> Result<()> {
    if href.is_empty() || href.starts_with('/') || href.starts_with("./") || href.starts_with("../")
    {
        return Ok(());
    }

    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RegistryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: href.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        // A bare relative path such as "blog/" has no scheme
        Err(url::ParseError::RelativeUrlWithoutBase) if !href.contains(char::is_whitespace) => {
            Ok(())
        }
        Err(e) => Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: href.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RegistryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_tags(tags: &[String]) -> std::result::Result<(), String> {
    match tags.iter().position(|tag| tag.trim().is_empty()) {
        Some(i) => Err(format!("tag {} is empty", i)),
        None => Ok(()),
    }
}

/// Checks one externally loaded record; `index` is its position in the document.
pub fn validate_record(index: usize, record: &ProjectRecord) -> Result<()> {
    let invalid = |message: String| RegistryError::ValidationError { index, message };

    validate_href("href", &record.href).map_err(|e| invalid(e.to_string()))?;
    validate_tags(&record.tags).map_err(invalid)?;

    if !record.name.is_empty()
        && record
            .imagetitle
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        return Err(invalid(format!(
            "imagetitle '{}' must not contain whitespace or path separators",
            record.imagetitle
        )));
    }

    Ok(())
}
