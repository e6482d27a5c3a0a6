use email_address::EmailAddress;

use crate::document::application::domain::record::ValidationError;

pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(())
}

pub fn optional_url(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(url) if !(url.starts_with("https://") || url.starts_with("http://")) => Err(
            ValidationError::new(field, "must be an http(s) URL"),
        ),
        _ => Ok(()),
    }
}

pub fn optional_email(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(email) if !EmailAddress::is_valid(email) => {
            Err(ValidationError::new(field, "must be a valid email address"))
        }
        _ => Ok(()),
    }
}

/// Trims in place; blank strings become `None`.
pub fn trim_optional(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
}
