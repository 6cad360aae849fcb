//! Field-level checks shared by the entity modules. Every failure carries the
//! message shown to API clients.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::ValidateEmail;

use crate::errors::ModelError;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_URL: &str = "Enter a valid URL.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

pub(crate) fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

/// Non-blank text of at most `max` characters.
pub fn text(value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(BLANK.into()));
    }
    if value.chars().count() > max {
        return Err(ModelError::Validation(too_long(max)));
    }
    Ok(())
}

/// Non-blank text with no length bound.
pub fn not_blank(value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(BLANK.into()));
    }
    Ok(())
}

/// Absolute http(s)/ftp(s) URL with a host.
pub fn url(value: &str, max: usize) -> Result<(), ModelError> {
    text(value, max)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ModelError::Validation(INVALID_URL.into()));
    }
    let ok = match Url::parse(value) {
        Ok(u) => URL_SCHEMES.contains(&u.scheme()) && u.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    };
    if !ok {
        return Err(ModelError::Validation(INVALID_URL.into()));
    }
    Ok(())
}

pub fn email(value: &str, max: usize) -> Result<(), ModelError> {
    text(value, max)?;
    if !value.validate_email() {
        return Err(ModelError::Validation(INVALID_EMAIL.into()));
    }
    Ok(())
}

pub(crate) static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19[0-9][0-9]|20\d{2})-(0[0-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])$")
        .expect("birthday pattern compiles")
});
