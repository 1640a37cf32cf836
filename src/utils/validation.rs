use validator::Validate;

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate().map_err(Error::from)
}

/// Trimmed `value`, or [`Error::BadRequest`] with `message` when it is blank.
pub fn require<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::BadRequest(message.to_string()))
    } else {
        Ok(trimmed)
    }
}

/// Numeric identifier typed into a form field.
pub fn require_id(value: &str, message: &str) -> Result<i64> {
    let raw = require(value, message)?;
    raw.parse()
        .map_err(|_| Error::BadRequest(format!("`{}` is not a valid identifier", raw)))
}

/// `None` for blank optional form fields.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
