//! Structural checks applied by configuration setters
//!
//! Absent and empty values always pass. Everything else is limited to
//! [`MAX_LENGTH`] characters and, for names, to a restricted charset.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{Result, TaroError};

/// Maximum length of a checked property value
pub const MAX_LENGTH: usize = 200;

/// Maximum length of a checked file path
pub const MAX_PATH_LENGTH: usize = 200;

/// Names: digits, letters, '-', '_' and '.'
static NAME_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[\-._0-9a-zA-Z]+$").expect("Invalid regex pattern"));

/// Parameter keys additionally allow '*' and ','
static KEY_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[*,\-._0-9a-zA-Z]+$").expect("Invalid regex pattern"));

/// Field-level validation capability used by configuration setters.
///
/// Every check is a pure function of its arguments. Implementations can be
/// swapped to relax or tighten the rules without touching the setters.
pub trait ConfigValidator {
    /// Validate a name-like value (protocol, username, transporter, ...)
    fn check_name(&self, key: &str, value: Option<&str>) -> Result<()>;

    /// Validate a free-form value against the length limit only
    fn check_length(&self, key: &str, value: Option<&str>) -> Result<()>;

    /// Validate a filesystem path against the path length limit
    fn check_path_length(&self, key: &str, value: Option<&str>) -> Result<()>;

    /// Validate every key of an extension parameter map
    fn check_parameter_names(&self, parameters: Option<&HashMap<String, String>>) -> Result<()>;
}

/// The stock validation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultValidator;

impl ConfigValidator for DefaultValidator {
    fn check_name(&self, key: &str, value: Option<&str>) -> Result<()> {
        check_property(key, value, MAX_LENGTH, Some(&*NAME_PATTERN))
    }

    fn check_length(&self, key: &str, value: Option<&str>) -> Result<()> {
        check_property(key, value, MAX_LENGTH, None)
    }

    fn check_path_length(&self, key: &str, value: Option<&str>) -> Result<()> {
        check_property(key, value, MAX_PATH_LENGTH, None)
    }

    fn check_parameter_names(&self, parameters: Option<&HashMap<String, String>>) -> Result<()> {
        let Some(parameters) = parameters else {
            return Ok(());
        };
        for key in parameters.keys() {
            check_property(key, Some(key), MAX_LENGTH, Some(&*KEY_PATTERN))?;
        }
        Ok(())
    }
}

fn check_property(
    key: &str,
    value: Option<&str>,
    max_length: usize,
    pattern: Option<&regex::Regex>,
) -> Result<()> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    if value.chars().count() > max_length {
        return Err(TaroError::validation(
            key,
            value,
            format!("length too long, limit {}", max_length),
        ));
    }
    if let Some(pattern) = pattern
        && !pattern.is_match(value)
    {
        return Err(TaroError::validation(
            key,
            value,
            format!("contains illegal character, must match {}", pattern.as_str()),
        ));
    }
    Ok(())
}
