//! Output formatter implementations.

use std::collections::BTreeMap;

use crate::{Error, Result};

use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Converts a property name to an environment variable name.
///
/// - Converts to uppercase
/// - Replaces `.` and `-` with underscores
/// - Validates the result
fn property_to_env_var(property: &str) -> Result<String> {
    let var_name = property.to_uppercase().replace(['.', '-'], "_");

    if !is_valid_env_var_name(&var_name) {
        return Err(Error::Validation {
            field: "output_property".to_string(),
            message: format!(
                "invalid environment variable name '{var_name}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
            ),
        });
    }

    Ok(var_name)
}

/// Escape a key or value for a Java-style properties file.
///
/// Line terminators and other control whitespace become escape sequences
/// so the entry stays on one line. Spaces are escaped everywhere in a key
/// but only at the start of a value.
fn escape_property(raw: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for (i, c) in raw.chars().enumerate() {
        match c {
            '\\' | ':' | '=' | '#' | '!' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{c}' => escaped.push_str("\\f"),
            ' ' if is_key || i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formatter that emits the value alone.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, _property: &str, value: &str) -> Result<String> {
        Ok(value.to_string())
    }
}

/// Formatter for `name=value` properties lines.
pub struct PropertiesFormatter;

impl OutputFormatter for PropertiesFormatter {
    fn format(&self, property: &str, value: &str) -> Result<String> {
        Ok(format!(
            "{}={}",
            escape_property(property, true),
            escape_property(value, false)
        ))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, property: &str, value: &str) -> Result<String> {
        let map = BTreeMap::from([(property, value)]);

        serde_json::to_string(&map).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for the given shell.
    #[must_use]
    pub const fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, property: &str, value: &str) -> Result<String> {
        let var_name = property_to_env_var(property)?;
        Ok(self.shell.format_export(&var_name, value))
    }
}
