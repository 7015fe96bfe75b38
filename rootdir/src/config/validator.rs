//! Configuration validation.
//!
//! This module validates configuration values after they have been parsed,
//! before they are turned into pipeline options.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest accepted output property name.
pub const MAX_PROPERTY_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use rootdir::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref property) = config.output_property {
            Self::validate_property_name("output_property", property)?;
        }

        if let Some(ref directories) = config.project_directories {
            for (i, directory) in directories.iter().enumerate() {
                if directory.as_ref().is_some_and(|d| d.as_os_str().is_empty()) {
                    return Err(Error::Validation {
                        field: format!("project_directories[{i}]"),
                        message: "Cannot be an empty path; use null for an absent directory"
                            .into(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate the name the root directory is published under.
    ///
    /// Checks that the name is non-empty, contains no whitespace, `=` or
    /// null bytes, and is not longer than 255 characters.
    fn validate_property_name(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if value.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain whitespace".into(),
            });
        }

        if value.contains('=') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain '='".into(),
            });
        }

        if value.chars().count() > MAX_PROPERTY_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_PROPERTY_LEN} characters"),
            });
        }

        Ok(())
    }
}
