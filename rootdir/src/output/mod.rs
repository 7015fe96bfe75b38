//! Output publishing for the resolved root directory.
//!
//! The root directory is published as a single named property. This module
//! provides the formats it can be rendered in (the bare value, a properties
//! line, JSON, or a shell export statement) and the sinks that receive it.

mod formatters;
mod shell;
mod sink;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use formatters::{ExportFormatter, JsonFormatter, PlainFormatter, PropertiesFormatter};
pub use shell::ShellType;
pub use sink::{FileSink, MemorySink, OutputSink, WriterSink};

/// Trait for formatting a published property.
pub trait OutputFormatter {
    /// Format `value`, published under the name `property`, into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., the property is not
    /// usable as an environment variable name).
    fn format(&self, property: &str, value: &str) -> Result<String>;
}

/// Available output formats.
///
/// Formats are written as `plain`, `properties`, `json`, `export` or
/// `export:<shell>`. A bare `export` uses the shell detected from the
/// environment.
///
/// # Examples
///
/// ```
/// use rootdir::output::{OutputFormat, ShellType};
///
/// assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
/// assert_eq!(
///     "export:fish".parse::<OutputFormat>().unwrap(),
///     OutputFormat::Export(ShellType::Fish)
/// );
/// assert_eq!(OutputFormat::default().to_string(), "plain");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// The value alone.
    #[default]
    Plain,
    /// A `name=value` properties line.
    Properties,
    /// A JSON object with a single member.
    Json,
    /// Shell-specific export statement.
    Export(ShellType),
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Plain => Box::new(PlainFormatter),
            Self::Properties => Box::new(PropertiesFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
        }
    }

    /// Format a single property with this format.
    ///
    /// # Errors
    ///
    /// Returns the formatter's error.
    pub fn format(&self, property: &str, value: &str) -> Result<String> {
        self.create_formatter().format(property, value)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Properties => f.write_str("properties"),
            Self::Json => f.write_str("json"),
            Self::Export(shell) => write!(f, "export:{shell}"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "plain" => Ok(Self::Plain),
            "properties" => Ok(Self::Properties),
            "json" => Ok(Self::Json),
            "export" => Ok(Self::Export(ShellType::detect())),
            _ => match lower.strip_prefix("export:") {
                Some(shell) => Ok(Self::Export(shell.parse()?)),
                None => Err(Error::Validation {
                    field: "output_format".to_string(),
                    message: format!(
                        "unknown output format '{s}': expected plain, properties, json, export or export:<shell>"
                    ),
                }),
            },
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}
