//! Shell detection and export formatting.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    #[default]
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Used when export output is requested without naming a shell.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(|name| env::var_os(name))
    }

    /// Detect the shell using `lookup` in place of the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::output::ShellType;
    /// use std::ffi::OsString;
    ///
    /// let shell = ShellType::detect_with(|name| {
    ///     (name == "SHELL").then(|| OsString::from("/usr/bin/fish"))
    /// });
    /// assert_eq!(shell, ShellType::Fish);
    /// ```
    #[must_use]
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if lookup("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if lookup("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if lookup("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        let shell_path = lookup("SHELL").map(|s| s.to_string_lossy().into_owned());
        match shell_path {
            Some(path) if path.contains("zsh") => Self::Zsh,
            Some(path) if path.contains("fish") => Self::Fish,
            Some(path) if path.contains("pwsh") || path.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// The value is quoted when it contains anything beyond a conservative
    /// set of path characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("ROOTDIR", "/repo"), "export ROOTDIR=/repo");
    /// assert_eq!(ShellType::Bash.format_export("ROOTDIR", "/my repo"), "export ROOTDIR='/my repo'");
    /// assert_eq!(ShellType::Fish.format_export("ROOTDIR", "/repo"), "set -gx ROOTDIR /repo");
    /// assert_eq!(ShellType::PowerShell.format_export("ROOTDIR", "C:\\repo"), "$env:ROOTDIR='C:\\repo'");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", posix_quote(value)),
            Self::Fish => format!("set -gx {var} {}", fish_quote(value)),
            Self::PowerShell => format!("$env:{var}={}", powershell_quote(value)),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::PowerShell => "powershell",
        };
        f.write_str(name)
    }
}

impl FromStr for ShellType {
    type Err = Error;

    /// Parse a shell name (case-insensitive): `bash`, `sh`, `zsh`, `fish`,
    /// `powershell`, `pwsh` or `ps`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }
}

fn is_plain(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '@'))
}

fn posix_quote(value: &str) -> String {
    if is_plain(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

fn fish_quote(value: &str) -> String {
    if is_plain(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
    }
}

fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
