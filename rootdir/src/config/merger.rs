//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Every field is replaced wholesale by a higher-precedence source that sets
//! it; in particular, a list of project directories is never combined with
//! a lower layer's list.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rootdir::config::{Config, ConfigMerger};
///
/// let low = Config { output_property: Some("low".to_string()), ..Default::default() };
/// let high = Config { output_property: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_property, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Project directories: complete replacement
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.project_directories.is_some() {
            target
                .project_directories
                .clone_from(&source.project_directories);
        }

        if source.follow_symbolic_links.is_some() {
            target.follow_symbolic_links = source.follow_symbolic_links;
        }

        if source.skip.is_some() {
            target.skip = source.skip;
        }

        if source.output_property.is_some() {
            target.output_property.clone_from(&source.output_property);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/test/config{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config::default();
        let source = Config {
            skip: Some(true),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.skip, Some(true));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_project_directories_replaced() {
        let mut target = Config {
            project_directories: Some(vec![
                Some(PathBuf::from("/repo/a")),
                Some(PathBuf::from("/repo/b")),
            ]),
            ..Default::default()
        };
        let source = Config {
            project_directories: Some(vec![None, Some(PathBuf::from("/other"))]),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.project_directories,
            Some(vec![None, Some(PathBuf::from("/other"))])
        );
    }

    #[test]
    fn test_merge_empty_list_replaces() {
        let mut target = Config {
            project_directories: Some(vec![Some(PathBuf::from("/repo"))]),
            ..Default::default()
        };
        let source = Config {
            project_directories: Some(Vec::new()),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.project_directories, Some(Vec::new()));
    }

    #[test]
    fn test_merge_multiple_sources() {
        let sources = vec![
            make_source(
                1,
                Config {
                    follow_symbolic_links: Some(false),
                    output_property: Some("user".to_string()),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    output_property: Some("project".to_string()),
                    ..Default::default()
                },
            ),
            make_source(
                3,
                Config {
                    skip: Some(true),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.follow_symbolic_links, Some(false));
        assert_eq!(merged.output_property.as_deref(), Some("project"));
        assert_eq!(merged.skip, Some(true));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config {
            follow_symbolic_links: Some(false),
            output_property: Some("kept".to_string()),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.follow_symbolic_links, Some(false));
        assert_eq!(target.output_property.as_deref(), Some("kept"));
    }
}
