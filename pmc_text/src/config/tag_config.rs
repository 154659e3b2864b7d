use super::error::ConfigError;
use crate::constants::{DEFAULT_PRESERVE_TAGS, DEFAULT_REMOVE_TAGS};
use crate::util::Util;
use std::fs;
use std::path::Path;

/// Which tags lose only their markers (`preserve`) and which lose their
/// markers together with everything they enclose (`remove`).
///
/// Both lists are processed in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagConfig {
    pub preserve: Vec<String>,
    pub remove: Vec<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            preserve: DEFAULT_PRESERVE_TAGS.iter().map(|t| t.to_string()).collect(),
            remove: DEFAULT_REMOVE_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TagConfig {
    pub fn new<P, R>(preserve: P, remove: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            preserve: preserve.into_iter().map(Into::into).collect(),
            remove: remove.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse_path(config_path: &Path) -> Result<TagConfig, ConfigError> {
        let data = fs::read_to_string(config_path)?;
        log::debug!("Parsing tag config '{}'", config_path.display());
        Ok(Self::parse_str(&data))
    }

    /// Lists named in `data` replace the matching default list, lists it
    /// doesn't mention keep their defaults.
    pub fn parse_str(data: &str) -> TagConfig {
        let mut preserve_tags: Option<Vec<String>> = None;
        let mut remove_tags: Option<Vec<String>> = None;

        let preserve = "preserve:";
        let remove = "remove:";

        for line in data.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            extract_vec_multi!(line, preserve, preserve_tags);
            extract_vec_multi!(line, remove, remove_tags);

            log::debug!("Ignoring unknown tag config line '{line}'");
        }

        let defaults = TagConfig::default();
        TagConfig {
            preserve: preserve_tags.unwrap_or(defaults.preserve),
            remove: remove_tags.unwrap_or(defaults.remove),
        }
    }
}
