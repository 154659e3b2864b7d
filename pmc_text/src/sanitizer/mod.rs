mod body;
pub mod error;
mod normalize;
mod strip;

#[cfg(test)]
mod tests;

use self::error::SanitizerError;
use self::strip::{PreservingPass, RemovingPass};
use crate::config::TagConfig;
use crate::constants::MAX_REPLACEMENTS;
use regex::Regex;
use std::collections::HashSet;

pub use self::body::extract_body;

/// Turns full-text article markup into plain text.
///
/// All patterns are compiled once in [`Sanitizer::new`]. A `Sanitizer` holds
/// no mutable state and can be shared between threads freely.
///
/// Stages, always in this order:
/// 1. cut out everything between `<body>` and `</body>`
/// 2. drop the markers of every preserved tag, keeping the content
/// 3. drop every removed tag together with its content
/// 4. replace `&#xHHHHH;` references and line breaks with spaces
///
/// Every match is replaced with a single space and whitespace is never
/// collapsed.
#[derive(Clone, Debug)]
pub struct Sanitizer {
    config: TagConfig,
    preserving: Vec<PreservingPass>,
    removing: Vec<RemovingPass>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(TagConfig::default()).expect("default tag config")
    }
}

impl Sanitizer {
    pub fn new(config: TagConfig) -> Result<Self, SanitizerError> {
        Self::validate(&config)?;

        let preserving = config
            .preserve
            .iter()
            .map(|tag| PreservingPass::new(tag))
            .collect::<Result<Vec<_>, _>>()?;
        let removing = config
            .remove
            .iter()
            .map(|tag| RemovingPass::new(tag))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            preserving,
            removing,
        })
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Plain text of the document body, or an empty string if the document
    /// has no `<body>`.
    pub fn sanitize(&self, document: &str) -> String {
        match extract_body(document) {
            Some(body) => self.strip_markup(body),
            None => {
                log::warn!("Can't find the body, returning nothing");
                String::new()
            }
        }
    }

    pub fn sanitize_bytes(&self, document: &[u8]) -> Result<String, SanitizerError> {
        let document = std::str::from_utf8(document).map_err(|error| {
            log::error!("Refusing to sanitize non-text input: {error}");
            error
        })?;
        Ok(self.sanitize(document))
    }

    /// Stages 2 to 4 on text that is already cut down to the body.
    pub fn strip_markup(&self, body: &str) -> String {
        let mut text = body.to_owned();

        for pass in &self.preserving {
            text = pass.apply(text);
        }

        for pass in &self.removing {
            text = pass.apply(text);
        }

        normalize::normalize(text)
    }

    fn validate(config: &TagConfig) -> Result<(), SanitizerError> {
        for tag in config.preserve.iter().chain(config.remove.iter()) {
            let invalid = tag.is_empty()
                || tag
                    .chars()
                    .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/'));
            if invalid {
                log::error!("Invalid tag name in config: '{tag}'");
                return Err(SanitizerError::InvalidTagName(tag.clone()));
            }
        }

        let preserved: HashSet<&str> = config.preserve.iter().map(String::as_str).collect();
        if let Some(tag) = config
            .remove
            .iter()
            .find(|tag| preserved.contains(tag.as_str()))
        {
            return Err(SanitizerError::OverlappingTag(tag.clone()));
        }

        Ok(())
    }
}

/// One-shot form of [`Sanitizer::sanitize`] with an explicit tag config.
pub fn sanitize(document: &str, config: &TagConfig) -> Result<String, SanitizerError> {
    let sanitizer = Sanitizer::new(config.clone())?;
    Ok(sanitizer.sanitize(document))
}

/// Replace every match of `pattern` with a single space, stopping after
/// `MAX_REPLACEMENTS` replacements.
fn replace_capped(pattern: &Regex, text: String) -> String {
    if !pattern.is_match(&text) {
        return text;
    }

    let mut replaced = String::with_capacity(text.len());
    let mut last = 0;
    for (count, m) in pattern.find_iter(&text).enumerate() {
        if count == MAX_REPLACEMENTS {
            log::warn!(
                "Reached replacement cap of {MAX_REPLACEMENTS} for pattern '{}'",
                pattern.as_str()
            );
            break;
        }
        replaced.push_str(&text[last..m.start()]);
        replaced.push(' ');
        last = m.end();
    }
    replaced.push_str(&text[last..]);
    replaced
}
