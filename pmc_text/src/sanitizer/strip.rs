use super::error::SanitizerError;
use super::replace_capped;
use regex::Regex;

/// Drops the markers of a tag and keeps whatever they enclose.
///
/// `<name` matches up to the next `>`, attributes or not. The match is a
/// plain prefix, so `<p` hits `<pre>` as well, and a `>` inside an
/// attribute value ends the marker early.
#[derive(Clone, Debug)]
pub struct PreservingPass {
    opening: Regex,
    closing: Regex,
}

impl PreservingPass {
    pub fn new(tag: &str) -> Result<Self, SanitizerError> {
        let escaped = regex::escape(tag);
        Ok(Self {
            opening: Regex::new(&format!(r#"<{escaped}[\s\S]*?>"#))?,
            closing: Regex::new(&format!(r#"</{escaped}>"#))?,
        })
    }

    pub fn apply(&self, text: String) -> String {
        let text = replace_capped(&self.opening, text);
        replace_capped(&self.closing, text)
    }
}

/// Drops a tag together with everything up to the nearest following
/// closing marker of the same name.
///
/// Nesting is not tracked: `<fig><fig>a</fig>b</fig>` leaves `b</fig>`.
#[derive(Clone, Debug)]
pub struct RemovingPass {
    span: Regex,
}

impl RemovingPass {
    pub fn new(tag: &str) -> Result<Self, SanitizerError> {
        let escaped = regex::escape(tag);
        Ok(Self {
            span: Regex::new(&format!(r#"<{escaped}[\s\S]*?>[\s\S]*?</{escaped}>"#))?,
        })
    }

    pub fn apply(&self, text: String) -> String {
        replace_capped(&self.span, text)
    }
}
