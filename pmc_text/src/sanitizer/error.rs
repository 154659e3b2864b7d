use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanitizerError {
    #[error("Document is not valid UTF-8 text")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("Invalid tag name '{0}'")]
    InvalidTagName(String),
    #[error("Tag '{0}' is listed as both preserved and removed")]
    OverlappingTag(String),
    #[error("Regex Error")]
    Regex(#[from] regex::Error),
}
