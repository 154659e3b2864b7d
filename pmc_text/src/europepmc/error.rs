use thiserror::Error;

#[derive(Error, Debug)]
pub enum EuropePmcError {
    #[error("Page size {0} is outside of 1..=1000")]
    PageSize(u32),
    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Http status {0}")]
    Status(u16),
    #[error("Invalid UTF8 Text")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("libXml Error")]
    Xml,
    #[error("Url Error")]
    Url(#[from] url::ParseError),
}
