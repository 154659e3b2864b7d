//! Plain text from Europe PMC full-text articles.
//!
//! The [`Sanitizer`] cuts the `<body>` out of a JATS document, strips the
//! configured tags and normalizes entity references and line breaks. The
//! [`EuropePmc`] client finds article identifiers and downloads the XML.

mod config;
mod constants;
mod error;
mod europepmc;
mod sanitizer;
mod util;

pub use config::{ConfigError, TagConfig};
pub use constants::{DEFAULT_PAGE_SIZE, DEFAULT_PRESERVE_TAGS, DEFAULT_REMOVE_TAGS};
pub use error::PmcTextError;
pub use europepmc::error::EuropePmcError;
pub use europepmc::EuropePmc;
pub use sanitizer::error::SanitizerError;
pub use sanitizer::{extract_body, sanitize, Sanitizer};

use reqwest::Client;

/// Search, download and sanitize in one place.
#[derive(Clone, Debug, Default)]
pub struct PmcText {
    sanitizer: Sanitizer,
    europe_pmc: EuropePmc,
}

impl PmcText {
    pub fn new(config: TagConfig) -> Result<Self, PmcTextError> {
        Ok(Self {
            sanitizer: Sanitizer::new(config)?,
            europe_pmc: EuropePmc::default(),
        })
    }

    pub fn from_parts(sanitizer: Sanitizer, europe_pmc: EuropePmc) -> Self {
        Self {
            sanitizer,
            europe_pmc,
        }
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    pub async fn search(
        &self,
        query: &str,
        page_size: u32,
        client: &Client,
    ) -> Result<Vec<String>, PmcTextError> {
        let ids = self.europe_pmc.search(query, page_size, client).await?;
        Ok(ids)
    }

    /// Download one article and return its body as plain text.
    pub async fn fetch_clean(&self, pmcid: &str, client: &Client) -> Result<String, PmcTextError> {
        log::info!("Fetching article: '{pmcid}'");
        let xml = self.europe_pmc.fetch_full_text(pmcid, client).await?;
        Ok(self.sanitizer.sanitize(&xml))
    }

    pub fn clean(&self, document: &str) -> String {
        self.sanitizer.sanitize(document)
    }
}
