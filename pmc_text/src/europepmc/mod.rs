pub mod error;


use self::error::EuropePmcError;
use crate::constants::{EUROPE_PMC_REST, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::util::Util;
use libxml::parser::Parser;
use libxml::xpath::Context;
use reqwest::{Client, Response};
use std::str::from_utf8;
use url::Url;

/// Client for the Europe PMC REST service.
///
/// One request per call. Nothing is retried or cached, errors go straight
/// back to the caller.
#[derive(Clone, Debug)]
pub struct EuropePmc {
    base_url: Url,
}

impl Default for EuropePmc {
    fn default() -> Self {
        Self {
            base_url: Url::parse(EUROPE_PMC_REST).expect("failed to parse static url"),
        }
    }
}

impl EuropePmc {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// PMC identifiers of all hits on the first page of `query`, in the order
    /// the service returns them.
    pub async fn search(
        &self,
        query: &str,
        page_size: u32,
        client: &Client,
    ) -> Result<Vec<String>, EuropePmcError> {
        let url = self.search_url(query, page_size)?;
        log::debug!("Searching Europe PMC: '{url}'");

        let response = Self::get_response(&url, client).await?;
        let xml = Self::get_body(response).await?;
        Self::parse_search_response(&xml)
    }

    /// Raw full-text XML of one article, e.g. `PMC6480907`.
    pub async fn fetch_full_text(
        &self,
        pmcid: &str,
        client: &Client,
    ) -> Result<String, EuropePmcError> {
        let url = self.full_text_url(pmcid)?;
        log::debug!("Downloading full text: '{url}'");

        let response = Self::get_response(&url, client).await?;
        Self::get_body(response).await
    }

    pub fn check_page_size(page_size: u32) -> Result<(), EuropePmcError> {
        if (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            Ok(())
        } else {
            log::error!("Page size {page_size} rejected");
            Err(EuropePmcError::PageSize(page_size))
        }
    }

    pub fn search_url(&self, query: &str, page_size: u32) -> Result<Url, EuropePmcError> {
        Self::check_page_size(page_size)?;

        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("pageSize", &page_size.to_string());
        Ok(url)
    }

    pub fn full_text_url(&self, pmcid: &str) -> Result<Url, EuropePmcError> {
        let url = self.base_url.join(&format!("{pmcid}/fullTextXML"))?;
        Ok(url)
    }

    /// Text of every `pmcid` element. Hits without one are skipped,
    /// duplicates are kept.
    pub fn parse_search_response(xml: &str) -> Result<Vec<String>, EuropePmcError> {
        let document = Parser::default().parse_string(xml).map_err(|err| {
            log::error!("Parsing search response failed {:?}", err);
            EuropePmcError::Xml
        })?;
        let xpath_ctx = Context::new(&document).map_err(|()| {
            log::error!("Creating xpath context failed for search response");
            EuropePmcError::Xml
        })?;
        let res = xpath_ctx.evaluate("//pmcid").map_err(|()| {
            log::error!("Evaluation of xpath '//pmcid' failed");
            EuropePmcError::Xml
        })?;

        let ids = res
            .get_nodes_as_vec()
            .iter()
            .map(|node| node.get_content().trim().to_string())
            .collect::<Vec<_>>();
        log::debug!("Search returned {} identifiers", ids.len());
        Ok(ids)
    }

    async fn get_response(url: &Url, client: &Client) -> Result<Response, EuropePmcError> {
        let response = client.get(url.as_str()).send().await.map_err(|err| {
            log::error!("Request failed: GET '{}' - '{}'", url.as_str(), err);
            err
        })?;
        Ok(response)
    }

    async fn get_body(response: Response) -> Result<String, EuropePmcError> {
        let status = response.status();
        if !status.is_success() {
            log::error!("Europe PMC responded with '{status}' for '{}'", response.url());
            return Err(EuropePmcError::Status(status.as_u16()));
        }

        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        match from_utf8(&bytes) {
            Ok(utf8_str) => {
                log::debug!("Valid utf-8 string");
                Ok(utf8_str.into())
            }
            Err(error) => {
                log::debug!("Invalid utf-8 string");
                let lossy_string = String::from_utf8_lossy(&bytes);

                if let Some(encoding) = Util::get_encoding_from_xml(&lossy_string) {
                    log::debug!("Encoding extracted from XML declaration: '{}'", encoding);
                    if let Some(decoded) = Util::decode(&bytes, encoding) {
                        return Ok(decoded);
                    }
                }

                if let Some(encoding) = Util::get_encoding_from_http_header(&headers) {
                    log::debug!("Encoding extracted from headers: '{}'", encoding);
                    if let Some(decoded) = Util::decode(&bytes, encoding) {
                        return Ok(decoded);
                    }
                }

                Err(EuropePmcError::Utf8(error))
            }
        }
    }
}
