use once_cell::sync::Lazy;
use regex::Regex;

pub const BODY_OPEN: &str = "<body>";
pub const BODY_CLOSE: &str = "</body>";

/// Upper bound of replacements for every single substitution pass.
pub const MAX_REPLACEMENTS: usize = 10_000;

pub const DEFAULT_PRESERVE_TAGS: &[&str] = &[
    "italic",
    "bold",
    "sup",
    "sub",
    "underline",
    "title",
    "sec",
    "p",
    "list",
    "list-item",
    "named-content",
];

pub const DEFAULT_REMOVE_TAGS: &[&str] = &[
    "xref",
    "table-wrap",
    "fig",
    "label",
    "a",
    "inline-formula",
];

pub static ENTITY_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"&#x\S{5};"#).expect("ENTITY_REFERENCE regex"));
pub static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\n"#).expect("LINE_BREAK regex"));
pub static XML_DECLARED_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<\?xml[^>]*?encoding=["']([^"']+)["']"#).expect("XML_DECLARED_ENCODING regex")
});
pub static HEADER_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"charset=([^"';]+)"#).expect("HEADER_CHARSET regex"));

pub const EUROPE_PMC_REST: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest/";
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 1000;
pub const DEFAULT_PAGE_SIZE: u32 = 25;
