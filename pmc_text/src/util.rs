use crate::constants::{HEADER_CHARSET, XML_DECLARED_ENCODING};
use encoding_rs::Encoding;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

pub struct Util;

impl Util {
    pub fn extract_value<'a>(identifier: &str, line: &'a str) -> &'a str {
        let value = &line[identifier.len()..];
        let value = value.trim();
        match value.find('#') {
            Some(pos) => value[..pos].trim(),
            None => value,
        }
    }

    pub fn split_values(values: &str) -> Vec<&str> {
        values.split('|').map(|s| s.trim()).collect()
    }

    pub fn get_encoding_from_xml(xml: &str) -> Option<&str> {
        XML_DECLARED_ENCODING
            .captures(xml)
            .and_then(|captures| captures.get(1))
            .map(|regex_match| regex_match.as_str())
    }

    pub fn get_encoding_from_http_header(headers: &HeaderMap) -> Option<&str> {
        headers
            .get(CONTENT_TYPE)
            .and_then(|header| header.to_str().ok())
            .and_then(|content_type| HEADER_CHARSET.captures(content_type))
            .and_then(|captures| captures.get(1))
            .map(|regex_match| regex_match.as_str().trim())
    }

    pub fn decode(bytes: &[u8], encoding: &str) -> Option<String> {
        if let Some(encoding) = Encoding::for_label(encoding.as_bytes()) {
            let (decoded, _, invalid_chars) = encoding.decode(bytes);

            if !invalid_chars {
                return Some(decoded.into_owned());
            }
        }
        log::warn!("Could not decode document. Encoding: '{}'", encoding);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Util;
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    #[test]
    fn extract_value() {
        assert_eq!(Util::extract_value("remove:", "remove: xref | fig"), "xref | fig");
        assert_eq!(Util::extract_value("remove:", "remove: xref # note"), "xref");
    }

    #[test]
    fn xml_declared_encoding() {
        let xml = r#"<?xml version="1.0" encoding="ISO-8859-1"?><article/>"#;
        assert_eq!(Util::get_encoding_from_xml(xml), Some("ISO-8859-1"));
        assert_eq!(Util::get_encoding_from_xml("<article/>"), None);
    }

    #[test]
    fn header_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/xml; charset=windows-1252"),
        );
        assert_eq!(Util::get_encoding_from_http_header(&headers), Some("windows-1252"));
    }

    #[test]
    fn decode_latin1() {
        let bytes = b"Sch\xf6n";
        assert_eq!(Util::decode(bytes, "ISO-8859-1").as_deref(), Some("Schön"));
    }
}
