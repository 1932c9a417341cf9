//! Parsed service responses.
//!
//! # Design
//! Every web service endpoint answers with the same envelope: a root element
//! carrying `request`, `message` and an operation-specific payload. The
//! envelope's `message` is surfaced through `code()` / `text()`; everything
//! else is left as an `xmltree::Element` for the caller to walk.

use xmltree::{Element, ParseError};

/// A successfully parsed XML document returned by the service.
///
/// Values handed out by `Transport::fetch` always have `code() == "0"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    root: Element,
}

impl ServiceResponse {
    /// Parse raw body bytes. The `<?xml encoding=...?>` declaration decides
    /// how they are decoded; UTF-8 is assumed without one.
    pub fn parse(body: &[u8]) -> Result<Self, ParseError> {
        let root = Element::parse(body)?;
        Ok(Self { root })
    }

    /// The trimmed `message/code` value, or an empty string when absent.
    pub fn code(&self) -> String {
        self.text_at("message/code").unwrap_or_default()
    }

    /// The `message/text` value exactly as sent, or an empty string when
    /// absent.
    pub fn text(&self) -> String {
        self.find("message/text")
            .and_then(Element::get_text)
            .map(|text| text.into_owned())
            .unwrap_or_default()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Direct child of the root element with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.root.get_child(name)
    }

    /// Walk a slash-separated path of local names starting below the root,
    /// taking the first matching child at each step.
    ///
    /// `find("response/results/result/zpid")`
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(&self.root, |node, step| node.get_child(step))
    }

    /// Text content of the element at `path`, with surrounding whitespace
    /// trimmed. Use `find` and `Element::get_text` for the untrimmed value.
    pub fn text_at(&self, path: &str) -> Option<String> {
        self.find(path)
            .and_then(Element::get_text)
            .map(|text| text.trim().to_string())
    }

    pub fn into_element(self) -> Element {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_OK: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<SearchResults:searchresults xmlns:SearchResults="http://www.zillow.com/static/xsd/SearchResults.xsd">
  <request><address>2114 Bigelow Ave</address><citystatezip>Seattle, WA</citystatezip></request>
  <message><text>Request successfully processed</text><code>0</code></message>
  <response>
    <results>
      <result><zpid>48749425</zpid></result>
    </results>
  </response>
</SearchResults:searchresults>"#;

    #[test]
    fn parse_extracts_message_envelope() {
        let doc = ServiceResponse::parse(SEARCH_OK.as_bytes()).unwrap();
        assert_eq!(doc.code(), "0");
        assert_eq!(doc.text(), "Request successfully processed");
        assert_eq!(doc.root().name, "searchresults");
    }

    #[test]
    fn find_walks_nested_payload() {
        let doc = ServiceResponse::parse(SEARCH_OK.as_bytes()).unwrap();
        assert_eq!(doc.text_at("response/results/result/zpid").as_deref(), Some("48749425"));
        assert_eq!(doc.text_at("request/citystatezip").as_deref(), Some("Seattle, WA"));
        assert!(doc.find("response/missing").is_none());
        assert!(doc.child("request").is_some());
    }

    #[test]
    fn missing_message_yields_empty_code_and_text() {
        let doc = ServiceResponse::parse(b"<html><body>maintenance</body></html>").unwrap();
        assert_eq!(doc.code(), "");
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn empty_and_plain_text_bodies_do_not_parse() {
        assert!(ServiceResponse::parse(b"").is_err());
        assert!(ServiceResponse::parse(b"Internal Server Error").is_err());
    }

    #[test]
    fn declared_latin1_encoding_is_decoded() {
        let mut body = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
<demographics><message><text>Pe".to_vec();
        body.push(0xF1);
        body.extend_from_slice(b"asco</text><code>0</code></message></demographics>");

        let doc = ServiceResponse::parse(&body).unwrap();
        assert_eq!(doc.code(), "0");
        assert_eq!(doc.text(), "Pe\u{f1}asco");
    }

    #[test]
    fn message_text_is_not_trimmed() {
        let doc = ServiceResponse::parse(
            b"<r><message><text>  Error: no exact match  </text><code> 508 </code></message></r>",
        )
        .unwrap();
        assert_eq!(doc.text(), "  Error: no exact match  ");
        assert_eq!(doc.code(), "508");
        assert_eq!(doc.text_at("message/text").as_deref(), Some("Error: no exact match"));
    }
}
