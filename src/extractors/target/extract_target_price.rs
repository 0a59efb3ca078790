use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::product::Price;

// Target ships its product state as JSON inside a JS string, so the quotes
// around keys are usually escaped and the number may itself be quoted.
static CURRENT_RETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\\*"price\\*":\s*\{\s*\\*"current_retail\\*":\s*\\*"?(\d+(?:\.\d+)?)"#).unwrap()
});

/// Scans inline scripts for `"price":{"current_retail":<number>}` and returns
/// the first match. Scanning stops at the first script that yields a price.
pub fn extract_target_price(document: &Html) -> Option<Price> {
    let selector = Selector::parse("script").ok()?;

    document.select(&selector).find_map(|element| {
        let script_text = element.text().collect::<Vec<_>>().join("");
        extract_current_retail(&script_text)
    })
}

fn extract_current_retail(script_text: &str) -> Option<Price> {
    CURRENT_RETAIL_RE
        .captures(script_text)
        .and_then(|caps| caps.get(1))
        .and_then(|amount| amount.as_str().parse::<f64>().ok())
        .map(Price::Amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_escaped_price_among_scripts() {
        let document = Html::parse_document(
            r#"<html><head>
               <script>window.analytics = {"page":"pdp"};</script>
               <script>window.__TGT_DATA__ = JSON.parse("{\"product\":{\"price\":{\"current_retail\":19.99,\"reg_retail\":24.99}}}");</script>
               <script>window.__LATER__ = JSON.parse("{\"price\":{\"current_retail\":5.00}}");</script>
               </head></html>"#,
        );
        assert_eq!(extract_target_price(&document), Some(Price::Amount(19.99)));
    }

    #[test]
    fn accepts_quoted_and_plain_numbers() {
        assert_eq!(
            extract_current_retail(r#"{\"price\":{\"current_retail\":\"7.5\"}}"#),
            Some(Price::Amount(7.5))
        );
        assert_eq!(
            extract_current_retail(r#"{"price":{"current_retail":30}}"#),
            Some(Price::Amount(30.0))
        );
    }

    #[test]
    fn no_match_leaves_price_unset() {
        let document = Html::parse_document(
            r#"<script>var price = {"reg_retail": 10};</script><script></script>"#,
        );
        assert_eq!(extract_target_price(&document), None);
    }
}
