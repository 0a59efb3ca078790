use scraper::{Html, Selector};

use crate::product::non_empty;

/// Text of the `#productTitle` element, trimmed.
pub fn extract_amazon_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("#productTitle").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| non_empty(&element.text().collect::<Vec<_>>().join("")))
}
