use scraper::{Html, Selector};

use crate::product::Price;

/// Raw price text, e.g. `$129.99`, from the offscreen span of the buy box total.
pub fn extract_amazon_price(document: &Html) -> Option<Price> {
    let container_selector = Selector::parse("#tp_price_block_total_price_ww").ok()?;
    let price_selector = Selector::parse("span.a-offscreen").ok()?;

    let container = document.select(&container_selector).next()?;
    let price_tag = container.select(&price_selector).next()?;
    Price::from_text(&price_tag.text().collect::<Vec<_>>().join(""))
}
