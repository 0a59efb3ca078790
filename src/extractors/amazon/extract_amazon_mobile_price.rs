use scraper::{Html, Selector};

use crate::product::Price;

// Mobile pages move the buy box around; the first offscreen price in one of
// these containers is the current offer.
const MOBILE_PRICE_SELECTORS: [&str; 3] = [
    "#corePrice_feature_div span.a-offscreen",
    "#apex_offerDisplay_mobile span.a-offscreen",
    "span.a-price span.a-offscreen",
];

/// Raw price text from the mobile rendition of a product page.
pub fn extract_amazon_mobile_price(document: &Html) -> Option<Price> {
    MOBILE_PRICE_SELECTORS.iter().find_map(|selector| {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .find_map(|element| Price::from_text(&element.text().collect::<Vec<_>>().join("")))
    })
}
