use scraper::{Html, Selector};

use crate::product::{non_empty, Price, ProductRecord};
use crate::utilities::shorten_name::shorten_name;

/// Heuristic name and image for pages without usable structured data.
///
/// The name comes from the first `<h1>`, else `<title>`, cut at the first comma.
/// The image comes from the `og:image` meta tag.
pub fn extract_generic(document: &Html) -> ProductRecord {
    ProductRecord {
        name: extract_heading_name(document),
        image: extract_og_image(document),
        price: None,
    }
}

fn extract_heading_name(document: &Html) -> Option<String> {
    ["h1", "title"].iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        let element = document.select(&selector).next()?;
        let text = element.text().collect::<Vec<_>>().join("");
        non_empty(&shorten_name(text.trim()))
    })
}

fn extract_og_image(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta[property='og:image']").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .and_then(non_empty)
}

/// Last-resort price for stores without dedicated handling: the text of the
/// first element whose class list contains `price` or whose id is `price`.
pub fn extract_generic_price(document: &Html) -> Option<Price> {
    let selector = Selector::parse(".price, #price").ok()?;
    let element = document.select(&selector).next()?;
    Price::from_text(&element.text().collect::<Vec<_>>().join(""))
}
