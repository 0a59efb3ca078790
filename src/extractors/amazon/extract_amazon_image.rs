use std::sync::LazyLock;

use htmlentity::entity::{decode, ICodedDataTrait};
use regex::Regex;
use scraper::{Html, Selector};

static MEDIA_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(https://m\.media-amazon\.com[^"]+)""#).unwrap());

/// First media-host URL found in `#landingImage`'s `data-a-dynamic-image` attribute.
pub fn extract_amazon_image(document: &Html) -> Option<String> {
    let selector = Selector::parse("#landingImage").ok()?;
    let image_data = document
        .select(&selector)
        .next()?
        .value()
        .attr("data-a-dynamic-image")?;

    extract_image_from_dynamic_image_attr(image_data)
}

/// The attribute is a JSON-like map of image URL to `[width, height]`, and is
/// sometimes still HTML-encoded (`&quot;`) when it reaches us.
fn extract_image_from_dynamic_image_attr(attr_value: &str) -> Option<String> {
    if attr_value.is_empty() {
        return None;
    }

    let decoded = decode(attr_value.as_bytes()).to_string().ok()?;
    MEDIA_URL_RE
        .captures(&decoded)
        .and_then(|caps| caps.get(1))
        .map(|url| url.as_str().to_string())
}
