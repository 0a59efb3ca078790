use scraper::{Html, Selector};
use serde_json::Value;

use crate::product::{non_empty, Price, ProductRecord};
use crate::utilities::shorten_name::shorten_name;

/// Reads the first `application/ld+json` script of the page.
///
/// A list payload contributes its first element. `price` is only read from
/// `offers.price` when `offers` is an object. Missing or malformed data yields `None`.
pub fn extract_structured_data(document: &Html) -> Option<ProductRecord> {
    let selector = Selector::parse("script[type='application/ld+json']").ok()?;
    let script = document.select(&selector).next()?;
    let script_content = script.text().collect::<Vec<_>>().join("");

    let data: Value = serde_json::from_str(script_content.trim()).ok()?;
    let data = match data {
        Value::Array(items) => items.into_iter().next()?,
        other => other,
    };
    let data = data.as_object()?;

    let name = data
        .get("name")
        .and_then(Value::as_str)
        .map(shorten_name)
        .and_then(|name| non_empty(&name));

    let image = data.get("image").and_then(image_from_json);

    let price = match data.get("offers") {
        Some(Value::Object(offers)) => offers.get("price").and_then(Price::from_json),
        _ => None,
    };

    let record = ProductRecord { name, image, price };
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// `image` comes as a URL string, a list of them, or an `ImageObject` with `url`.
fn image_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(url) => non_empty(url),
        Value::Array(items) => items.iter().find_map(image_from_json),
        Value::Object(object) => object.get("url").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    }
}
