use scraper::{Html, Selector};
use serde_json::Value;

use crate::product::{non_empty, Price, ProductRecord};
use crate::utilities::shorten_name::shorten_name;

/// Reads the product out of Walmart's `__NEXT_DATA__` state blob.
///
/// A page without that script is treated as a bot-block page and contributes
/// nothing, as does any unexpected shape of the embedded JSON.
pub fn extract_walmart_product(document: &Html) -> Option<ProductRecord> {
    let selector = Selector::parse("script#__NEXT_DATA__").ok()?;
    let Some(script) = document.select(&selector).next() else {
        tracing::debug!("walmart page has no __NEXT_DATA__ script, probably bot-blocked");
        return None;
    };

    let script_content = script.text().collect::<Vec<_>>().join("");
    let data: Value = match serde_json::from_str(&script_content) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("walmart __NEXT_DATA__ is not valid JSON: {}", e);
            return None;
        }
    };

    let product = data
        .pointer("/props/pageProps/initialData/data/product")?
        .as_object()?;

    let name = product
        .get("name")
        .and_then(Value::as_str)
        .map(shorten_name)
        .and_then(|name| non_empty(&name));
    let price = product
        .get("priceInfo")
        .and_then(|info| info.pointer("/currentPrice/price"))
        .and_then(Price::from_json);
    let image = product
        .get("imageInfo")
        .and_then(|info| info.get("thumbnailUrl"))
        .and_then(Value::as_str)
        .and_then(non_empty);

    Some(ProductRecord { name, image, price })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next_data: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><script id="__NEXT_DATA__" type="application/json">{}</script></body></html>"#,
            next_data
        ))
    }

    #[test]
    fn walks_to_product() {
        let document = page(
            r#"{"props":{"pageProps":{"initialData":{"data":{"product":{
                "name":"LEGO Classic Bricks, 790 pieces",
                "priceInfo":{"currentPrice":{"price":34.97,"priceString":"$34.97"}},
                "imageInfo":{"thumbnailUrl":"https://i5.walmartimages.com/lego.jpeg"}}}}}}}"#,
        );
        let record = extract_walmart_product(&document).unwrap();

        assert_eq!(record.name.as_deref(), Some("LEGO Classic Bricks"));
        assert_eq!(record.price, Some(Price::Amount(34.97)));
        assert_eq!(record.image.as_deref(), Some("https://i5.walmartimages.com/lego.jpeg"));
    }

    #[test]
    fn partial_product_keeps_what_it_has() {
        let document = page(
            r#"{"props":{"pageProps":{"initialData":{"data":{"product":{"name":"Socks","priceInfo":null}}}}}}"#,
        );
        let record = extract_walmart_product(&document).unwrap();

        assert_eq!(record.name.as_deref(), Some("Socks"));
        assert!(record.price.is_none());
        assert!(record.image.is_none());
    }

    #[test]
    fn missing_next_data_contributes_nothing() {
        let document = Html::parse_document(
            "<html><body><h1>Robot or human?</h1><script>var x = 1;</script></body></html>",
        );
        assert!(extract_walmart_product(&document).is_none());
    }

    #[test]
    fn broken_state_contributes_nothing() {
        assert!(extract_walmart_product(&page("{truncated")).is_none());
        assert!(extract_walmart_product(&page(r#"{"props":{"pageProps":{}}}"#)).is_none());
        assert!(extract_walmart_product(&page(
            r#"{"props":{"pageProps":{"initialData":{"data":{"product":"gone"}}}}}"#
        ))
        .is_none());
    }
}
