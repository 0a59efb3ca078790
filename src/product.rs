use std::fmt;

use serde::Serialize;

/// A scraped price. Stores disagree on the representation: structured data and
/// embedded state usually carry numbers, visible markup carries text such as `$19.99`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Builds a price from a JSON value. Only numbers and non-empty strings qualify.
    pub fn from_json(value: &serde_json::Value) -> Option<Price> {
        match value {
            serde_json::Value::Number(number) => number.as_f64().map(Price::Amount),
            serde_json::Value::String(text) => Price::from_text(text),
            _ => None,
        }
    }

    pub fn from_text(text: &str) -> Option<Price> {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(Price::Text(text.to_string()))
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{}", amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Best current knowledge about a product page.
///
/// Fields the cascade never filled stay `None` and mean "unknown", never "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<Price>,
}

impl ProductRecord {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.price.is_none()
    }

    /// Set-if-present: every field `other` carries overwrites ours, absent fields never clear.
    pub fn merge(&mut self, other: ProductRecord) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.image.is_some() {
            self.image = other.image;
        }
        if other.price.is_some() {
            self.price = other.price;
        }
    }

    /// Fill-if-absent: only fields still unknown are taken from `other`.
    pub fn fill_missing(&mut self, other: ProductRecord) {
        if self.name.is_none() {
            self.name = other.name;
        }
        if self.image.is_none() {
            self.image = other.image;
        }
        if self.price.is_none() {
            self.price = other.price;
        }
    }
}

/// Trims `text` and returns it unless nothing is left.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, image: Option<&str>, price: Option<Price>) -> ProductRecord {
        ProductRecord {
            name: name.map(String::from),
            image: image.map(String::from),
            price,
        }
    }

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut current = record(Some("Lamp"), Some("https://img/1.jpg"), None);
        current.merge(record(None, Some("https://img/2.jpg"), Some(Price::Amount(12.5))));

        assert_eq!(current.name.as_deref(), Some("Lamp"));
        assert_eq!(current.image.as_deref(), Some("https://img/2.jpg"));
        assert_eq!(current.price, Some(Price::Amount(12.5)));
    }

    #[test]
    fn fill_missing_keeps_known_fields() {
        let mut current = record(Some("Lamp"), None, None);
        current.fill_missing(record(Some("Other"), Some("https://img/og.jpg"), None));

        assert_eq!(current.name.as_deref(), Some("Lamp"));
        assert_eq!(current.image.as_deref(), Some("https://img/og.jpg"));
        assert!(current.price.is_none());
    }

    #[test]
    fn empty_record_is_empty() {
        assert!(ProductRecord::default().is_empty());
        assert!(!record(None, None, Some(Price::Amount(1.0))).is_empty());
    }

    #[test]
    fn price_from_json_accepts_numbers_and_text() {
        assert_eq!(Price::from_json(&serde_json::json!(19.99)), Some(Price::Amount(19.99)));
        assert_eq!(
            Price::from_json(&serde_json::json!(" 24.00 ")),
            Some(Price::Text("24.00".to_string()))
        );
        assert_eq!(Price::from_json(&serde_json::json!("")), None);
        assert_eq!(Price::from_json(&serde_json::json!(null)), None);
        assert_eq!(Price::from_json(&serde_json::json!({"value": 3})), None);
    }
}
