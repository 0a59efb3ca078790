use crate::product::Price;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '£', '€', '¥'];

/// Formats a scraped price for storage: one leading currency symbol and
/// thousands separators are removed from text prices.
pub fn normalize_price(price: &Price) -> String {
    match price {
        Price::Amount(amount) => amount.to_string(),
        Price::Text(text) => {
            let text = text.trim();
            let text = text
                .strip_prefix(|c: char| CURRENCY_SYMBOLS.contains(&c))
                .unwrap_or(text);
            text.trim().replace(',', "")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_currency_symbol() {
        assert_eq!(normalize_price(&Price::Text("$19.99".to_string())), "19.99");
        assert_eq!(normalize_price(&Price::Text(" € 5.00".to_string())), "5.00");
        assert_eq!(normalize_price(&Price::Text("$1,299.00".to_string())), "1299.00");
    }

    #[test]
    fn keeps_plain_amounts() {
        assert_eq!(normalize_price(&Price::Amount(19.99)), "19.99");
        assert_eq!(normalize_price(&Price::Text("42".to_string())), "42");
    }
}
