use std::fmt;

use scraper::Html;
use url::Url;

use crate::extractors::{amazon, generic, target, walmart};
use crate::product::ProductRecord;

/// Retailers with dedicated extraction, plus everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreIdentity {
    Amazon,
    Walmart,
    Target,
    Unknown,
}

impl StoreIdentity {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreIdentity::Amazon => "amazon",
            StoreIdentity::Walmart => "walmart",
            StoreIdentity::Target => "target",
            StoreIdentity::Unknown => "unknown",
        }
    }

    /// Runs the store-specific extraction over an already parsed page.
    ///
    /// The returned record is partial: it is merged with set-if-present semantics
    /// into the running cascade result, except for `Unknown` whose price lookup is
    /// a last resort and only fills a missing price (see `generic::extract_generic_price`).
    pub fn scrape(&self, document: &Html) -> ProductRecord {
        match self {
            StoreIdentity::Amazon => ProductRecord {
                name: amazon::extract_amazon_title::extract_amazon_title(document),
                image: amazon::extract_amazon_image::extract_amazon_image(document),
                price: amazon::extract_amazon_price::extract_amazon_price(document),
            },
            StoreIdentity::Walmart => {
                walmart::extract_walmart_product::extract_walmart_product(document)
                    .unwrap_or_default()
            }
            StoreIdentity::Target => ProductRecord {
                price: target::extract_target_price::extract_target_price(document),
                ..ProductRecord::default()
            },
            StoreIdentity::Unknown => ProductRecord {
                price: generic::extract_generic_price(document),
                ..ProductRecord::default()
            },
        }
    }
}

impl fmt::Display for StoreIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a URL by the first label of its host once `www.` is stripped.
///
/// Only the bare tokens `amazon`, `walmart` and `target` are recognised, so
/// `smile.amazon.co.uk` stays `Unknown`. Unparseable URLs are `Unknown` too.
pub fn get_store(url: &str) -> StoreIdentity {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_lowercase(),
            None => return StoreIdentity::Unknown,
        },
        Err(_) => return StoreIdentity::Unknown,
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let naked_domain = host.split('.').next().unwrap_or_default();

    match naked_domain {
        "amazon" => StoreIdentity::Amazon,
        "walmart" => StoreIdentity::Walmart,
        "target" => StoreIdentity::Target,
        _ => StoreIdentity::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_bare_store_hosts() {
        assert_eq!(get_store("https://www.amazon.com/dp/B000"), StoreIdentity::Amazon);
        assert_eq!(get_store("https://amazon.co.uk/dp/B000"), StoreIdentity::Amazon);
        assert_eq!(get_store("https://WWW.Walmart.com/ip/123"), StoreIdentity::Walmart);
        assert_eq!(get_store("https://www.target.com/p/-/A-1"), StoreIdentity::Target);
        assert_eq!(get_store("http://target.com:8080/p"), StoreIdentity::Target);
    }

    #[test]
    fn other_hosts_are_unknown() {
        assert_eq!(get_store("https://smile.amazon.co.uk/dp/B000"), StoreIdentity::Unknown);
        assert_eq!(get_store("https://m.walmart.com/ip/1"), StoreIdentity::Unknown);
        assert_eq!(get_store("https://www.etsy.com/listing/1"), StoreIdentity::Unknown);
        assert_eq!(get_store("https://amazonia.com/"), StoreIdentity::Unknown);
    }

    #[test]
    fn malformed_urls_are_unknown() {
        assert_eq!(get_store("not a url"), StoreIdentity::Unknown);
        assert_eq!(get_store(""), StoreIdentity::Unknown);
    }

    #[test]
    fn unknown_store_falls_back_to_generic_price() {
        let document = Html::parse_document(
            r#"<html><body><div class="card"><span class="price"> $4.99 </span></div></body></html>"#,
        );
        let partial = StoreIdentity::Unknown.scrape(&document);
        assert_eq!(partial.price, Some(crate::product::Price::Text("$4.99".to_string())));
        assert!(partial.name.is_none());
    }
}
