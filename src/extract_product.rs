use scraper::Html;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extractors::{amazon, generic, structured_data};
use crate::fetch::{FetchError, PageFetcher, Persona};
use crate::product::ProductRecord;
use crate::store::{get_store, StoreIdentity};
use crate::utilities::mobile_url::mobile_url;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no product data found at {url}")]
    NoProductFound { url: String },
}

/// Per-call state: the requested URL, its store and the parsed page.
/// Never outlives one `extract` call.
pub struct ExtractionContext<'a> {
    pub url: &'a str,
    pub store: StoreIdentity,
    pub document: Html,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(url: &'a str, body: &str) -> Self {
        ExtractionContext {
            url,
            store: get_store(url),
            document: Html::parse_document(body),
        }
    }

    /// Structured data, then heuristics for whatever is still unknown, then the
    /// store-specific override.
    pub fn run_cascade(&self) -> ProductRecord {
        let mut record = ProductRecord::default();

        if let Some(partial) = structured_data::extract_structured_data(&self.document) {
            debug!(url = self.url, ?partial, "structured data");
            record.merge(partial);
        }

        record.fill_missing(generic::extract_generic(&self.document));

        let partial = self.store.scrape(&self.document);
        debug!(url = self.url, store = %self.store, ?partial, "store strategy");
        match self.store {
            StoreIdentity::Unknown => record.fill_missing(partial),
            _ => record.merge(partial),
        }

        record
    }
}

/// Turns a product URL into a `ProductRecord`.
///
/// One extraction is at most two sequential GETs: the page itself and, for
/// Amazon pages without a visible price, the mobile rendition of the page.
pub struct ProductExtractor<F> {
    fetcher: F,
}

impl<F: PageFetcher> ProductExtractor<F> {
    pub fn new(fetcher: F) -> Self {
        ProductExtractor { fetcher }
    }

    pub async fn extract(&self, url: &str) -> Result<ProductRecord, ExtractError> {
        let body = match self.fetcher.fetch(url, Persona::Desktop).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Request failed: {}", e);
                return Err(e.into());
            }
        };

        // The parsed page stays in this block so it is gone before the next await.
        let (store, mut record) = {
            let context = ExtractionContext::new(url, &body);
            (context.store, context.run_cascade())
        };

        // When the mobile page has no price either, the price stays unknown rather
        // than falling through to the generic price lookup.
        if store == StoreIdentity::Amazon && record.price.is_none() {
            if let Some(partial) = self.amazon_mobile_fallback(url).await {
                record.merge(partial);
            }
        }

        if record.is_empty() {
            info!(url, store = %store, "no product data found");
            return Err(ExtractError::NoProductFound {
                url: url.to_string(),
            });
        }

        info!(url, store = %store, ?record, "product extracted");
        Ok(record)
    }

    /// Refetches an Amazon page on the mobile host with the mobile persona and
    /// reads the price from there. Any failure only means no price.
    pub async fn amazon_mobile_fallback(&self, url: &str) -> Option<ProductRecord> {
        let mobile = mobile_url(url)?;
        debug!(url, mobile = %mobile, "amazon price missing, trying mobile page");

        let body = match self.fetcher.fetch(&mobile, Persona::Mobile).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Mobile fallback request failed: {}", e);
                return None;
            }
        };

        let document = Html::parse_document(&body);
        let price = amazon::extract_amazon_mobile_price::extract_amazon_mobile_price(&document)?;
        Some(ProductRecord {
            price: Some(price),
            ..ProductRecord::default()
        })
    }
}
