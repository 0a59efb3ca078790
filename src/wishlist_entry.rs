use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extract_product::ExtractError;
use crate::product::ProductRecord;
use crate::store::{get_store, StoreIdentity};
use crate::utilities::normalize_price::normalize_price;

/// Outcome of scraping one URL, as stored next to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeStatus {
    Found,
    NoProductFound,
    FetchFailed,
}

impl ScrapeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrapeStatus::Found => "found",
            ScrapeStatus::NoProductFound => "no_product_found",
            ScrapeStatus::FetchFailed => "fetch_failed",
        }
    }
}

/// A gift or wishlist item created from a URL.
///
/// Scraping only enriches the entry: a failed extraction still produces an
/// entry carrying the URL with blank metadata.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistEntry {
    pub url: String,
    #[serde(serialize_with = "serialize_store")]
    pub store: StoreIdentity,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub status: ScrapeStatus,
    pub scraped_at: DateTime<Utc>,
}

fn serialize_store<S: serde::Serializer>(store: &StoreIdentity, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(store.as_str())
}

impl WishlistEntry {
    pub fn from_extraction(url: &str, result: Result<ProductRecord, ExtractError>) -> Self {
        let (record, status) = match result {
            Ok(record) => (record, ScrapeStatus::Found),
            Err(ExtractError::NoProductFound { .. }) => {
                (ProductRecord::default(), ScrapeStatus::NoProductFound)
            }
            Err(ExtractError::Fetch(_)) => (ProductRecord::default(), ScrapeStatus::FetchFailed),
        };

        WishlistEntry {
            url: url.to_string(),
            store: get_store(url),
            name: record.name,
            image: record.image,
            price: record.price.as_ref().map(normalize_price),
            status,
            scraped_at: Utc::now(),
        }
    }

    /// Column order of `to_record`.
    pub fn headers() -> [&'static str; 7] {
        ["url", "store", "name", "image", "price", "status", "scraped_at"]
    }

    /// Flattens the entry into CSV cells; unknown fields become blank cells.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.url.clone(),
            self.store.to_string(),
            self.name.clone().unwrap_or_default(),
            self.image.clone().unwrap_or_default(),
            self.price.clone().unwrap_or_default(),
            self.status.as_str().to_string(),
            self.scraped_at.to_rfc3339(),
        ]
    }
}
