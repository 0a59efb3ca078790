//! Best-effort product metadata (name, image, price) for gift and wishlist
//! entries, scraped from retailer product pages.

pub mod config;
pub mod extract_product;
pub mod extractors;
pub mod fetch;
pub mod product;
pub mod store;
pub mod utilities;
pub mod wishlist_entry;

pub use extract_product::{ExtractError, ExtractionContext, ProductExtractor};
pub use fetch::{FetchError, HttpFetcher, PageFetcher, Persona, PersonaHeaders};
pub use product::{Price, ProductRecord};
pub use store::{get_store, StoreIdentity};
pub use wishlist_entry::{ScrapeStatus, WishlistEntry};
