pub mod csv_reader;
pub mod csv_writer;
pub mod logging;
pub mod mobile_url;
pub mod normalize_price;
pub mod shorten_name;
