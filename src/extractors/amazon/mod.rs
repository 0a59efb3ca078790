pub mod extract_amazon_image;
pub mod extract_amazon_mobile_price;
pub mod extract_amazon_price;
pub mod extract_amazon_title;
