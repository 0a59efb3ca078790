pub mod extract_target_price;
