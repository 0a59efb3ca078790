pub mod extract_walmart_product;
