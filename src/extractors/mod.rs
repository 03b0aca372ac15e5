pub mod extract_capacity;
pub mod extract_pcode;
pub mod extract_product_links;
pub mod extract_title;
pub mod extract_unit_price;
