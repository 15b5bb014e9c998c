pub mod check_product;
pub mod check_text;
pub mod scan_label;
