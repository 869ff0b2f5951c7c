pub mod food_category_handler;

pub use food_category_handler::*;
