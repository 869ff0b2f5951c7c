pub mod cache;
pub mod food_category_service;
pub mod parent_resolver;
pub mod tree_builder;

pub use food_category_service::FoodCategoryService;
