pub mod food_category;

pub use food_category::{FoodCategory, NewFoodCategory, ParentResolutionMode};
