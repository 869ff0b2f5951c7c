pub mod food_category_dto;

pub use food_category_dto::{
    FoodCategoryDto, FoodCategoryRequest, FoodCategorySortField, FoodCategoryTreeDto,
};
