pub mod food_categories;
