use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::food_categories::handlers;
use crate::features::food_categories::services::FoodCategoryService;

/// Create routes for the food categories feature
pub fn routes(service: Arc<FoodCategoryService>) -> Router {
    Router::new()
        .route(
            "/api/food-categories",
            get(handlers::list_food_categories).post(handlers::create_food_category),
        )
        .route(
            "/api/food-categories/tree",
            get(handlers::get_food_category_tree),
        )
        .route(
            "/api/food-categories/{id}",
            get(handlers::get_food_category)
                .put(handlers::update_food_category)
                .delete(handlers::delete_food_category),
        )
        .with_state(service)
}
