use utoipa::{Modify, OpenApi};

use crate::features::food_categories::{
    dtos as food_categories_dtos, handlers as food_categories_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Food categories
        food_categories_handlers::create_food_category,
        food_categories_handlers::get_food_category,
        food_categories_handlers::list_food_categories,
        food_categories_handlers::get_food_category_tree,
        food_categories_handlers::update_food_category,
        food_categories_handlers::delete_food_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Food categories
            food_categories_dtos::FoodCategoryRequest,
            food_categories_dtos::FoodCategoryDto,
            food_categories_dtos::FoodCategoryTreeDto,
            ApiResponse<food_categories_dtos::FoodCategoryDto>,
            ApiResponse<Vec<food_categories_dtos::FoodCategoryDto>>,
            ApiResponse<Vec<food_categories_dtos::FoodCategoryTreeDto>>,
        )
    ),
    tags(
        (name = "food-categories", description = "Hierarchical food categories"),
    ),
    info(
        title = "Food Categories API",
        version = "0.1.0",
        description = "Hierarchical food category catalogue",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_food_category_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/food-categories"));
        assert!(doc.paths.paths.contains_key("/api/food-categories/tree"));
        assert!(doc.paths.paths.contains_key("/api/food-categories/{id}"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Pantry".to_string(),
            version: "2.0.0".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Pantry");
        assert_eq!(doc.info.version, "2.0.0");
        assert_eq!(doc.info.description.as_deref(), Some("Internal"));
    }
}
