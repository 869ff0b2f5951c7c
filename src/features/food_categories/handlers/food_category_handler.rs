use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::food_categories::dtos::{
    FoodCategoryDto, FoodCategoryRequest, FoodCategoryTreeDto,
};
use crate::features::food_categories::services::FoodCategoryService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

pub const BASE_PATH: &str = "/api/food-categories";

/// Create a food category
///
/// A requested `parentId` is resolved before the row is stored; see the
/// service configuration for the resolution mode.
#[utoipa::path(
    post,
    path = "/api/food-categories",
    request_body = FoodCategoryRequest,
    responses(
        (status = 201, description = "Food category created", body = ApiResponse<FoodCategoryDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Parent category not found")
    ),
    tag = "food-categories"
)]
pub async fn create_food_category(
    State(service): State<Arc<FoodCategoryService>>,
    AppJson(dto): AppJson<FoodCategoryRequest>,
) -> Result<(
    StatusCode,
    [(HeaderName, String); 1],
    Json<ApiResponse<FoodCategoryDto>>,
)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created: FoodCategoryDto = service.create(dto).await?.into();
    let location = format!("{}/{}", BASE_PATH, created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

/// Get a food category by id
#[utoipa::path(
    get,
    path = "/api/food-categories/{id}",
    params(
        ("id" = i64, Path, description = "Food category id")
    ),
    responses(
        (status = 200, description = "Food category found", body = ApiResponse<FoodCategoryDto>),
        (status = 404, description = "Food category not found")
    ),
    tag = "food-categories"
)]
pub async fn get_food_category(
    State(service): State<Arc<FoodCategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FoodCategoryDto>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category.into()), None, None)))
}

/// List food categories, paginated and sorted
#[utoipa::path(
    get,
    path = "/api/food-categories",
    params(PaginationQuery),
    responses(
        (
            status = 200,
            description = "Page of food categories",
            body = ApiResponse<Vec<FoodCategoryDto>>
        ),
        (status = 400, description = "Unknown sort property")
    ),
    tag = "food-categories"
)]
pub async fn list_food_categories(
    State(service): State<Arc<FoodCategoryService>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<FoodCategoryDto>>>> {
    let page = service.list(&query).await?;
    let content: Vec<FoodCategoryDto> = page.content.into_iter().map(|c| c.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(content),
        None,
        Some(Meta::paged(page.total, query.page(), query.limit())),
    )))
}

/// Get the full food category hierarchy
#[utoipa::path(
    get,
    path = "/api/food-categories/tree",
    responses(
        (
            status = 200,
            description = "Category tree, one entry per root",
            body = ApiResponse<Vec<FoodCategoryTreeDto>>
        )
    ),
    tag = "food-categories"
)]
pub async fn get_food_category_tree(
    State(service): State<Arc<FoodCategoryService>>,
) -> Result<Json<ApiResponse<Vec<FoodCategoryTreeDto>>>> {
    let tree = service.tree().await?;
    Ok(Json(ApiResponse::success(Some(tree), None, None)))
}

/// Replace a food category
///
/// Omitting `parentId` turns the category into a root.
#[utoipa::path(
    put,
    path = "/api/food-categories/{id}",
    params(
        ("id" = i64, Path, description = "Food category id")
    ),
    request_body = FoodCategoryRequest,
    responses(
        (status = 200, description = "Food category updated", body = ApiResponse<FoodCategoryDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Food category or parent not found")
    ),
    tag = "food-categories"
)]
pub async fn update_food_category(
    State(service): State<Arc<FoodCategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<FoodCategoryRequest>,
) -> Result<Json<ApiResponse<FoodCategoryDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(updated.into()), None, None)))
}

/// Delete a food category
///
/// Child categories are left in place.
#[utoipa::path(
    delete,
    path = "/api/food-categories/{id}",
    params(
        ("id" = i64, Path, description = "Food category id")
    ),
    responses(
        (status = 204, description = "Food category deleted"),
        (status = 404, description = "Food category not found")
    ),
    tag = "food-categories"
)]
pub async fn delete_food_category(
    State(service): State<Arc<FoodCategoryService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
