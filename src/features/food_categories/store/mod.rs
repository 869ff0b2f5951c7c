//! Storage seam for food categories.
//!
//! The service only talks to these traits, so the Postgres implementation can
//! be swapped for an in-memory one in tests.

pub mod pg_store;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::food_categories::dtos::FoodCategorySortField;
use crate::features::food_categories::models::{FoodCategory, NewFoodCategory};
use crate::shared::types::SortDirection;

pub use pg_store::PgCategoryStore;

/// Read access to the parent-pointer hierarchy
#[async_trait]
pub trait CategoryHierarchy: Send + Sync {
    /// Categories without a parent, in store order
    async fn find_roots(&self) -> Result<Vec<FoodCategory>>;

    /// Direct children of `parent_id`, in store order
    async fn find_children(&self, parent_id: i64) -> Result<Vec<FoodCategory>>;
}

#[async_trait]
pub trait CategoryStore: CategoryHierarchy {
    async fn get(&self, id: i64) -> Result<Option<FoodCategory>>;

    async fn insert(&self, category: NewFoodCategory) -> Result<FoodCategory>;

    /// Overwrite every mutable column of an existing row.
    /// Returns `None` when the row no longer exists.
    async fn update(&self, category: FoodCategory) -> Result<Option<FoodCategory>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn find_page(&self, request: PageRequest) -> Result<Page<FoodCategory>>;
}

/// One page of a sorted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
    pub sort_field: FoodCategorySortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: i64,
}
