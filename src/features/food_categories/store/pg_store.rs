use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::food_categories::models::{FoodCategory, NewFoodCategory};
use crate::features::food_categories::store::{
    CategoryHierarchy, CategoryStore, Page, PageRequest,
};

const COLUMNS: &str = "id, parent_id, name, description, is_final, created_at, updated_at";

/// Postgres-backed category store (`food_categories` table)
#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryHierarchy for PgCategoryStore {
    async fn find_roots(&self) -> Result<Vec<FoodCategory>> {
        let query = format!(
            "SELECT {} FROM food_categories WHERE parent_id IS NULL",
            COLUMNS
        );

        sqlx::query_as::<_, FoodCategory>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list root food categories: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_children(&self, parent_id: i64) -> Result<Vec<FoodCategory>> {
        let query = format!(
            "SELECT {} FROM food_categories WHERE parent_id = $1",
            COLUMNS
        );

        sqlx::query_as::<_, FoodCategory>(&query)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list children of food category {}: {:?}", parent_id, e);
                AppError::Database(e)
            })
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn get(&self, id: i64) -> Result<Option<FoodCategory>> {
        let query = format!("SELECT {} FROM food_categories WHERE id = $1", COLUMNS);

        sqlx::query_as::<_, FoodCategory>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get food category {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, category: NewFoodCategory) -> Result<FoodCategory> {
        let query = format!(
            r#"
            INSERT INTO food_categories (parent_id, name, description, is_final)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as::<_, FoodCategory>(&query)
            .bind(category.parent_id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.is_final)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert food category: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, category: FoodCategory) -> Result<Option<FoodCategory>> {
        let query = format!(
            r#"
            UPDATE food_categories
            SET parent_id = $1, name = $2, description = $3, is_final = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as::<_, FoodCategory>(&query)
            .bind(category.parent_id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.is_final)
            .bind(category.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update food category {}: {:?}", category.id, e);
                AppError::Database(e)
            })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM food_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete food category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<FoodCategory>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_categories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        // Sort column and direction come from closed enums, never from raw input
        let query = format!(
            r#"
            SELECT {}
            FROM food_categories
            ORDER BY {} {}
            LIMIT $1 OFFSET $2
            "#,
            COLUMNS,
            request.sort_field.as_sql(),
            request.direction.as_sql()
        );

        let content = sqlx::query_as::<_, FoodCategory>(&query)
            .bind(request.limit)
            .bind(request.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list food categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Page { content, total })
    }
}
