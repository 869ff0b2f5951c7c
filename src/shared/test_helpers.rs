use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};

use crate::core::config::CategoryConfig;
use crate::core::error::Result;
use crate::features::food_categories::dtos::{FoodCategoryRequest, FoodCategorySortField};
use crate::features::food_categories::models::{FoodCategory, NewFoodCategory};
use crate::features::food_categories::routes;
use crate::features::food_categories::store::{
    CategoryHierarchy, CategoryStore, Page, PageRequest,
};
use crate::features::food_categories::FoodCategoryService;
use crate::shared::types::SortDirection;

/// Category store backed by a vector, preserving insertion order like a heap table
pub struct InMemoryCategoryStore {
    rows: Mutex<Vec<FoodCategory>>,
    next_id: AtomicI64,
    reads: AtomicUsize,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_rows(rows: Vec<FoodCategory>) -> Self {
        let next_id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
            reads: AtomicUsize::new(0),
        }
    }

    /// Snapshot of every stored row
    pub fn rows(&self) -> Vec<FoodCategory> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of read queries served so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoryHierarchy for InMemoryCategoryStore {
    async fn find_roots(&self) -> Result<Vec<FoodCategory>> {
        self.record_read();
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|c| c.parent_id.is_none()).cloned().collect())
    }

    async fn find_children(&self, parent_id: i64) -> Result<Vec<FoodCategory>> {
        self.record_read();
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryStore for InMemoryCategoryStore {
    async fn get(&self, id: i64) -> Result<Option<FoodCategory>> {
        self.record_read();
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, category: NewFoodCategory) -> Result<FoodCategory> {
        let now = Utc::now();
        let stored = FoodCategory {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            parent_id: category.parent_id,
            name: category.name,
            description: category.description,
            is_final: category.is_final,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: FoodCategory) -> Result<Option<FoodCategory>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(existing) = rows.iter_mut().find(|c| c.id == category.id) else {
            return Ok(None);
        };
        existing.parent_id = category.parent_id;
        existing.name = category.name;
        existing.description = category.description;
        existing.is_final = category.is_final;
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() < before)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<FoodCategory>> {
        self.record_read();
        if request.offset < 0 || request.limit < 0 {
            // Postgres rejects these too
            let message = "OFFSET and LIMIT must not be negative".to_string();
            return Err(sqlx::Error::Protocol(message).into());
        }
        let mut rows = self.rows();
        rows.sort_by(|a, b| {
            let ordering = match request.sort_field {
                FoodCategorySortField::Id => a.id.cmp(&b.id),
                FoodCategorySortField::ParentId => a.parent_id.cmp(&b.parent_id),
                FoodCategorySortField::Name => a.name.cmp(&b.name),
                FoodCategorySortField::Description => a.description.cmp(&b.description),
                FoodCategorySortField::IsFinal => a.is_final.cmp(&b.is_final),
                FoodCategorySortField::CreatedAt => a.created_at.cmp(&b.created_at),
                FoodCategorySortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            match request.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = rows.len() as i64;
        let content = rows
            .into_iter()
            .skip(request.offset as usize)
            .take(request.limit as usize)
            .collect();
        Ok(Page { content, total })
    }
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// A stored row with fixed timestamps
pub fn category(id: i64, parent_id: Option<i64>, name: &str) -> FoodCategory {
    FoodCategory {
        id,
        parent_id,
        name: name.to_string(),
        description: None,
        is_final: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn request(name: &str, parent_id: Option<i64>) -> FoodCategoryRequest {
    FoodCategoryRequest {
        parent_id,
        name: name.to_string(),
        description: None,
        is_final: false,
    }
}

/// Service over the given store with the default (sibling) resolution mode
pub fn service_with(store: Arc<InMemoryCategoryStore>) -> FoodCategoryService {
    FoodCategoryService::new(store, &CategoryConfig::default())
}

/// Full food category router over an in-memory store
pub fn test_router(store: Arc<InMemoryCategoryStore>, config: &CategoryConfig) -> Router {
    routes::routes(Arc::new(FoodCategoryService::new(store, config)))
}
