use std::sync::Arc;

use crate::core::config::CategoryConfig;
use crate::core::error::{AppError, Result};
use crate::features::food_categories::dtos::{
    FoodCategoryRequest, FoodCategorySortField, FoodCategoryTreeDto,
};
use crate::features::food_categories::models::{FoodCategory, ParentResolutionMode};
use crate::features::food_categories::services::cache::CategoryCache;
use crate::features::food_categories::services::parent_resolver::ParentResolver;
use crate::features::food_categories::services::tree_builder::build_tree;
use crate::features::food_categories::store::{CategoryStore, Page, PageRequest};
use crate::shared::types::PaginationQuery;

/// Service for food category operations
pub struct FoodCategoryService {
    store: Arc<dyn CategoryStore>,
    resolver: ParentResolver,
    cache: CategoryCache,
}

impl std::fmt::Debug for FoodCategoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoodCategoryService")
            .field("store", &"<CategoryStore>")
            .field("resolver", &self.resolver)
            .field("cache", &self.cache)
            .finish()
    }
}

impl FoodCategoryService {
    pub fn new(store: Arc<dyn CategoryStore>, config: &CategoryConfig) -> Self {
        Self {
            store,
            resolver: ParentResolver::new(config.parent_resolution),
            cache: CategoryCache::new(config.cache_ttl),
        }
    }

    pub fn parent_resolution(&self) -> ParentResolutionMode {
        self.resolver.mode()
    }

    /// Create a category under the resolved parent
    pub async fn create(&self, request: FoodCategoryRequest) -> Result<FoodCategory> {
        let parent_id = self
            .resolver
            .resolve(self.store.as_ref(), request.parent_id)
            .await?;

        if request.parent_id.is_some() && parent_id != request.parent_id {
            tracing::debug!(
                "Requested parent {:?} resolved to {:?}",
                request.parent_id,
                parent_id
            );
        }

        let created = self
            .store
            .insert(request.into_new_category(parent_id))
            .await?;
        self.cache.invalidate().await;

        tracing::info!("Food category {} created", created.id);
        Ok(created)
    }

    /// Get a category by id, served from the cache when possible
    pub async fn get_by_id(&self, id: i64) -> Result<FoodCategory> {
        if let Some(category) = self.cache.get_category(id).await {
            return Ok(category);
        }

        let generation = self.cache.generation().await;
        let category = self.find_by_id(id).await?;
        self.cache.put_category(generation, &category).await;
        Ok(category)
    }

    /// Get a category by id straight from the store
    async fn find_by_id(&self, id: i64) -> Result<FoodCategory> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::category_not_found(id))
    }

    /// List one page of categories
    pub async fn list(&self, query: &PaginationQuery) -> Result<Page<FoodCategory>> {
        let (property, direction) = query.sort_parts();
        let sort_field = FoodCategorySortField::from_property(property).ok_or_else(|| {
            AppError::Validation(format!(
                "sort: no property '{}' found for type 'FoodCategory'",
                property
            ))
        })?;

        self.store
            .find_page(PageRequest {
                limit: query.limit(),
                offset: query.offset(),
                sort_field,
                direction,
            })
            .await
    }

    /// Whole category hierarchy, one tree per root
    pub async fn tree(&self) -> Result<Vec<FoodCategoryTreeDto>> {
        if let Some(tree) = self.cache.get_tree().await {
            return Ok(tree);
        }

        let generation = self.cache.generation().await;
        let tree = build_tree(self.store.as_ref()).await?;
        self.cache.put_tree(generation, &tree).await;
        Ok(tree)
    }

    /// Replace name, description, final flag and parent of an existing category.
    /// An absent parent id turns the category into a root.
    pub async fn update(&self, id: i64, request: FoodCategoryRequest) -> Result<FoodCategory> {
        let mut category = self.find_by_id(id).await?;

        let parent_id = self
            .resolver
            .resolve(self.store.as_ref(), request.parent_id)
            .await?;

        category.name = request.name;
        category.description = request.description;
        category.is_final = request.is_final;
        category.parent_id = parent_id;

        let updated = self
            .store
            .update(category)
            .await?
            .ok_or_else(|| AppError::category_not_found(id))?;
        self.cache.invalidate().await;

        tracing::info!("Food category {} updated", id);
        Ok(updated)
    }

    /// Delete a category. Its children keep pointing at the removed id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.find_by_id(id).await?;

        if !self.store.delete(id).await? {
            return Err(AppError::category_not_found(id));
        }
        self.cache.invalidate().await;

        tracing::info!("Food category {} deleted", id);
        Ok(())
    }
}
