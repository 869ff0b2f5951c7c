use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::food_categories::models::{FoodCategory, NewFoodCategory};
use crate::shared::validation::NOT_BLANK_REGEX;

/// Request DTO for creating or replacing a food category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryRequest {
    /// Requested parent category. Omit to make the category a root.
    pub parent_id: Option<i64>,

    #[validate(
        regex(path = *NOT_BLANK_REGEX, message = "must not be blank"),
        length(max = 100, message = "size must be between 0 and 100")
    )]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub is_final: bool,
}

impl FoodCategoryRequest {
    /// Row fields for this request, with an already resolved parent
    pub fn into_new_category(self, parent_id: Option<i64>) -> NewFoodCategory {
        NewFoodCategory {
            parent_id,
            name: self.name,
            description: self.description,
            is_final: self.is_final,
        }
    }
}

/// Response DTO for a food category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryDto {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub is_final: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FoodCategory> for FoodCategoryDto {
    fn from(c: FoodCategory) -> Self {
        Self {
            id: c.id,
            parent_id: c.parent_id,
            name: c.name,
            description: c.description,
            is_final: c.is_final,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response DTO for a node of the category tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(no_recursion)]
pub struct FoodCategoryTreeDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_final: bool,
    pub sub_categories: Vec<FoodCategoryTreeDto>,
    pub created_at: DateTime<Utc>,
}

impl FoodCategoryTreeDto {
    pub fn from_category(category: FoodCategory, sub_categories: Vec<FoodCategoryTreeDto>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_final: category.is_final,
            sub_categories,
            created_at: category.created_at,
        }
    }
}

/// Properties a category listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategorySortField {
    Id,
    ParentId,
    Name,
    Description,
    IsFinal,
    CreatedAt,
    UpdatedAt,
}

impl FoodCategorySortField {
    /// Resolve a wire property name (`name`, `createdAt`, ...)
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Self::Id),
            "parentId" => Some(Self::ParentId),
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "isFinal" => Some(Self::IsFinal),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ParentId => "parent_id",
            Self::Name => "name",
            Self::Description => "description",
            Self::IsFinal => "is_final",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str) -> FoodCategoryRequest {
        FoodCategoryRequest {
            parent_id: None,
            name: name.to_string(),
            description: None,
            is_final: false,
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(request("Vegetables").validate().is_ok());
        assert!(request(&"a".repeat(100)).validate().is_ok());

        let blank = request("   ").validate().unwrap_err();
        assert!(blank.field_errors().contains_key("name"));

        let too_long = request(&"a".repeat(101)).validate().unwrap_err();
        assert!(too_long.field_errors().contains_key("name"));
    }

    #[test]
    fn test_request_uses_camel_case_and_defaults() {
        let dto: FoodCategoryRequest =
            serde_json::from_str(r#"{"parentId": 7, "name": "Apples"}"#).unwrap();
        assert_eq!(dto.parent_id, Some(7));
        assert!(!dto.is_final);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_tree_dto_wire_names() {
        let now = Utc::now();
        let category = FoodCategory {
            id: 1,
            parent_id: None,
            name: "Produce".to_string(),
            description: Some("Fresh".to_string()),
            is_final: true,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(FoodCategoryTreeDto::from_category(category, vec![]))
            .unwrap();

        assert_eq!(value["isFinal"], true);
        assert_eq!(value["subCategories"], serde_json::json!([]));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("parentId").is_none());
    }

    #[test]
    fn test_sort_field_from_property() {
        assert_eq!(
            FoodCategorySortField::from_property("createdAt").map(|f| f.as_sql()),
            Some("created_at")
        );
        assert_eq!(
            FoodCategorySortField::from_property("isFinal").map(|f| f.as_sql()),
            Some("is_final")
        );
        assert_eq!(FoodCategorySortField::from_property("created_at"), None);
        assert_eq!(FoodCategorySortField::from_property("name; DROP"), None);
    }
}
