use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a food category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FoodCategory {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Marks a leaf category. Not enforced against child creation.
    pub is_final: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodCategory {
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub is_final: bool,
}

/// How a requested parent id becomes the stored parent id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParentResolutionMode {
    /// The row takes the requested parent's own parent, ending up as a sibling
    /// of the requested parent. This is the historical behavior of the service.
    #[default]
    Sibling,
    /// The row is attached directly under the requested parent
    Child,
}

impl FromStr for ParentResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sibling" => Ok(Self::Sibling),
            "child" => Ok(Self::Child),
            other => Err(format!(
                "PARENT_RESOLUTION_MODE must be 'sibling' or 'child', got '{}'",
                other
            )),
        }
    }
}

impl fmt::Display for ParentResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sibling => write!(f, "sibling"),
            Self::Child => write!(f, "child"),
        }
    }
}
