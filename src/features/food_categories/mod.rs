//! Hierarchical food categories.
//!
//! Categories form a flat parent-pointer table. Writes resolve the requested
//! parent through [`services::parent_resolver::ParentResolver`]; the tree
//! endpoint assembles the nested hierarchy per root.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/food-categories` | Create a category |
//! | GET | `/api/food-categories` | Paginated, sorted listing |
//! | GET | `/api/food-categories/tree` | Full hierarchy |
//! | GET | `/api/food-categories/{id}` | Single category |
//! | PUT | `/api/food-categories/{id}` | Replace a category |
//! | DELETE | `/api/food-categories/{id}` | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use services::FoodCategoryService;
