use std::env;
use std::time::Duration;

use crate::features::food_categories::models::ParentResolutionMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub categories: CategoryConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Behavior of the food category feature
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    /// How a requested parent id is turned into the stored parent id
    pub parent_resolution: ParentResolutionMode,
    /// Lifetime of cached reads. `None` disables the cache.
    pub cache_ttl: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            categories: CategoryConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Food Categories API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Hierarchical food category catalogue".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl CategoryConfig {
    const DEFAULT_CACHE_TTL_SECS: u64 = 300; // 5 minutes

    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Parse from any key lookup, `from_env` passes the process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let parent_resolution = lookup("PARENT_RESOLUTION_MODE")
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<ParentResolutionMode>())
            .transpose()?
            .unwrap_or_default();

        let cache_ttl_secs = lookup("CATEGORY_CACHE_TTL_SECS")
            .unwrap_or_else(|| Self::DEFAULT_CACHE_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CATEGORY_CACHE_TTL_SECS must be a valid number".to_string())?;

        // 0 turns the cache off
        let cache_ttl = (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs));

        Ok(Self {
            parent_resolution,
            cache_ttl,
        })
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            parent_resolution: ParentResolutionMode::default(),
            cache_ttl: Some(Duration::from_secs(Self::DEFAULT_CACHE_TTL_SECS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_category_config_default_is_faithful_mode_with_cache() {
        let config = CategoryConfig::default();
        assert_eq!(config.parent_resolution, ParentResolutionMode::Sibling);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(300)));
    }

    fn category_config(vars: &[(&str, &str)]) -> Result<CategoryConfig, String> {
        CategoryConfig::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn test_category_config_from_vars() {
        let config = category_config(&[]).unwrap();
        assert_eq!(config.parent_resolution, ParentResolutionMode::Sibling);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(300)));

        let config = category_config(&[
            ("PARENT_RESOLUTION_MODE", "Child"),
            ("CATEGORY_CACHE_TTL_SECS", "45"),
        ])
        .unwrap();
        assert_eq!(config.parent_resolution, ParentResolutionMode::Child);
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(45)));

        let config = category_config(&[("PARENT_RESOLUTION_MODE", "")]).unwrap();
        assert_eq!(config.parent_resolution, ParentResolutionMode::Sibling);
    }

    #[test]
    fn test_category_config_zero_ttl_disables_cache() {
        let config = category_config(&[("CATEGORY_CACHE_TTL_SECS", "0")]).unwrap();
        assert_eq!(config.cache_ttl, None);
    }

    #[test]
    fn test_category_config_rejects_bad_values() {
        let err = category_config(&[("PARENT_RESOLUTION_MODE", "nephew")]).unwrap_err();
        assert!(err.contains("PARENT_RESOLUTION_MODE"));

        let err = category_config(&[("CATEGORY_CACHE_TTL_SECS", "soon")]).unwrap_err();
        assert!(err.contains("CATEGORY_CACHE_TTL_SECS"));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }
}
