/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default sort for list endpoints, encoded as `field,direction`
pub const DEFAULT_SORT: &str = "name,asc";
