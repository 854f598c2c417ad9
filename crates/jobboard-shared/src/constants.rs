//! Application-wide constants

pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;
pub const BCRYPT_COST: u32 = 10;
pub const RECENT_COMPANIES_LIMIT: i64 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const UPLOADS_ROUTE: &str = "/uploads";
pub const MEMORY_DATABASE_URL: &str = "memory://";
