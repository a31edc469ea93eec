//! Shared constants for contactbook.
//!
//! Centralizes magic numbers used by the pipeline, storage and CLI.

/// Page size used when the caller omits `size` or sends garbage.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound on `size` (DoS protection).
pub const MAX_PAGE_SIZE: usize = 1000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Env var overriding [`DEFAULT_PAGE_SIZE`].
pub const DEFAULT_PAGE_SIZE_ENV: &str = "CONTACTBOOK_DEFAULT_PAGE_SIZE";

/// Env var overriding [`MAX_PAGE_SIZE`].
pub const MAX_PAGE_SIZE_ENV: &str = "CONTACTBOOK_MAX_PAGE_SIZE";
