//! Domain-level constants.
//!
//! These constants define authentication rules and sample data shared by the services.

// =============================================================================
// Authentication
// =============================================================================

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;

/// Longest accepted access token lifetime in minutes (one year)
pub const MAX_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 365;

/// Default JWT signing algorithm
pub const DEFAULT_JWT_ALGORITHM: &str = "HS256";

/// Seconds per minute (for token expiration calculation)
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type reported by the token endpoint
pub const TOKEN_TYPE_BEARER: &str = "bearer";

// =============================================================================
// Notifications
// =============================================================================

/// Delivery status reported for every accepted notification
pub const NOTIFICATION_STATUS_SENT: &str = "SENT";
