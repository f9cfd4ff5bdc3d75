/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User identifiers are opaque strings issued by the external identity
/// provider (the JWT `sub` claim), never database keys.
pub type UserId = String;
