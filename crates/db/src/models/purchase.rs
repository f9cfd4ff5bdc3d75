//! Purchase records.

use courseforge_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `purchases` table. A purchase grants the user access to
/// the course's paid chapters; the payment itself is handled by the
/// external processor before this row is written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub user_id: UserId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}
