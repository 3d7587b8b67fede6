use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database. Serialized as-is in responses, hash
/// included, to keep the existing API contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>, // NULL for users created without a password
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
