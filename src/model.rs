//! Example entity and request payload.

use serde::{Deserialize, Serialize};

/// One stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Example {
    pub id: i64,
    pub name: String,
}

/// Body for create and update; `name` is the only writable field.
#[derive(Debug, Deserialize)]
pub struct ExamplePayload {
    pub name: String,
}
