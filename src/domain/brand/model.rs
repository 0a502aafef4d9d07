//! Brand domain entity

use chrono::{DateTime, Utc};

/// A vehicle manufacturer. Models and vehicles reference a brand by id.
#[derive(Debug, Clone)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Build a brand with a fresh uuid identity.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
