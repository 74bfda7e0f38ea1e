//! Author record and its create/update inputs.
//! Rust fields match the snake_case columns; the API sees camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

/// Validated body of `POST /author`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateAuthor {
    pub first_name: String,
    pub last_name: String,
}

/// Validated body of `PATCH /author/:id`. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    pub fn apply_to(&self, author: &mut Author) {
        if let Some(first_name) = &self.first_name {
            author.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            author.last_name = last_name.clone();
        }
    }
}

/// Instantiated author that has not been persisted yet: no id, no timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorDraft {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateAuthor> for AuthorDraft {
    fn from(input: CreateAuthor) -> Self {
        AuthorDraft {
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

/// `2023-10-08T00:00:00.000Z`: UTC, always three fractional digits.
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}
