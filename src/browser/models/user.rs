//! # User Record Model
//!
//! Immutable user values as delivered by the directory endpoint.
//! Field names follow the endpoint's camelCase JSON; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed gender enumeration carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase wire/display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address subset used by the country column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub state: String,
    pub country: String,
}

/// One fetched user
///
/// `id` is unique within a fetch result and is the stable row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub image: String,
    pub address: Address,
}

impl UserRecord {
    /// "First Last" as shown in the name column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `GET /users`
///
/// Only `users` is required; the paging counters are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<UserRecord>,
    pub total: Option<u32>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}
