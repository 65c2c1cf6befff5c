use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A saved design. `user_id` is never populated by any creation path;
/// designs are not owned by accounts yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub prompt: String,
    pub generated_design: Option<Value>,
    pub created_at: String,
}

/// A validated design that has been stamped with its creation time and is
/// ready to be written by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignDraft {
    pub name: String,
    pub prompt: String,
    pub generated_design: Option<Value>,
    pub created_at: String,
}

/// Output of one generation call: four code variants plus suggestions.
///
/// Deserialization is lenient: fields the provider leaves out come back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedDesignResponse {
    pub html: String,
    pub css: String,
    pub jsx: String,
    pub tailwind: String,
    pub suggestions: Vec<String>,
}
