//! Database row types. `generated_design` stays as raw JSON text until it is
//! turned into an API [`Design`].

use draftsmith_types::models::{Design, User};

use crate::StoreError;

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
}

pub struct DesignRow {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub prompt: String,
    pub generated_design: Option<String>,
    pub created_at: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
        }
    }
}

impl TryFrom<DesignRow> for Design {
    type Error = StoreError;

    fn try_from(row: DesignRow) -> Result<Self, Self::Error> {
        let generated_design = row
            .generated_design
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .map_err(|source| StoreError::Json { id: row.id, source })?;

        Ok(Design {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            prompt: row.prompt,
            generated_design,
            created_at: row.created_at,
        })
    }
}
