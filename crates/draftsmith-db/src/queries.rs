use draftsmith_types::models::{Design, DesignDraft, NewUser, User};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};
use tracing::debug;

use crate::models::{DesignRow, UserRow};
use crate::{Database, StoreError};

const DESIGN_COLUMNS: &str = "id, user_id, name, prompt, generated_design, created_at";

impl Database {
    // -- Users --

    pub fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO users (username, password) VALUES (?1, ?2)",
                (&user.username, &user.password),
            );

            match inserted {
                Ok(_) => {}
                Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                    return Err(StoreError::DuplicateUsername(user.username));
                }
                Err(e) => return Err(e.into()),
            }

            Ok(User {
                id: conn.last_insert_rowid(),
                username: user.username,
                password: user.password,
            })
        })
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.with_conn(|conn| {
            query_user(conn, "SELECT id, username, password FROM users WHERE id = ?1", id)
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.with_conn(|conn| {
            query_user(
                conn,
                "SELECT id, username, password FROM users WHERE username = ?1",
                username,
            )
        })
    }

    // -- Designs --

    pub fn create_design(&self, draft: DesignDraft) -> Result<Design, StoreError> {
        let generated_design = draft.generated_design.filter(|v| !v.is_null());
        let stored_json = generated_design.as_ref().map(|v| v.to_string());

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO designs (user_id, name, prompt, generated_design, created_at)
                 VALUES (NULL, ?1, ?2, ?3, ?4)",
                rusqlite::params![&draft.name, &draft.prompt, stored_json, &draft.created_at],
            )?;
            let id = conn.last_insert_rowid();
            debug!("Inserted design {}", id);

            Ok(Design {
                id,
                user_id: None,
                name: draft.name,
                prompt: draft.prompt,
                generated_design,
                created_at: draft.created_at,
            })
        })
    }

    pub fn get_design(&self, id: i64) -> Result<Option<Design>, StoreError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!("SELECT {DESIGN_COLUMNS} FROM designs WHERE id = ?1"),
                    [id],
                    design_row,
                )
                .optional()?;

            row.map(Design::try_from).transpose()
        })
    }

    pub fn get_all_designs(&self) -> Result<Vec<Design>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {DESIGN_COLUMNS} FROM designs ORDER BY id"))?;

            let rows = stmt
                .query_map([], design_row)?
                .collect::<Result<Vec<_>, _>>()?;

            rows.into_iter().map(Design::try_from).collect()
        })
    }
}

fn query_user<P: rusqlite::ToSql>(
    conn: &Connection,
    sql: &str,
    key: P,
) -> Result<Option<User>, StoreError> {
    let row = conn
        .query_row(sql, [key], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row.map(User::from))
}

fn design_row(row: &Row<'_>) -> rusqlite::Result<DesignRow> {
    Ok(DesignRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        prompt: row.get(3)?,
        generated_design: row.get(4)?,
        created_at: row.get(5)?,
    })
}
