use std::collections::BTreeMap;
use std::sync::Mutex;

use draftsmith_types::models::{Design, DesignDraft, NewUser, User};

use crate::StoreError;

/// Volatile store. Everything is lost when the process exits.
///
/// Ids start at 1 and come from per-table counters, so iteration over the
/// `BTreeMap`s yields records in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    designs: BTreeMap<i64, Design>,
    last_user_id: i64,
    last_design_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_inner<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Inner) -> T,
    {
        let mut inner = self.inner.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&mut inner))
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.with_inner(|inner| inner.users.get(&id).cloned())
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.with_inner(|inner| {
            inner
                .users
                .values()
                .find(|u| u.username == username)
                .cloned()
        })
    }

    pub fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.with_inner(|inner| {
            if inner.users.values().any(|u| u.username == user.username) {
                return Err(StoreError::DuplicateUsername(user.username));
            }

            inner.last_user_id += 1;
            let user = User {
                id: inner.last_user_id,
                username: user.username,
                password: user.password,
            };
            inner.users.insert(user.id, user.clone());
            Ok(user)
        })?
    }

    pub fn get_all_designs(&self) -> Result<Vec<Design>, StoreError> {
        self.with_inner(|inner| inner.designs.values().cloned().collect())
    }

    pub fn get_design(&self, id: i64) -> Result<Option<Design>, StoreError> {
        self.with_inner(|inner| inner.designs.get(&id).cloned())
    }

    pub fn create_design(&self, draft: DesignDraft) -> Result<Design, StoreError> {
        self.with_inner(|inner| {
            inner.last_design_id += 1;
            let design = Design {
                id: inner.last_design_id,
                user_id: None,
                name: draft.name,
                prompt: draft.prompt,
                generated_design: draft.generated_design.filter(|v| !v.is_null()),
                created_at: draft.created_at,
            };
            inner.designs.insert(design.id, design.clone());
            design
        })
    }
}
