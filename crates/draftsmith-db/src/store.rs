use draftsmith_types::models::{Design, DesignDraft, NewUser, User};

use crate::{Database, MemoryStore, StoreError};

/// Storage backend chosen once at startup.
pub enum Store {
    Memory(MemoryStore),
    Sqlite(Database),
}

macro_rules! dispatch {
    ($self:ident, $store:ident => $call:expr) => {
        match $self {
            Store::Memory($store) => $call,
            Store::Sqlite($store) => $call,
        }
    };
}

impl Store {
    pub fn kind(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::Sqlite(_) => "sqlite",
        }
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        dispatch!(self, s => s.get_user(id))
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        dispatch!(self, s => s.get_user_by_username(username))
    }

    pub fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        dispatch!(self, s => s.create_user(user))
    }

    pub fn get_all_designs(&self) -> Result<Vec<Design>, StoreError> {
        dispatch!(self, s => s.get_all_designs())
    }

    pub fn get_design(&self, id: i64) -> Result<Option<Design>, StoreError> {
        dispatch!(self, s => s.get_design(id))
    }

    pub fn create_design(&self, draft: DesignDraft) -> Result<Design, StoreError> {
        dispatch!(self, s => s.create_design(draft))
    }
}

impl From<MemoryStore> for Store {
    fn from(store: MemoryStore) -> Self {
        Store::Memory(store)
    }
}

impl From<Database> for Store {
    fn from(db: Database) -> Self {
        Store::Sqlite(db)
    }
}
