use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use draftsmith_generator::OpenAiConfig;
use draftsmith_generator::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub storage: StorageKind,
    pub database_path: PathBuf,
    pub openai: OpenAiConfig,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match var("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HOST must be an IP address, got '{}'", raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => 3000,
        };

        let database_url = var("DATABASE_URL");
        let storage = match var("DRAFTSMITH_STORAGE").map(|s| s.to_ascii_lowercase()) {
            Some(s) if s == "memory" => StorageKind::Memory,
            Some(s) if s == "sqlite" => StorageKind::Sqlite,
            Some(other) => bail!("DRAFTSMITH_STORAGE must be 'memory' or 'sqlite', got '{}'", other),
            None if database_url.is_some() => StorageKind::Sqlite,
            None => StorageKind::Memory,
        };

        let database_path = database_url
            .as_deref()
            .map(strip_sqlite_scheme)
            .unwrap_or("draftsmith.db")
            .into();

        Ok(Self {
            host,
            port,
            storage,
            database_path,
            openai: OpenAiConfig {
                api_key: var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            },
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "dist".into()).into(),
        })
    }
}

fn strip_sqlite_scheme(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}
