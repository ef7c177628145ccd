use std::fmt::Display;
use std::str::FromStr;

use tally_core::error::{Result, TallyError};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub listen: String,

    pub spa: SpaSection,
    pub store: StoreSection,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_var(lookup, "PORT", default_port())?;

        Ok(Self {
            listen: format!("0.0.0.0:{port}"),
            spa: SpaSection::from_lookup(lookup),
            store: StoreSection::from_lookup(lookup)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.store.validate()?;
        if self.spa.static_dir.is_empty() {
            return Err(TallyError::BadRequest("STATIC_DIR must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SpaSection {
    /// Directory the SPA assets are served from.
    pub static_dir: String,
}

impl SpaSection {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            static_dir: lookup("STATIC_DIR").unwrap_or_else(default_static_dir),
        }
    }
}

impl Default for SpaSection {
    fn default() -> Self {
        Self { static_dir: default_static_dir() }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSection {
    pub host: String,
    pub port: u16,
    pub db: i64,
    /// Empty `REDIS_PASSWORD` is treated as unset.
    pub password: Option<String>,

    /// Connection attempts before startup gives up.
    pub connect_retries: u32,
    /// Fixed delay between connection attempts.
    pub connect_backoff_ms: u64,
}

impl StoreSection {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("REDIS_HOST").unwrap_or_else(default_store_host),
            port: parse_var(lookup, "REDIS_PORT", default_store_port())?,
            db: parse_var(lookup, "REDIS_DB", default_store_db())?,
            password: lookup("REDIS_PASSWORD").filter(|p| !p.is_empty()),
            connect_retries: default_connect_retries(),
            connect_backoff_ms: default_connect_backoff_ms(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(TallyError::BadRequest("REDIS_HOST must not be empty".into()));
        }
        if self.db < 0 {
            return Err(TallyError::BadRequest("REDIS_DB must not be negative".into()));
        }
        if self.connect_retries == 0 {
            return Err(TallyError::BadRequest(
                "store.connect_retries must be at least 1".into(),
            ));
        }
        if !(100..=60_000).contains(&self.connect_backoff_ms) {
            return Err(TallyError::BadRequest(
                "store.connect_backoff_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            host: default_store_host(),
            port: default_store_port(),
            db: default_store_db(),
            password: None,
            connect_retries: default_connect_retries(),
            connect_backoff_ms: default_connect_backoff_ms(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| TallyError::BadRequest(format!("{name} is invalid: {e}"))),
    }
}

fn default_port() -> u16 {
    8000
}
fn default_static_dir() -> String {
    "static".into()
}
fn default_store_host() -> String {
    "redis".into()
}
fn default_store_port() -> u16 {
    6379
}
fn default_store_db() -> i64 {
    0
}
fn default_connect_retries() -> u32 {
    5
}
fn default_connect_backoff_ms() -> u64 {
    1000
}
