//! Server config loader (env-backed, strict parsing).

pub mod schema;

use std::env;

use tally_core::error::Result;

pub use schema::{ServerConfig, SpaSection, StoreSection};

/// Load config from the process environment.
pub fn load_from_env() -> Result<ServerConfig> {
    load_from_lookup(|name| env::var(name).ok())
}

/// Load config through an arbitrary variable lookup. Lets tests inject an
/// environment without touching the process-global one.
pub fn load_from_lookup<F>(lookup: F) -> Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = ServerConfig::from_lookup(&lookup)?;
    cfg.validate()?;
    Ok(cfg)
}
