//! Redis-backed counter store.
//!
//! Built once at startup with a bounded connect-retry loop (containers often
//! start before their Redis does), then handed to handlers through
//! `AppState`. The multiplexed connection is cheap to clone per operation.
//!
//! The floored decrement runs as a single server-side script so concurrent
//! decrements can never both observe a negative value.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError, Script};
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use tally_core::error::{Result, TallyError};

use crate::config::StoreSection;
use crate::store::{CounterStore, COUNTER_KEY};

/// DECR, then compensate inside the same script if we went below zero.
/// Returns the new value, or -1 to signal the floor was hit.
const DECR_FLOORED: &str = r#"
local v = redis.call('DECR', KEYS[1])
if v < 0 then
  redis.call('INCR', KEYS[1])
  return -1
end
return v
"#;

pub struct RedisStore {
    conn: MultiplexedConnection,
    decr_floored: Script,
}

impl RedisStore {
    /// Connect to Redis, retrying up to `connect_retries` times with a fixed
    /// delay. Each attempt is verified with a PING before it counts.
    pub async fn connect(cfg: &StoreSection) -> Result<Self> {
        let client = Client::open(connection_info(cfg)).map_err(store_err)?;

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match try_connect(&client).await {
                Ok(conn) => {
                    info!(host = %cfg.host, port = cfg.port, db = cfg.db, "connected to store");
                    return Ok(Self { conn, decr_floored: Script::new(DECR_FLOORED) });
                }
                Err(e) if attempt < cfg.connect_retries => {
                    warn!(attempt, retries = cfg.connect_retries, error = %e, "store not ready, retrying");
                    sleep(Duration::from_millis(cfg.connect_backoff_ms)).await;
                }
                Err(e) => {
                    return Err(TallyError::Store(format!(
                        "store unreachable after {attempt} attempts: {e}"
                    )));
                }
            }
        }
    }
}

async fn try_connect(client: &Client) -> redis::RedisResult<MultiplexedConnection> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(conn)
}

fn connection_info(cfg: &StoreSection) -> redis::ConnectionInfo {
    redis::ConnectionInfo {
        addr: redis::ConnectionAddr::Tcp(cfg.host.clone(), cfg.port),
        redis: redis::RedisConnectionInfo {
            db: cfg.db,
            username: None,
            password: cfg.password.clone(),
        },
    }
}

fn store_err(e: RedisError) -> TallyError {
    TallyError::Store(e.to_string())
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn ensure_exists(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(COUNTER_KEY).await.map_err(store_err)?;
        if !exists {
            debug!(key = COUNTER_KEY, "initializing counter");
            let _: () = conn.set(COUNTER_KEY, 0).await.map_err(store_err)?;
        }
        Ok(())
    }

    async fn get(&self) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: Option<i64> = conn.get(COUNTER_KEY).await.map_err(store_err)?;
        Ok(value.unwrap_or(0))
    }

    async fn increment(&self) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.incr(COUNTER_KEY, 1).await.map_err(store_err)?;
        Ok(value)
    }

    async fn decrement(&self) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = self
            .decr_floored
            .key(COUNTER_KEY)
            .invoke_async(&mut conn)
            .await
            .map_err(store_err)?;
        if value < 0 {
            return Err(TallyError::NegativeCounter);
        }
        Ok(value)
    }

    async fn reset(&self) -> Result<i64> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(COUNTER_KEY, 0).await.map_err(store_err)?;
        Ok(0)
    }
}
