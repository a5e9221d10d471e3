use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

/// Owner of the PostgreSQL connection pool.
///
/// The pool is created lazily: no connection is opened until the first
/// session asks for one.
pub struct DbEngine {
    pool: PgPool,
}

impl DbEngine {
    #[instrument(skip(url))]
    pub fn connect_lazy(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(url)?;

        info!("PostgreSQL connection pool configured");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hands out the session factory that request handlers and stores use.
    pub fn session_factory(&self) -> DbClient {
        DbClient {
            pool: self.pool.clone(),
        }
    }

    /// Closes the pool and waits for checked-out connections to return.
    /// Calling it again is a no-op.
    pub async fn dispose(&self) {
        if self.pool.is_closed() {
            return;
        }
        self.pool.close().await;
        info!("PostgreSQL connection pool disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// Session factory over the engine's pool. Cheap to clone.
#[derive(Clone)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
