//! # Transactions & Unit of Work
//!
//! Batch operations run a loop of single-row operations inside ONE
//! transaction. The original system did this with an ambient transaction
//! scope wrapping the loop's lexical extent; here the transaction is an
//! explicit [`UnitOfWork`] value that the batch function begins, threads
//! through each single-row call, and commits once after the loop.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Batch Transaction Lifecycle                          │
//! │                                                                         │
//! │  UnitOfWork::begin(pool, isolation)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  loop: single-row operation on uow.conn()                              │
//! │       │                                                                 │
//! │       ├── all succeed ──► uow.commit()        (open → committed)       │
//! │       │                                                                 │
//! │       └── first error ──► uow.rollback()      (open → rolled back)     │
//! │                           (drop also rolls back, as a backstop)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry and no partial-success reporting: the first failure
//! aborts the whole batch.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::debug;

use crate::error::DbResult;

/// Isolation level for a batch transaction.
///
/// The batch operations of the system this layer replaces ran at
/// read-uncommitted, a deliberate consistency relaxation permitting dirty
/// reads. That choice is preserved here rather than silently upgraded:
/// callers pick the level per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolationLevel {
    /// Permits dirty reads of other connections' uncommitted writes.
    ///
    /// Maps to SQLite's `PRAGMA read_uncommitted`, which is only
    /// observable between connections sharing a cache; on a private-cache
    /// connection SQLite behaves serializably regardless. The relaxation
    /// is declared either way.
    #[default]
    ReadUncommitted,

    /// SQLite's default isolation.
    Serializable,
}

/// An explicit transactional unit of work over a pooled connection.
///
/// Wraps a sqlx transaction. Dropping an uncommitted `UnitOfWork` rolls
/// the transaction back; batch paths still call [`rollback`](Self::rollback)
/// explicitly so the connection's pragma state is restored before it
/// returns to the pool.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
    isolation: IsolationLevel,
}

impl UnitOfWork {
    /// Begins a transaction at the requested isolation level.
    pub async fn begin(pool: &SqlitePool, isolation: IsolationLevel) -> DbResult<Self> {
        let mut tx = pool.begin().await?;

        if isolation == IsolationLevel::ReadUncommitted {
            // Connection-scoped, not transaction-scoped: reset on
            // commit/rollback before the connection re-enters the pool.
            sqlx::query("PRAGMA read_uncommitted = ON")
                .execute(&mut *tx)
                .await?;
        }

        debug!(?isolation, "Began batch transaction");
        Ok(UnitOfWork { tx, isolation })
    }

    /// The connection to run single-row operations on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commits the unit of work.
    pub async fn commit(mut self) -> DbResult<()> {
        self.reset_pragma().await?;
        self.tx.commit().await?;
        debug!("Batch transaction committed");
        Ok(())
    }

    /// Rolls the unit of work back.
    pub async fn rollback(mut self) -> DbResult<()> {
        self.reset_pragma().await?;
        self.tx.rollback().await?;
        debug!("Batch transaction rolled back");
        Ok(())
    }

    async fn reset_pragma(&mut self) -> DbResult<()> {
        if self.isolation == IsolationLevel::ReadUncommitted {
            sqlx::query("PRAGMA read_uncommitted = OFF")
                .execute(&mut *self.tx)
                .await?;
        }
        Ok(())
    }
}
