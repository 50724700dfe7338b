//! # Visitor Repository
//!
//! Database operations for the visitor directory.
//!
//! ## Upsert Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Check-In: upsert                                  │
//! │                                                                         │
//! │  First visit:   INSERT → created_at = updated_at = now                 │
//! │                                                                         │
//! │  Repeat visit:  name/age refreshed, created_at untouched,              │
//! │                 updated_at = now                                        │
//! │                                                                         │
//! │  There is NO delete path: ledger rows reference visitors forever.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller validates the PESEL checksum before this repository is ever
//! reached; a malformed identifier never produces a write.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aquapass_core::Visitor;

/// Repository for visitor database operations.
#[derive(Debug, Clone)]
pub struct VisitorRepository {
    pool: SqlitePool,
}

impl VisitorRepository {
    /// Creates a new VisitorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VisitorRepository { pool }
    }

    /// Creates or refreshes a visitor record.
    ///
    /// One statement, one round trip: `ON CONFLICT` keeps `created_at`
    /// from the first visit and `RETURNING` hands back the stored row.
    pub async fn upsert(
        &self,
        pesel: &str,
        given_name: &str,
        family_name: &str,
        age: i64,
        now: NaiveDateTime,
    ) -> DbResult<Visitor> {
        // get() instead of slicing: the identifier normally holds ASCII
        // digits, but this method does not require that, and a log field
        // must never panic on a char boundary.
        debug!(pesel_prefix = pesel.get(..2).unwrap_or(pesel), "Upserting visitor");

        let visitor = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (pesel, given_name, family_name, age, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(pesel) DO UPDATE SET
                given_name = excluded.given_name,
                family_name = excluded.family_name,
                age = excluded.age,
                updated_at = excluded.updated_at
            RETURNING pesel, given_name, family_name, age, created_at, updated_at
            "#,
        )
        .bind(pesel)
        .bind(given_name.trim())
        .bind(family_name.trim())
        .bind(age)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(visitor)
    }

    /// Gets a visitor by PESEL.
    pub async fn get(&self, pesel: &str) -> DbResult<Option<Visitor>> {
        let visitor = sqlx::query_as::<_, Visitor>(
            r#"
            SELECT pesel, given_name, family_name, age, created_at, updated_at
            FROM visitors
            WHERE pesel = ?1
            "#,
        )
        .bind(pesel)
        .fetch_optional(&self.pool)
        .await?;

        Ok(visitor)
    }

    /// Number of registered visitors (facility status screen).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
