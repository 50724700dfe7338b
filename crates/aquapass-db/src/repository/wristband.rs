//! # Wristband Repository
//!
//! Exclusive allocation and release of the finite wristband pool.
//!
//! ## Band Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Wristband Lifecycle                                │
//! │                                                                         │
//! │  1. REGISTER (provisioning)                                            │
//! │     └── register(serial) → band exists, free                           │
//! │                                                                         │
//! │  2. ALLOCATE (check-in)                                                │
//! │     └── allocate() → lowest free serial, visitor + entry set           │
//! │                                                                         │
//! │  3. RELEASE (check-out, after the ledger write)                        │
//! │     └── find_active(serial) → holder + entry time                      │
//! │     └── finalize_release(serial) → visitor cleared, exit set           │
//! │                                                                         │
//! │  4. Band is free again, eligible for reallocation                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Single Guarded Statements
//! `allocate` and `finalize_release` are each ONE conditional UPDATE.
//! SQLite executes a statement atomically, so two terminals sharing the
//! store can never claim the same free band, and two racing releases of
//! one serial yield exactly one success - without any explicit
//! transaction choreography here.
//!
//! Pool exhaustion and unknown/already-released serials are expected
//! business outcomes: `Option`/`bool` returns, never `DbError`.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use aquapass_core::{ActiveWristband, Wristband};

/// Repository for wristband pool operations.
#[derive(Debug, Clone)]
pub struct WristbandRepository {
    pool: SqlitePool,
}

impl WristbandRepository {
    /// Creates a new WristbandRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WristbandRepository { pool }
    }

    /// Adds a physical band to the pool (provisioning/seed).
    pub async fn register(&self, serial: i64) -> DbResult<()> {
        sqlx::query("INSERT INTO wristbands (serial) VALUES (?1)")
            .bind(serial)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Claims one free band for a visitor.
    ///
    /// Selection is deterministic (lowest free serial) so tests are
    /// reproducible. The `visitor_id IS NULL` guard re-checks the band
    /// inside the same statement that claims it.
    ///
    /// ## Returns
    /// * `Some(serial)` - the claimed band
    /// * `None` - pool exhausted, an expected recoverable outcome
    pub async fn allocate(
        &self,
        visitor_id: &str,
        entered_at: NaiveDateTime,
    ) -> DbResult<Option<i64>> {
        let serial: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE wristbands
            SET visitor_id = ?1, entered_at = ?2, exited_at = NULL
            WHERE serial = (
                SELECT serial FROM wristbands
                WHERE visitor_id IS NULL
                ORDER BY serial
                LIMIT 1
            )
            AND visitor_id IS NULL
            RETURNING serial
            "#,
        )
        .bind(visitor_id)
        .bind(entered_at)
        .fetch_optional(&self.pool)
        .await?;

        match serial {
            Some(serial) => info!(serial, "Wristband allocated"),
            None => debug!("Wristband pool exhausted"),
        }

        Ok(serial)
    }

    /// Looks up a currently occupied band with its holder.
    ///
    /// `None` covers an unknown serial and an already-released band alike;
    /// the two are indistinguishable to the caller and produce the same
    /// front-desk message.
    pub async fn find_active(&self, serial: i64) -> DbResult<Option<ActiveWristband>> {
        let active = sqlx::query_as::<_, ActiveWristband>(
            r#"
            SELECT w.serial, w.entered_at, w.visitor_id, v.given_name, v.family_name
            FROM wristbands w
            JOIN visitors v ON w.visitor_id = v.pesel
            WHERE w.serial = ?1
              AND w.visitor_id IS NOT NULL
              AND w.exited_at IS NULL
            "#,
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await?;

        Ok(active)
    }

    /// Clears the assignment and records the exit time.
    ///
    /// The entry time is kept as history of the most recent assignment.
    ///
    /// ## Returns
    /// * `true` - the band was active and is now released
    /// * `false` - no active band with this serial (unknown or already
    ///   released); the racing-release loser sees this
    pub async fn finalize_release(&self, serial: i64, exited_at: NaiveDateTime) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE wristbands
            SET visitor_id = NULL, exited_at = ?2
            WHERE serial = ?1 AND visitor_id IS NOT NULL
            "#,
        )
        .bind(serial)
        .bind(exited_at)
        .execute(&self.pool)
        .await?;

        let released = result.rows_affected() == 1;
        if released {
            info!(serial, "Wristband released");
        }

        Ok(released)
    }

    /// Gets a band by serial, any state.
    pub async fn get(&self, serial: i64) -> DbResult<Option<Wristband>> {
        let band = sqlx::query_as::<_, Wristband>(
            r#"
            SELECT serial, entered_at, exited_at, visitor_id
            FROM wristbands
            WHERE serial = ?1
            "#,
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await?;

        Ok(band)
    }

    /// Number of free bands.
    pub async fn count_free(&self) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM wristbands WHERE visitor_id IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Number of bands currently on visitors' wrists (status screen).
    pub async fn count_active(&self) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM wristbands WHERE visitor_id IS NOT NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    async fn test_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        // FK on wristbands.visitor_id needs real visitors.
        for (pesel, name) in [("44051401359", "Anna"), ("02070803628", "Jan")] {
            db.visitors()
                .upsert(pesel, name, "Testowa", 30, at(9))
                .await
                .unwrap();
        }
        db
    }

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_allocation_is_deterministic_lowest_serial() {
        let db = test_db().await;
        let repo = db.wristbands();
        for serial in [1003, 1001, 1002] {
            repo.register(serial).await.unwrap();
        }

        let first = repo.allocate("44051401359", at(10)).await.unwrap();
        assert_eq!(first, Some(1001));

        let second = repo.allocate("02070803628", at(10)).await.unwrap();
        assert_eq!(second, Some(1002));
    }

    #[tokio::test]
    async fn test_exhausted_pool_returns_none_never_a_duplicate() {
        let db = test_db().await;
        let repo = db.wristbands();
        for serial in 1001..=1003 {
            repo.register(serial).await.unwrap();
        }

        let mut claimed = Vec::new();
        for _ in 0..3 {
            claimed.push(repo.allocate("44051401359", at(10)).await.unwrap().unwrap());
        }
        claimed.sort_unstable();
        claimed.dedup();
        assert_eq!(claimed, vec![1001, 1002, 1003]);

        // The (N+1)-th allocation signals exhaustion, not an error.
        assert_eq!(repo.allocate("02070803628", at(10)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_active_and_release_round_trip() {
        let db = test_db().await;
        let repo = db.wristbands();
        repo.register(1001).await.unwrap();

        let serial = repo.allocate("44051401359", at(10)).await.unwrap().unwrap();

        let active = repo.find_active(serial).await.unwrap().unwrap();
        assert_eq!(active.entered_at, at(10));
        assert_eq!(active.visitor_name(), "Anna Testowa");

        assert!(repo.finalize_release(serial, at(12)).await.unwrap());

        let band = repo.get(serial).await.unwrap().unwrap();
        assert!(band.is_free());
        assert_eq!(band.exited_at, Some(at(12)));
        // Entry time of the finished assignment is kept.
        assert_eq!(band.entered_at, Some(at(10)));
    }

    #[tokio::test]
    async fn test_double_release_one_success_one_miss() {
        let db = test_db().await;
        let repo = db.wristbands();
        repo.register(1001).await.unwrap();
        repo.allocate("44051401359", at(10)).await.unwrap();

        assert!(repo.finalize_release(1001, at(12)).await.unwrap());
        assert!(!repo.finalize_release(1001, at(12)).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_active_unknown_and_released_look_the_same() {
        let db = test_db().await;
        let repo = db.wristbands();
        repo.register(1001).await.unwrap();

        // Unknown serial
        assert!(repo.find_active(9999).await.unwrap().is_none());

        // Released band
        repo.allocate("44051401359", at(10)).await.unwrap();
        repo.finalize_release(1001, at(12)).await.unwrap();
        assert!(repo.find_active(1001).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_released_band_is_reallocated_with_fresh_entry() {
        let db = test_db().await;
        let repo = db.wristbands();
        repo.register(1001).await.unwrap();

        repo.allocate("44051401359", at(10)).await.unwrap();
        repo.finalize_release(1001, at(12)).await.unwrap();

        let serial = repo.allocate("02070803628", at(14)).await.unwrap().unwrap();
        assert_eq!(serial, 1001);

        let band = repo.get(1001).await.unwrap().unwrap();
        assert!(band.is_active());
        assert_eq!(band.entered_at, Some(at(14)));
        // Old exit time cleared on reallocation.
        assert_eq!(band.exited_at, None);
    }

    #[tokio::test]
    async fn test_counts() {
        let db = test_db().await;
        let repo = db.wristbands();
        for serial in 1001..=1003 {
            repo.register(serial).await.unwrap();
        }

        repo.allocate("44051401359", at(10)).await.unwrap();

        assert_eq!(repo.count_free().await.unwrap(), 2);
        assert_eq!(repo.count_active().await.unwrap(), 1);
    }
}
