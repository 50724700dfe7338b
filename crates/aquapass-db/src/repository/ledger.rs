//! # Ledger Repository
//!
//! The append-only ledger of completed, priced visits, and the grouped
//! queries reports are built from.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ledger Write Path                                  │
//! │                                                                         │
//! │  check-out ──► record(NewLedgerEntry)                                  │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │            ONE INSERT, all-or-nothing                                  │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │            id = last_insert_rowid()                                    │
//! │            (AUTOINCREMENT: monotonic, never reused)                    │
//! │                                                                         │
//! │  Rows are NEVER updated or deleted afterwards.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! Aggregation is pushed down to SQL as typed GROUP BY queries; callers
//! get strongly-typed rows, never positional tuples.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aquapass_core::{FinancialRow, LedgerEntry, NewLedgerEntry, UsageRow};

/// Repository for the transaction ledger.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Records a completed visit as an immutable transaction.
    ///
    /// A single INSERT: either the row commits and the generated id is
    /// returned, or nothing is observable. Id generation is delegated to
    /// the store's AUTOINCREMENT and read back from the same connection.
    pub async fn record(&self, entry: &NewLedgerEntry) -> DbResult<i64> {
        debug!(amount_cents = entry.amount_cents, "Recording transaction");

        let result = sqlx::query(
            r#"
            INSERT INTO transactions (amount_cents, paid_at, method, visitor_id, operator_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(entry.amount_cents)
        .bind(entry.paid_at)
        .bind(entry.method)
        .bind(&entry.visitor_id)
        .bind(entry.operator_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Gets a transaction by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<LedgerEntry>> {
        let entry = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT id, amount_cents, paid_at, method, visitor_id, operator_id
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Transactions with `paid_at` in the half-open interval
    /// `[from, until)`, chronological, ties broken by insertion order.
    ///
    /// Half-open because `paid_at` carries fractional seconds: an
    /// inclusive upper bound at `23:59:59` would drop a payment clocked
    /// inside the final second of the day. Callers pass the first
    /// instant NOT covered (usually the next midnight).
    pub async fn in_range(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> DbResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            r#"
            SELECT id, amount_cents, paid_at, method, visitor_id, operator_id
            FROM transactions
            WHERE paid_at >= ?1 AND paid_at < ?2
            ORDER BY paid_at, id
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Revenue per (calendar day, payment method) over `[from, until)`,
    /// ordered by day then method.
    pub async fn financial_report(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> DbResult<Vec<FinancialRow>> {
        let rows = sqlx::query_as::<_, FinancialRow>(
            r#"
            SELECT DATE(paid_at) AS day, method, SUM(amount_cents) AS total_cents
            FROM transactions
            WHERE paid_at >= ?1 AND paid_at < ?2
            GROUP BY day, method
            ORDER BY day, method
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total spend per visitor over `[from, until)`. Row order is
    /// unspecified (set semantics).
    pub async fn usage_report(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> DbResult<Vec<UsageRow>> {
        let rows = sqlx::query_as::<_, UsageRow>(
            r#"
            SELECT visitor_id, SUM(amount_cents) AS total_cents
            FROM transactions
            WHERE paid_at >= ?1 AND paid_at < ?2
            GROUP BY visitor_id
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
