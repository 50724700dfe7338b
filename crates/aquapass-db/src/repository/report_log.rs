//! # Report Log Repository
//!
//! Append-only audit trail of produced reports: which kind, on what date,
//! by which operator. Used for audit, never for billing.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aquapass_core::ReportKind;

/// Repository for the report audit log.
#[derive(Debug, Clone)]
pub struct ReportLogRepository {
    pool: SqlitePool,
}

impl ReportLogRepository {
    /// Creates a new ReportLogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportLogRepository { pool }
    }

    /// Logs that a report was produced. Called only after the grouped
    /// rows actually exist; an empty result is never logged.
    pub async fn log(
        &self,
        kind: ReportKind,
        generated_on: NaiveDate,
        operator_id: i64,
    ) -> DbResult<i64> {
        debug!(kind = kind.name(), "Logging report generation");

        let result = sqlx::query(
            r#"
            INSERT INTO report_log (generated_on, kind, operator_id)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(generated_on)
        .bind(kind.name())
        .bind(operator_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Number of logged reports.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM report_log")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
