//! # Operator Repository
//!
//! Staff accounts for attribution (ledger rows, report log) and seeding.
//!
//! Authentication and password handling live OUTSIDE this system; a
//! collaborator verifies credentials and hands the core an [`Operator`].
//! User management itself is gated behind
//! [`OperatorRole::can_manage_operators`] at the call site.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aquapass_core::{Operator, OperatorRole};

/// Repository for operator accounts.
#[derive(Debug, Clone)]
pub struct OperatorRepository {
    pool: SqlitePool,
}

impl OperatorRepository {
    /// Creates a new OperatorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OperatorRepository { pool }
    }

    /// Creates a staff account, returning it with the generated id.
    pub async fn insert(
        &self,
        login: &str,
        given_name: &str,
        family_name: &str,
        role: OperatorRole,
    ) -> DbResult<Operator> {
        debug!(login, ?role, "Creating operator");

        let operator = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (login, given_name, family_name, role)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, login, given_name, family_name, role
            "#,
        )
        .bind(login)
        .bind(given_name)
        .bind(family_name)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(operator)
    }

    /// Gets an operator by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Operator>> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            SELECT id, login, given_name, family_name, role
            FROM operators
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operator)
    }

    /// Gets an operator by login (used by the external authenticator).
    pub async fn get_by_login(&self, login: &str) -> DbResult<Option<Operator>> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            SELECT id, login, given_name, family_name, role
            FROM operators
            WHERE login = ?1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operator)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
