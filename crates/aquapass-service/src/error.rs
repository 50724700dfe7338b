//! # Service Error Types
//!
//! Every error crossing the request boundary, in operator-readable form.
//!
//! ## Expected vs. Unexpected
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Two Families of Outcomes                            │
//! │                                                                         │
//! │  EXPECTED (is_expected() == true)      UNEXPECTED                       │
//! │  ──────────────────────────────        ──────────────────────────       │
//! │  Normal front-desk situations;         Bugs, bad input or a broken      │
//! │  the GUI shows a calm message.         store; logged as errors.         │
//! │                                                                         │
//! │  • NoWristbandAvailable                • Validation                     │
//! │  • NoActiveWristband                   • Billing (reversed interval)    │
//! │  • EmptyReport                         • Database                       │
//! │                                        • NotAuthorized                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use aquapass_core::{CoreError, ValidationError};
use aquapass_db::DbError;

/// Error type for front-desk operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Every wristband is on someone's wrist. The visitor waits; nothing
    /// was written except the visitor record itself.
    #[error("no wristband available - the pool is exhausted")]
    NoWristbandAvailable,

    /// No active band with this serial: unknown, or already returned.
    /// The two cases are deliberately indistinguishable.
    #[error("no active wristband with serial {serial}")]
    NoActiveWristband { serial: i64 },

    /// The requested period contains no transactions. Not a failure;
    /// the GUI shows "nothing to report" and nothing is logged.
    #[error("no transactions between {from} and {to}")]
    EmptyReport { from: String, to: String },

    /// Operator typed a report kind the system does not produce.
    #[error("unknown report kind '{given}' (expected 'financial' or 'usage')")]
    UnknownReportKind { given: String },

    /// The acting operator's role does not permit this action.
    #[error("operator '{login}' is not authorized to manage staff accounts")]
    NotAuthorized { login: String },

    /// Request rejected before any state was touched.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Billing could not price the visit (e.g. exit before entry, which
    /// means the terminal clock is wrong).
    #[error("billing failed: {0}")]
    Billing(#[from] CoreError),

    /// The backing store failed; the band stays in whatever state the
    /// last completed statement left it.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl ServiceError {
    /// Whether this outcome is part of normal front-desk operation.
    ///
    /// Expected outcomes are logged at info/debug and rendered as plain
    /// messages; everything else is an error worth an operator escalation.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ServiceError::NoWristbandAvailable
                | ServiceError::NoActiveWristband { .. }
                | ServiceError::EmptyReport { .. }
        )
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Unit Tests
// =============================================================================
