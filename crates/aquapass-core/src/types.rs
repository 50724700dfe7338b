//! # Domain Types
//!
//! Core domain types used throughout AquaPass.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Visitor      │   │    Wristband    │   │   LedgerEntry   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  pesel (ID)     │   │  serial         │   │  id (rowid)     │       │
//! │  │  given_name     │   │  entered_at     │   │  amount_cents   │       │
//! │  │  family_name    │   │  exited_at      │   │  paid_at        │       │
//! │  │  age            │   │  visitor_id     │   │  method         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PaymentMethod  │   │  OperatorRole   │   │   ReportKind    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Cash           │   │  FrontDesk      │   │  Financial      │       │
//! │  │  Card           │   │  Manager        │   │  Usage          │       │
//! │  │  Blik           │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - Visitors are keyed by PESEL (externally validated, see [`crate::pesel`])
//! - Wristbands are keyed by their physical serial number
//! - Ledger entries get a monotonically increasing id from the store

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Visitor
// =============================================================================

/// A registered visitor.
///
/// Created on first check-in, refreshed (name/age) on repeat visits.
/// Never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Visitor {
    /// National identifier, validated by checksum before any write.
    pub pesel: String,
    pub given_name: String,
    pub family_name: String,
    pub age: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Visitor {
    /// Display name for receipts and summaries.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

// =============================================================================
// Wristband
// =============================================================================

/// A reusable NFC wristband from the facility's finite pool.
///
/// ## Lifecycle
/// ```text
/// free (visitor_id NULL) ──allocate──► active (visitor set, entry set,
///        ▲                             exit NULL)
///        │                                │
///        └────────────release─────────────┘
///              (visitor cleared, exit set; entry kept for history)
/// ```
///
/// ## Invariant
/// A band is free iff `visitor_id` is `None`; it is never assigned to two
/// visitors at once, and never carries an exit time without an entry time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Wristband {
    /// Physical serial number printed on the band.
    pub serial: i64,
    pub entered_at: Option<NaiveDateTime>,
    pub exited_at: Option<NaiveDateTime>,
    /// PESEL of the current holder, `None` when the band is free.
    pub visitor_id: Option<String>,
}

impl Wristband {
    /// A band is free and eligible for allocation iff nobody holds it.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.visitor_id.is_none()
    }

    /// A band is active when held and not yet released.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.visitor_id.is_some() && self.exited_at.is_none()
    }
}

/// An occupied wristband joined with its holder, as returned by the
/// active-band lookup at check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ActiveWristband {
    pub serial: i64,
    pub entered_at: NaiveDateTime,
    pub visitor_id: String,
    pub given_name: String,
    pub family_name: String,
}

impl ActiveWristband {
    pub fn visitor_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a visit was paid for.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on the external terminal.
    Card,
    /// BLIK mobile transfer.
    Blik,
}

// =============================================================================
// Ledger
// =============================================================================

/// An immutable, completed-visit transaction as stored in the ledger.
///
/// Rows are never mutated or deleted after insertion; the id is assigned
/// by the store's auto-increment at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LedgerEntry {
    pub id: i64,
    pub amount_cents: i64,
    pub paid_at: NaiveDateTime,
    pub method: PaymentMethod,
    pub visitor_id: String,
    pub operator_id: i64,
}

impl LedgerEntry {
    /// Returns the billed amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// A transaction about to be recorded; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    pub amount_cents: i64,
    pub paid_at: NaiveDateTime,
    pub method: PaymentMethod,
    pub visitor_id: String,
    pub operator_id: i64,
}

// =============================================================================
// Operator
// =============================================================================

/// Capability tier of a staff member.
///
/// A tagged variant instead of a free-form role string: the call site that
/// needs elevated access checks `can_manage_operators()` explicitly rather
/// than comparing strings.
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorRole {
    /// Handles check-in, check-out and reports.
    FrontDesk,
    /// Additionally manages staff accounts.
    Manager,
}

impl OperatorRole {
    /// Whether this role may create or modify staff accounts.
    #[inline]
    pub fn can_manage_operators(&self) -> bool {
        matches!(self, OperatorRole::Manager)
    }
}

/// The authenticated staff member performing an action.
///
/// Authentication itself is an external collaborator; the core only
/// threads this reference through for attribution - it is a request
/// parameter, never ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Operator {
    pub id: i64,
    pub login: String,
    pub given_name: String,
    pub family_name: String,
    pub role: OperatorRole,
}

// =============================================================================
// Reports
// =============================================================================

/// Which aggregation a report request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Revenue per (calendar day, payment method).
    Financial,
    /// Spend per visitor.
    Usage,
}

impl ReportKind {
    /// Parses the kind from operator input; `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "financial" => Some(ReportKind::Financial),
            "usage" => Some(ReportKind::Usage),
            _ => None,
        }
    }

    /// Storage/display name, also used by the report audit log.
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Financial => "financial",
            ReportKind::Usage => "usage",
        }
    }
}

/// One row of the financial report: revenue for a day and payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FinancialRow {
    pub day: NaiveDate,
    pub method: PaymentMethod,
    pub total_cents: i64,
}

impl FinancialRow {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One row of the usage report: total spend of one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UsageRow {
    pub visitor_id: String,
    pub total_cents: i64,
}

impl UsageRow {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Visit Summary
// =============================================================================

/// Everything the check-out screen and the receipt renderer need about a
/// finished visit. Serialization is the hand-off point; rendering itself
/// is an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitSummary {
    pub serial: i64,
    pub visitor_name: String,
    pub entered_at: NaiveDateTime,
    pub exited_at: NaiveDateTime,
    /// Whole stay rounded up to full hours (receipt line, not billing).
    pub billed_hours: i64,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    /// Ledger id of the recorded transaction.
    pub transaction_id: i64,
}

impl VisitSummary {
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
