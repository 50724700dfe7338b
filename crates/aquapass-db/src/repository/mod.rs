//! # Repository Module
//!
//! Repository implementations for database operations.
//!
//! ## Repository Pattern
//! Each entity gets its own repository handling its SQL. Repositories are
//! cheap to construct (pool clone) and are handed out by
//! [`crate::pool::Database`] per request.
//!
//! - [`visitor`] - Visitor directory (upsert by PESEL)
//! - [`wristband`] - Exclusive allocation/release of the band pool
//! - [`ledger`] - Append-only transaction ledger and its aggregations
//! - [`operator`] - Staff accounts for attribution
//! - [`report_log`] - Audit trail of produced reports

pub mod ledger;
pub mod operator;
pub mod report_log;
pub mod visitor;
pub mod wristband;
