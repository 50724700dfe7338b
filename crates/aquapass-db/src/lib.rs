//! # aquapass-db: Database Layer for AquaPass
//!
//! This crate provides database access for the AquaPass front-desk system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AquaPass Data Flow                               │
//! │                                                                         │
//! │  Service call (check_in / check_out / report)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    aquapass-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ VisitorRepo   │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ WristbandRepo │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │    │ LedgerRepo    │    │              │  │   │
//! │  │   │ Management    │    │ ...           │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (WAL) - the source of truth for the wristband pool    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (visitor, wristband, ...)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aquapass_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/aquapass.db")).await?;
//!
//! let serial = db.wristbands().allocate("44051401359", now).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::ledger::LedgerRepository;
pub use repository::operator::OperatorRepository;
pub use repository::report_log::ReportLogRepository;
pub use repository::visitor::VisitorRepository;
pub use repository::wristband::WristbandRepository;
