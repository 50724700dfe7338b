//! # aquapass-service: Request-Boundary Facade for AquaPass
//!
//! The thin orchestration layer between the terminal GUI and the rest of
//! the system. Each public method is one front-desk request: validate,
//! call core logic, persist, and hand back either typed rows or a typed,
//! operator-readable error.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Front-Desk GUI / renderers                          │
//! └───────────────────────────────┬─────────────────────────────────────────┘
//! ┌───────────────────────────────▼─────────────────────────────────────────┐
//! │                  aquapass-service (THIS CRATE)                          │
//! │                                                                         │
//! │   FrontDesk::check_in     ── validate, upsert visitor, allocate band   │
//! │   FrontDesk::check_out    ── price stay, record ledger, release band   │
//! │   FrontDesk::report       ── grouped rows or EmptyReport               │
//! │   FrontDesk::status       ── counters for the status screen            │
//! │                                                                         │
//! └───────────────┬─────────────────────────────────┬───────────────────────┘
//! ┌───────────────▼───────────────┐ ┌───────────────▼───────────────────────┐
//! │        aquapass-core          │ │            aquapass-db                │
//! │   tariff, pesel, validation   │ │   repositories over SQLite            │
//! └───────────────────────────────┘ └───────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aquapass_db::{Database, DbConfig};
//! use aquapass_service::FrontDesk;
//!
//! let db = Database::new(DbConfig::new("./aquapass.db")).await?;
//! let desk = FrontDesk::new(db);
//!
//! let checked_in = desk.check_in(&operator, "Anna", "Nowak", 34, "44051401359").await?;
//! println!("hand over band {}", checked_in.serial);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod front_desk;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, ServiceResult};
pub use front_desk::{CheckIn, FacilityStatus, FrontDesk, ReportRows};
