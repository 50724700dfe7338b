//! # aquapass-core: Pure Business Logic for AquaPass
//!
//! This crate is the **heart** of AquaPass, the pool facility access and
//! billing system. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AquaPass Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Front-Desk GUI                              │   │
//! │  │     Check-In Form ──► Check-Out Form ──► Report Dialog         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  aquapass-service (facade)                      │   │
//! │  │        check_in, check_out, report, status                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aquapass-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  tariff   │  │   pesel   │  │   │
//! │  │   │  Visitor  │  │   Money   │  │  segment  │  │ checksum  │  │   │
//! │  │   │ Wristband │  │  grosze   │  │   walk    │  │ validate  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  aquapass-db (Database Layer)                   │   │
//! │  │             SQLite queries, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Visitor, Wristband, LedgerEntry, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tariff`] - The hour-segment billing walk
//! - [`pesel`] - National identifier checksum
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation run before any state mutation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in grosze (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use aquapass_core::tariff::Tariff;
//! use chrono::NaiveDate;
//!
//! // Tuesday 15:30 - 17:30 crosses the 16:00 rate change
//! let entry = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap().and_hms_opt(15, 30, 0).unwrap();
//! let exit = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap().and_hms_opt(17, 30, 0).unwrap();
//!
//! let cost = Tariff::default().cost(entry, exit).unwrap();
//!
//! // 10 (started day hour) + 14 (evening hour) + 14 (started evening hour)
//! assert_eq!(cost.cents(), 3800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pesel;
pub mod tariff;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aquapass_core::Money` instead of
// `use aquapass_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use tariff::{billed_hours, Tariff};
pub use types::*;
