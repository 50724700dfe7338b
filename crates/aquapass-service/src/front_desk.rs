//! # Front Desk Facade
//!
//! The three request handlers the terminal GUI calls, plus the status
//! screen and staff-account management.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Front Desk Requests                              │
//! │                                                                         │
//! │  CHECK-IN                                                               │
//! │  validate ─► upsert visitor ─► allocate band ─► CheckIn { serial }     │
//! │                                      │                                  │
//! │                                      └─ pool empty ─► NoWristband…      │
//! │                                                                         │
//! │  CHECK-OUT                                                              │
//! │  validate ─► find active ─► price stay ─► record ledger ─► release     │
//! │                   │                            │                        │
//! │                   └─ none ─► NoActive…         └─ failed write leaves   │
//! │                                                   the band active and   │
//! │                                                   re-issuable           │
//! │                                                                         │
//! │  REPORT                                                                 │
//! │  group in SQL ─► empty? ─► EmptyReport (never logged)                  │
//! │                    │                                                    │
//! │                    └─ rows ─► append audit log ─► ReportRows           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clock Injection
//! Every time-dependent handler has an `_at`/`_on` twin taking the
//! timestamp explicitly. The plain handlers read the terminal's local
//! clock; tests drive the twins with fixed times.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use aquapass_core::{
    billed_hours, validation, FinancialRow, NewLedgerEntry, Operator, OperatorRole, PaymentMethod,
    ReportKind, Tariff, UsageRow, Visitor, VisitSummary,
};
use aquapass_db::Database;

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Response Types
// =============================================================================

/// Result of a successful check-in: which band to hand over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Serial of the allocated wristband.
    pub serial: i64,
    /// The visitor record after create-or-refresh.
    pub visitor: Visitor,
    pub entered_at: NaiveDateTime,
}

/// Rows of a produced report, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportRows {
    Financial(Vec<FinancialRow>),
    Usage(Vec<UsageRow>),
}

impl ReportRows {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportRows::Financial(_) => ReportKind::Financial,
            ReportRows::Usage(_) => ReportKind::Usage,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportRows::Financial(rows) => rows.len(),
            ReportRows::Usage(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Snapshot for the status screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityStatus {
    pub visitors: i64,
    pub active_wristbands: i64,
    pub free_wristbands: i64,
}

// =============================================================================
// Front Desk
// =============================================================================

/// The request-boundary facade: one instance per terminal, sharing the
/// connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FrontDesk {
    db: Database,
    tariff: Tariff,
}

impl FrontDesk {
    /// Creates a front desk with the standard tariff.
    pub fn new(db: Database) -> Self {
        FrontDesk::with_tariff(db, Tariff::default())
    }

    /// Creates a front desk with custom rates (promotions, test fixtures).
    pub fn with_tariff(db: Database, tariff: Tariff) -> Self {
        FrontDesk { db, tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    // =========================================================================
    // Check-In
    // =========================================================================

    /// Checks a visitor in at the terminal clock's current time.
    pub async fn check_in(
        &self,
        operator: &Operator,
        given_name: &str,
        family_name: &str,
        age: i64,
        pesel: &str,
    ) -> ServiceResult<CheckIn> {
        self.check_in_at(
            operator,
            given_name,
            family_name,
            age,
            pesel,
            Local::now().naive_local(),
        )
        .await
    }

    /// Checks a visitor in at an explicit entry time.
    ///
    /// Validation runs first, so a rejected request leaves no partial
    /// write. The visitor record is created (or refreshed) even when the
    /// pool then turns out to be exhausted - the visitor exists either
    /// way, they just have to wait for a free band.
    pub async fn check_in_at(
        &self,
        operator: &Operator,
        given_name: &str,
        family_name: &str,
        age: i64,
        pesel: &str,
        entered_at: NaiveDateTime,
    ) -> ServiceResult<CheckIn> {
        validation::validate_person_name("given name", given_name)?;
        validation::validate_person_name("family name", family_name)?;
        validation::validate_age(age)?;
        validation::validate_pesel(pesel)?;

        let pesel = pesel.trim();
        let visitor = self
            .db
            .visitors()
            .upsert(pesel, given_name, family_name, age, entered_at)
            .await?;

        let Some(serial) = self.db.wristbands().allocate(pesel, entered_at).await? else {
            debug!(operator = %operator.login, "Check-in waiting: pool exhausted");
            return Err(ServiceError::NoWristbandAvailable);
        };

        info!(
            serial,
            operator = %operator.login,
            visitor = %visitor.display_name(),
            "Visitor checked in"
        );

        Ok(CheckIn {
            serial,
            visitor,
            entered_at,
        })
    }

    // =========================================================================
    // Check-Out
    // =========================================================================

    /// Checks a visitor out at the terminal clock's current time.
    pub async fn check_out(
        &self,
        operator: &Operator,
        serial: i64,
        method: PaymentMethod,
    ) -> ServiceResult<VisitSummary> {
        self.check_out_at(operator, serial, method, Local::now().naive_local())
            .await
    }

    /// Checks a visitor out at an explicit exit time.
    ///
    /// Order matters: the ledger row is recorded BEFORE the band is
    /// released. If the ledger write fails, the band is still active and
    /// the check-out can simply be retried; a released-but-unbilled visit
    /// can never occur.
    pub async fn check_out_at(
        &self,
        operator: &Operator,
        serial: i64,
        method: PaymentMethod,
        exited_at: NaiveDateTime,
    ) -> ServiceResult<VisitSummary> {
        validation::validate_serial(serial)?;

        let Some(active) = self.db.wristbands().find_active(serial).await? else {
            debug!(serial, "Check-out miss: no active band");
            return Err(ServiceError::NoActiveWristband { serial });
        };

        let amount = self.tariff.cost(active.entered_at, exited_at)?;

        let transaction_id = self
            .db
            .ledger()
            .record(&NewLedgerEntry {
                amount_cents: amount.cents(),
                paid_at: exited_at,
                method,
                visitor_id: active.visitor_id.clone(),
                operator_id: operator.id,
            })
            .await?;

        // The billed visit exists from here on; losing the release race
        // to another terminal only means the band is already free.
        let released = self.db.wristbands().finalize_release(serial, exited_at).await?;
        if !released {
            warn!(serial, transaction_id, "Band released concurrently after billing");
        }

        info!(
            serial,
            transaction_id,
            amount = %amount,
            operator = %operator.login,
            "Visitor checked out"
        );

        Ok(VisitSummary {
            serial,
            visitor_name: active.visitor_name(),
            entered_at: active.entered_at,
            exited_at,
            billed_hours: billed_hours(active.entered_at, exited_at),
            amount_cents: amount.cents(),
            method,
            transaction_id,
        })
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Produces a report over the closed date range, logged against the
    /// terminal clock's current date.
    pub async fn report(
        &self,
        operator: &Operator,
        kind: ReportKind,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<ReportRows> {
        self.report_on(operator, kind, from, to, Local::now().date_naive())
            .await
    }

    /// Parses the kind from operator input, then produces the report.
    pub async fn report_named(
        &self,
        operator: &Operator,
        kind: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<ReportRows> {
        let Some(kind) = ReportKind::from_name(kind) else {
            return Err(ServiceError::UnknownReportKind {
                given: kind.trim().to_string(),
            });
        };

        self.report(operator, kind, from, to).await
    }

    /// Produces a report, logging it on an explicit calendar date.
    ///
    /// The date range is inclusive on both ends; it is widened to the
    /// half-open interval [from 00:00, day-after-to 00:00) at the store,
    /// so payments clocked inside the final second of the last day are
    /// covered. An empty result is an expected outcome and is never
    /// logged.
    pub async fn report_on(
        &self,
        operator: &Operator,
        kind: ReportKind,
        from: NaiveDate,
        to: NaiveDate,
        generated_on: NaiveDate,
    ) -> ServiceResult<ReportRows> {
        let start = from.and_time(NaiveTime::MIN);
        let until = to
            .succ_opt()
            .map(|day_after| day_after.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);

        let rows = match kind {
            ReportKind::Financial => {
                ReportRows::Financial(self.db.ledger().financial_report(start, until).await?)
            }
            ReportKind::Usage => {
                ReportRows::Usage(self.db.ledger().usage_report(start, until).await?)
            }
        };

        if rows.is_empty() {
            debug!(kind = kind.name(), %from, %to, "Report over empty period");
            return Err(ServiceError::EmptyReport {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.db
            .report_log()
            .log(kind, generated_on, operator.id)
            .await?;

        info!(
            kind = kind.name(),
            rows = rows.len(),
            operator = %operator.login,
            "Report produced"
        );

        Ok(rows)
    }

    // =========================================================================
    // Status
    // =========================================================================

    /// Counts for the status screen.
    pub async fn status(&self) -> ServiceResult<FacilityStatus> {
        Ok(FacilityStatus {
            visitors: self.db.visitors().count().await?,
            active_wristbands: self.db.wristbands().count_active().await?,
            free_wristbands: self.db.wristbands().count_free().await?,
        })
    }

    // =========================================================================
    // Staff Accounts
    // =========================================================================

    /// Creates a staff account. Manager-only.
    pub async fn create_operator(
        &self,
        acting: &Operator,
        login: &str,
        given_name: &str,
        family_name: &str,
        role: OperatorRole,
    ) -> ServiceResult<Operator> {
        if !acting.role.can_manage_operators() {
            return Err(ServiceError::NotAuthorized {
                login: acting.login.clone(),
            });
        }

        validation::validate_person_name("login", login)?;
        validation::validate_person_name("given name", given_name)?;
        validation::validate_person_name("family name", family_name)?;

        let operator = self
            .db
            .operators()
            .insert(login.trim(), given_name, family_name, role)
            .await?;

        info!(login = %operator.login, ?role, acting = %acting.login, "Operator created");

        Ok(operator)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aquapass_core::pesel;
    use aquapass_db::DbConfig;
    use chrono::NaiveDate;

    const ANNA: &str = "44051401359";
    const JAN: &str = "02070803628";

    async fn desk_with_bands(count: i64) -> (FrontDesk, Operator) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for serial in 1001..1001 + count {
            db.wristbands().register(serial).await.unwrap();
        }
        let operator = db
            .operators()
            .insert("piotr", "Piotr", "Zielinski", OperatorRole::FrontDesk)
            .await
            .unwrap();
        (FrontDesk::new(db.clone()), operator)
    }

    /// Tuesday, a plain weekday.
    fn tue(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_check_in_then_check_out_round_trip() {
        let (desk, op) = desk_with_bands(2).await;

        let checked_in = desk
            .check_in_at(&op, "Anna", "Nowak", 34, ANNA, tue(15, 30))
            .await
            .unwrap();
        assert_eq!(checked_in.serial, 1001);
        assert_eq!(checked_in.visitor.pesel, ANNA);

        // 15:30-16:00 at the day rate, 16:00-17:30 at the evening rate,
        // each started hour billed in full: 10 + 2*14 = 38 zl.
        let summary = desk
            .check_out_at(&op, 1001, PaymentMethod::Card, tue(17, 30))
            .await
            .unwrap();
        assert_eq!(summary.amount_cents, 38_00);
        assert_eq!(summary.billed_hours, 2);
        assert_eq!(summary.visitor_name, "Anna Nowak");
        assert_eq!(summary.method, PaymentMethod::Card);

        // The transaction is in the ledger and the band is free again.
        let entry = desk.db.ledger().get(summary.transaction_id).await.unwrap().unwrap();
        assert_eq!(entry.amount_cents, 38_00);
        assert_eq!(entry.visitor_id, ANNA);

        let status = desk.status().await.unwrap();
        assert_eq!(status.active_wristbands, 0);
        assert_eq!(status.free_wristbands, 2);
        assert_eq!(status.visitors, 1);
    }

    #[tokio::test]
    async fn test_invalid_pesel_rejected_before_any_write() {
        let (desk, op) = desk_with_bands(1).await;

        // Last digit corrupted.
        let err = desk
            .check_in_at(&op, "Anna", "Nowak", 34, "44051401358", tue(10, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(!err.is_expected());

        let status = desk.status().await.unwrap();
        assert_eq!(status.visitors, 0);
        assert_eq!(status.free_wristbands, 1);
    }

    #[tokio::test]
    async fn test_pool_exhaustion_is_an_expected_outcome() {
        let (desk, op) = desk_with_bands(1).await;

        desk.check_in_at(&op, "Anna", "Nowak", 34, ANNA, tue(10, 0))
            .await
            .unwrap();

        let err = desk
            .check_in_at(&op, "Jan", "Kowalski", 22, JAN, tue(10, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoWristbandAvailable));
        assert!(err.is_expected());

        // The waiting visitor is registered even without a band.
        let status = desk.status().await.unwrap();
        assert_eq!(status.visitors, 2);
        assert_eq!(status.free_wristbands, 0);
    }

    #[tokio::test]
    async fn test_check_out_unknown_serial() {
        let (desk, op) = desk_with_bands(1).await;

        let err = desk
            .check_out_at(&op, 9999, PaymentMethod::Cash, tue(12, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoActiveWristband { serial: 9999 }));
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn test_double_check_out_second_misses() {
        let (desk, op) = desk_with_bands(1).await;

        desk.check_in_at(&op, "Anna", "Nowak", 34, ANNA, tue(10, 0))
            .await
            .unwrap();
        desk.check_out_at(&op, 1001, PaymentMethod::Cash, tue(12, 0))
            .await
            .unwrap();

        let err = desk
            .check_out_at(&op, 1001, PaymentMethod::Cash, tue(12, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoActiveWristband { serial: 1001 }));

        // Exactly one transaction was billed.
        let midnight_after = NaiveDate::from_ymd_opt(2025, 1, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let entries = desk
            .db
            .ledger()
            .in_range(tue(0, 0), midnight_after)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_financial_report_groups_and_logs() {
        let (desk, op) = desk_with_bands(2).await;

        for (pesel, name, method, out_h) in [
            (ANNA, "Anna", PaymentMethod::Cash, 12),
            (JAN, "Jan", PaymentMethod::Card, 13),
        ] {
            let checked_in = desk
                .check_in_at(&op, name, "Testowa", 30, pesel, tue(10, 0))
                .await
                .unwrap();
            desk.check_out_at(&op, checked_in.serial, method, tue(out_h, 0))
                .await
                .unwrap();
        }

        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let rows = desk
            .report_on(&op, ReportKind::Financial, day, day, day)
            .await
            .unwrap();

        let ReportRows::Financial(rows) = rows else {
            panic!("expected financial rows");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.day == day));

        assert_eq!(desk.db.report_log().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_usage_report_totals_per_visitor() {
        let (desk, op) = desk_with_bands(1).await;

        // Same visitor twice: one morning hour, one two-hour afternoon.
        for (in_t, out_t) in [(tue(9, 0), tue(10, 0)), (tue(13, 0), tue(15, 0))] {
            let checked_in = desk
                .check_in_at(&op, "Anna", "Nowak", 34, ANNA, in_t)
                .await
                .unwrap();
            desk.check_out_at(&op, checked_in.serial, PaymentMethod::Blik, out_t)
                .await
                .unwrap();
        }

        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let rows = desk
            .report_on(&op, ReportKind::Usage, day, day, day)
            .await
            .unwrap();

        let ReportRows::Usage(rows) = rows else {
            panic!("expected usage rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].visitor_id, ANNA);
        assert_eq!(rows[0].total_cents, 30_00); // 10 + 2*10 zl at the day rate
    }

    #[tokio::test]
    async fn test_report_covers_final_second_of_last_day() {
        let (desk, op) = desk_with_bands(1).await;

        let checked_in = desk
            .check_in_at(&op, "Anna", "Nowak", 34, ANNA, tue(22, 30))
            .await
            .unwrap();

        // The terminal clock hands out fractional seconds; a check-out
        // inside the last second of the day still belongs to it.
        let last_moment = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 500_000_000)
            .unwrap();
        desk.check_out_at(&op, checked_in.serial, PaymentMethod::Cash, last_moment)
            .await
            .unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let rows = desk
            .report_on(&op, ReportKind::Financial, day, day, day)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);

        // The next day does not see it.
        let next_day = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        let err = desk
            .report_on(&op, ReportKind::Financial, next_day, next_day, next_day)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EmptyReport { .. }));
    }

    #[tokio::test]
    async fn test_empty_report_is_not_logged() {
        let (desk, op) = desk_with_bands(1).await;

        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let err = desk
            .report_on(&op, ReportKind::Financial, day, day, day)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EmptyReport { .. }));
        assert!(err.is_expected());

        assert_eq!(desk.db.report_log().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_report_named_rejects_unknown_kind() {
        let (desk, op) = desk_with_bands(1).await;

        let day = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let err = desk
            .report_named(&op, "statistics", day, day)
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::UnknownReportKind { ref given } if given == "statistics")
        );
    }

    #[tokio::test]
    async fn test_operator_management_requires_manager() {
        let (desk, front_desk_op) = desk_with_bands(1).await;

        let err = desk
            .create_operator(&front_desk_op, "nowy", "Jan", "Nowy", OperatorRole::FrontDesk)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotAuthorized { .. }));

        let manager = desk
            .db
            .operators()
            .insert("kasia", "Katarzyna", "Wrona", OperatorRole::Manager)
            .await
            .unwrap();
        let created = desk
            .create_operator(&manager, "nowy", "Jan", "Nowy", OperatorRole::FrontDesk)
            .await
            .unwrap();
        assert_eq!(created.login, "nowy");
    }

    #[tokio::test]
    async fn test_generated_pesels_check_in_cleanly() {
        let (desk, op) = desk_with_bands(3).await;

        for seq in [11, 22, 33] {
            let birth = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();
            let id = pesel::generate(birth, seq);
            desk.check_in_at(&op, "Test", "Visitor", 34, &id, tue(10, 0))
                .await
                .unwrap();
        }

        assert_eq!(desk.status().await.unwrap().active_wristbands, 3);
    }
}
