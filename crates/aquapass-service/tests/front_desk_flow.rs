//! End-to-end front-desk flow against a real (in-memory) database:
//! a full operating day with check-ins, check-outs across the rate
//! change, and both reports at closing time.

use chrono::{NaiveDate, NaiveDateTime};

use aquapass_core::{OperatorRole, PaymentMethod, ReportKind};
use aquapass_db::{Database, DbConfig};
use aquapass_service::{FrontDesk, ReportRows, ServiceError};

const ANNA: &str = "44051401359";
const JAN: &str = "02070803628";

/// Saturday: the weekend rate applies all day.
fn sat(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 11)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[tokio::test]
async fn full_operating_day() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    for serial in 1001..=1003 {
        db.wristbands().register(serial).await.unwrap();
    }
    let operator = db
        .operators()
        .insert("piotr", "Piotr", "Zielinski", OperatorRole::FrontDesk)
        .await
        .unwrap();

    let desk = FrontDesk::new(db.clone());

    // Morning: two visitors in.
    let anna = desk
        .check_in_at(&operator, "Anna", "Nowak", 34, ANNA, sat(9, 0))
        .await
        .unwrap();
    let jan = desk
        .check_in_at(&operator, "Jan", "Kowalski", 45, JAN, sat(9, 15))
        .await
        .unwrap();
    assert_eq!(anna.serial, 1001);
    assert_eq!(jan.serial, 1002);

    let status = desk.status().await.unwrap();
    assert_eq!(status.active_wristbands, 2);
    assert_eq!(status.free_wristbands, 1);

    // Anna leaves after exactly two hours: 2 * 16 zl weekend rate.
    let anna_out = desk
        .check_out_at(&operator, anna.serial, PaymentMethod::Cash, sat(11, 0))
        .await
        .unwrap();
    assert_eq!(anna_out.amount_cents, 32_00);
    assert_eq!(anna_out.billed_hours, 2);

    // The summary serializes as-is for the external receipt renderer.
    let receipt = serde_json::to_value(&anna_out).unwrap();
    assert_eq!(receipt["visitor_name"], "Anna Nowak");
    assert_eq!(receipt["amount_cents"], 3200);
    assert_eq!(receipt["method"], "cash");

    // Jan stays into a started third hour: 3 * 16 zl.
    let jan_out = desk
        .check_out_at(&operator, jan.serial, PaymentMethod::Card, sat(11, 20))
        .await
        .unwrap();
    assert_eq!(jan_out.amount_cents, 48_00);
    assert_eq!(jan_out.billed_hours, 3);

    // Anna's band is free again and goes back out.
    let returning = desk
        .check_in_at(&operator, "Anna", "Nowak", 34, ANNA, sat(14, 0))
        .await
        .unwrap();
    assert_eq!(returning.serial, 1001);
    desk.check_out_at(&operator, returning.serial, PaymentMethod::Blik, sat(15, 0))
        .await
        .unwrap();

    // Closing time: the financial report for the day.
    let day = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
    let ReportRows::Financial(rows) = desk
        .report_on(&operator, ReportKind::Financial, day, day, day)
        .await
        .unwrap()
    else {
        panic!("expected financial rows");
    };
    // One row per payment method used today.
    assert_eq!(rows.len(), 3);
    let day_total: i64 = rows.iter().map(|r| r.total_cents).sum();
    assert_eq!(day_total, 32_00 + 48_00 + 16_00);

    // Usage report: Anna visited twice, Jan once.
    let ReportRows::Usage(rows) = desk
        .report_on(&operator, ReportKind::Usage, day, day, day)
        .await
        .unwrap()
    else {
        panic!("expected usage rows");
    };
    assert_eq!(rows.len(), 2);
    let anna_total = rows.iter().find(|r| r.visitor_id == ANNA).unwrap();
    assert_eq!(anna_total.total_cents, 32_00 + 16_00);

    // Both reports were logged; the day before was empty and is not.
    assert_eq!(db.report_log().count().await.unwrap(), 2);
    let friday = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let err = desk
        .report_on(&operator, ReportKind::Financial, friday, friday, day)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyReport { .. }));
    assert_eq!(db.report_log().count().await.unwrap(), 2);

    // Everyone is out.
    let status = desk.status().await.unwrap();
    assert_eq!(status.active_wristbands, 0);
    assert_eq!(status.free_wristbands, 3);
    assert_eq!(status.visitors, 2);
}
