//! # Seed Data Generator
//!
//! Provisions a development database: the wristband pool, staff accounts
//! and a handful of sample visitors.
//!
//! ## Usage
//! ```bash
//! # Default database path (./aquapass.db), 10 wristbands
//! cargo run -p aquapass-db --bin seed
//!
//! # Custom pool size
//! cargo run -p aquapass-db --bin seed -- --bands 25
//!
//! # Specify database path
//! cargo run -p aquapass-db --bin seed -- --db ./data/aquapass.db
//! ```
//!
//! ## Generated Data
//! - Wristbands with serials 1001, 1002, ... (all free)
//! - One front-desk operator (`piotr`) and one manager (`kasia`)
//! - Five sample visitors with well-formed, deterministic PESELs

use chrono::{Local, NaiveDate};

use aquapass_core::{pesel, OperatorRole};
use aquapass_db::{Database, DbConfig, DbError};

/// First serial printed on the physical bands.
const FIRST_SERIAL: i64 = 1001;

/// Sample visitors: (given name, family name, age, birth date, sequence).
const VISITORS: [(&str, &str, i64, (i32, u32, u32), u32); 5] = [
    ("Anna", "Nowak", 34, (1990, 4, 12), 11),
    ("Jan", "Kowalski", 45, (1979, 11, 3), 22),
    ("Maria", "Wisniewska", 28, (1996, 7, 21), 33),
    ("Piotr", "Lewandowski", 61, (1963, 2, 8), 44),
    ("Zofia", "Kaminska", 19, (2005, 9, 30), 55),
];

#[tokio::main]
async fn main() -> Result<(), DbError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let db_path = arg_value(&args, "--db").unwrap_or_else(|| "./aquapass.db".to_string());
    let band_count: i64 = arg_value(&args, "--bands")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    println!("Seeding {db_path} with {band_count} wristbands");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    // Staff accounts. Credentials live with the external authenticator;
    // these rows exist for attribution.
    for (login, given, family, role) in [
        ("piotr", "Piotr", "Zielinski", OperatorRole::FrontDesk),
        ("kasia", "Katarzyna", "Wrona", OperatorRole::Manager),
    ] {
        match db.operators().insert(login, given, family, role).await {
            Ok(operator) => println!("  operator {login} (id {})", operator.id),
            Err(DbError::UniqueViolation { .. }) => println!("  operator {login} already exists"),
            Err(e) => return Err(e),
        }
    }

    // The wristband pool.
    let mut registered = 0;
    for serial in FIRST_SERIAL..FIRST_SERIAL + band_count {
        match db.wristbands().register(serial).await {
            Ok(()) => registered += 1,
            Err(DbError::UniqueViolation { .. }) => {} // already provisioned
            Err(e) => return Err(e),
        }
    }
    println!("  {registered} wristbands registered");

    // Sample visitors with checksum-correct identifiers.
    let now = Local::now().naive_local();
    for (given, family, age, (y, m, d), seq) in VISITORS {
        let birth = NaiveDate::from_ymd_opt(y, m, d).expect("valid seed birth date");
        let id = pesel::generate(birth, seq);
        db.visitors().upsert(&id, given, family, age, now).await?;
        println!("  visitor {given} {family} ({id})");
    }

    println!(
        "Done: {} free bands, {} visitors",
        db.wristbands().count_free().await?,
        db.visitors().count().await?
    );

    Ok(())
}

/// Returns the value following `flag` in the argument list, if any.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
