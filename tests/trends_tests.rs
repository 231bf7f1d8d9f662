mod common;
use common::{HISTORY_CSV, Sandbox, distinct_dates};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn generate(sb: &Sandbox, out: &str, seed: &str) {
    sb.cmd()
        .args([
            "trends",
            "generate",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-10",
            "--baskets",
            "3",
            "--max-items",
            "4",
            "--seed",
            seed,
            "--out",
            out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated data."))
        .stdout(predicate::str::contains("Dashboard"));
}

#[test]
fn test_generate_one_basket_per_distinct_day() {
    let sb = Sandbox::new();
    let out = sb.path("history.csv");

    generate(&sb, &out, "7");

    let content = fs::read_to_string(&out).expect("read generated history");
    assert!(content.starts_with("Date of Purchase,Product,Category,C02e pr kg"));

    let rows = content.lines().count() - 1;
    assert!((3..=12).contains(&rows), "unexpected row count {rows}");

    let dates = distinct_dates(Path::new(&out));
    assert_eq!(dates.len(), 3);
    for d in dates {
        assert!(
            d.as_str() >= "2024-01-01" && d.as_str() <= "2024-01-10",
            "date {d} out of range"
        );
    }
}

#[test]
fn test_generate_with_seed_is_reproducible() {
    let sb = Sandbox::new();
    let first = sb.path("first.csv");
    let second = sb.path("second.csv");

    generate(&sb, &first, "42");
    generate(&sb, &second, "42");

    assert_eq!(
        fs::read_to_string(&first).expect("read first"),
        fs::read_to_string(&second).expect("read second")
    );
}

#[test]
fn test_generated_history_can_be_uploaded() {
    let sb = Sandbox::new();
    let out = sb.path("roundtrip.csv");

    generate(&sb, &out, "3");

    sb.cmd()
        .args(["trends", "upload", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded"))
        .stdout(predicate::str::contains("Average total CO2e (kg) across all baskets"));
}

#[test]
fn test_generate_inverted_range_warns() {
    let sb = Sandbox::new();

    sb.cmd()
        .args([
            "trends",
            "generate",
            "--start",
            "2024-02-01",
            "--end",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Start date is after end date. Try again.",
        ))
        .stdout(predicate::str::contains("Dashboard").not());
}

#[test]
fn test_generate_more_baskets_than_days_fails() {
    let sb = Sandbox::new();

    sb.cmd()
        .args([
            "trends",
            "generate",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-02",
            "--baskets",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot draw 5 distinct purchase dates from a range of 2 day(s)",
        ));
}

#[test]
fn test_generate_rejects_bad_date() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["trends", "generate", "--start", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format: 2024-13-01"));
}

#[test]
fn test_upload_dashboard_figures() {
    let sb = Sandbox::new();
    let file = sb.write("history.csv", HISTORY_CSV);

    // baskets: 2024-01-01 = 31.20, 2024-01-02 = 0.30
    sb.cmd()
        .args(["trends", "upload", "--file", &file, "--top-products", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 purchases"))
        .stdout(predicate::str::contains("31.20"))
        .stdout(predicate::str::contains("0.30 (+15.45 vs. average)"))
        .stdout(predicate::str::contains("15.75"))
        .stdout(predicate::str::contains("95.2%"))
        .stdout(predicate::str::contains("Top 2 most polluting products"))
        .stdout(predicate::str::contains("Lifecycle emissions breakdown"));
}

#[test]
fn test_upload_view_all_lists_every_purchase() {
    let sb = Sandbox::new();
    let file = sb.write("history.csv", HISTORY_CSV);

    sb.cmd()
        .args(["trends", "upload", "--file", &file, "--view", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All purchases"))
        .stdout(predicate::str::contains("Potatoes"))
        .stdout(predicate::str::contains("Baskets").not());
}

#[test]
fn test_upload_rejects_bad_row() {
    let sb = Sandbox::new();
    let file = sb.write(
        "broken.csv",
        "Date of Purchase,Product,Category,C02e pr kg,Agriculture,ILUC,Processing,Packaging,Transport,Retail\n\
         2024-01-01,Beef,Meat,30,25,2,1,1,0.5,0.5\n\
         yesterday,Milk,Dairy,1.2,0.9,0.1,0.1,0.05,0.03,0.02\n",
    );

    sb.cmd()
        .args(["trends", "upload", "--file", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid history file at row 3"));
}

#[test]
fn test_upload_empty_history_warns() {
    let sb = Sandbox::new();
    let file = sb.write(
        "empty.csv",
        "Date of Purchase,Product,Category,C02e pr kg,Agriculture,ILUC,Processing,Packaging,Transport,Retail\n",
    );

    sb.cmd()
        .args(["trends", "upload", "--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("The purchase history is empty."));
}

#[test]
fn test_upload_history_of_unknown_values_shows_plain_zero() {
    let sb = Sandbox::new();
    let file = sb.write(
        "unknown.csv",
        "Date of Purchase,Product,Category,C02e pr kg,Agriculture,ILUC,Processing,Packaging,Transport,Retail\n\
         2024-01-01,Tea,Drinks,,,,,,,\n",
    );

    sb.cmd()
        .args(["trends", "upload", "--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lifecycle emissions breakdown"))
        .stdout(predicate::str::contains("-0.00").not());
}
