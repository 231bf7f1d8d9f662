mod common;
use common::Sandbox;
use predicates::prelude::*;

#[test]
fn test_basket_totals_and_most_polluting_item() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "--add", "Beef", "--add", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Beef to your basket!"))
        .stdout(predicate::str::contains("Added milk to your basket!"))
        .stdout(predicate::str::contains("40.88"))
        .stdout(predicate::str::contains("20.44"))
        .stdout(predicate::str::contains("Most polluting item"))
        .stdout(predicate::str::contains("from category"));
}

#[test]
fn test_basket_repeated_product_counts_once_as_item() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "-a", "Pork", "-a", "Pork"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14.60"))
        .stdout(predicate::str::contains("Total items in basket\u{1b}[0m: 1"));
}

#[test]
fn test_basket_with_unknown_values_still_totals() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "-a", "Tea", "-a", "Potatoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.30"))
        .stdout(predicate::str::contains("Emission breakdown by category"));
}

#[test]
fn test_basket_category_restricts_match() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "-a", "Beef", "-c", "Dairy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Product not found in the database: Beef",
        ));
}

#[test]
fn test_basket_unknown_product_fails() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "--add", "Unicorn steak"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unicorn steak"));
}

#[test]
fn test_empty_basket_is_a_warning() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("basket")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your basket is empty"))
        .stdout(predicate::str::contains("Basket dashboard").not());
}

#[test]
fn test_basket_of_unknown_values_totals_to_plain_zero() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["basket", "-a", "Tea"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total CO2 emissions (kg CO2e)\u{1b}[0m: 0.00",
        ))
        .stdout(predicate::str::contains("-0.00").not());
}
