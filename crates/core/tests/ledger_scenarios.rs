//! Ledger scenarios spanning deserialization and computation.
//!
//! These tests feed backend-shaped JSON through the tolerant decoders and
//! assert the resulting totals, covering the mixed typings the live API
//! actually produces.

mod support;

use rust_decimal_macros::dec;
use support::{charge, fine, payment};
use visadesk_core::LedgerEngine;
use visadesk_domain::{PaymentKind, Residence};

fn engine() -> LedgerEngine {
    LedgerEngine::default()
}

#[test]
fn list_view_payload_with_string_amounts_totals_correctly() {
    // List endpoints join aggregates onto the residence row and stringify
    // most numerics; no record slices are available there.
    let residence: Residence = serde_json::from_str(
        r#"{
            "residenceID": 4120,
            "insideOutside": "inside",
            "completedStep": 6,
            "sale_price": "10000.00",
            "tawjeehIncluded": "0",
            "total_Fine": "300",
            "custom_charges_total": "185.50",
            "total_paid": "5000",
            "totalFinePaid": 100
        }"#,
    )
    .unwrap();

    let totals = engine().compute(&residence, &[], &[], &[]);
    assert_eq!(totals.total_amount, dec!(10000) + dec!(150) + dec!(300) + dec!(185.50));
    assert_eq!(totals.total_paid, dec!(5000));
    assert_eq!(totals.total_fine_paid, dec!(100));
}

#[test]
fn detail_view_records_override_joined_aggregates() {
    // Detail endpoints return the full record slices; stored paid aggregates
    // may lag behind and must lose to the records.
    let residence: Residence = serde_json::from_str(
        r#"{
            "residenceID": 4120,
            "insideOutside": "inside",
            "completedStep": "6",
            "sale_price": 10000,
            "total_paid": "999"
        }"#,
    )
    .unwrap();

    let payments = [
        payment(PaymentKind::Residence, dec!(4000)),
        payment(PaymentKind::Fine, dec!(250)),
    ];
    let totals = engine().compute(&residence, &[], &[], &payments);
    assert_eq!(totals.total_paid, dec!(4000));
    assert_eq!(totals.total_fine_paid, dec!(250));
}

#[test]
fn fine_aggregate_beats_the_record_sum() {
    let mut residence = support::mainland_case(4120, dec!(10000));
    residence.total_fine = Some(dec!(300));

    // Records sum to 250 but the backend already invoiced 300
    let fines = [fine(1, 4120, dec!(200)), fine(2, 4120, dec!(50))];
    let totals = engine().compute(&residence, &fines, &[], &[]);
    assert_eq!(totals.total_amount, dec!(10300));
}

#[test]
fn charge_records_back_fill_a_missing_aggregate() {
    let residence = support::mainland_case(4120, dec!(10000));
    let charges = [charge(1, 4120, dec!(100), dec!(150)), charge(2, 4120, dec!(20), dec!(35))];

    let totals = engine().compute(&residence, &[], &charges, &[]);
    assert_eq!(totals.total_amount, dec!(10185));
}

#[test]
fn garbage_monetary_fields_zero_out_instead_of_failing() {
    let residence: Residence = serde_json::from_str(
        r#"{
            "residenceID": 4120,
            "insideOutside": "inside",
            "completedStep": "abc",
            "sale_price": "not a number",
            "iloe_fine": null
        }"#,
    )
    .unwrap();

    let totals = engine().compute(&residence, &[], &[], &[]);
    assert_eq!(totals.total_amount, dec!(0));
    assert!(!totals.has_outstanding());
}

#[test]
fn fine_stream_payments_never_count_toward_regular_progress() {
    let mut residence = support::mainland_case(4120, dec!(1000));
    residence.total_fine = Some(dec!(500));

    let payments = [payment(PaymentKind::InsuranceFine, dec!(500))];
    let totals = engine().compute(&residence, &[], &[], &payments);
    assert_eq!(totals.total_paid, dec!(0));
    assert_eq!(totals.total_fine_paid, dec!(500));
    assert_eq!(totals.payment_progress_percent(), dec!(0));
}
