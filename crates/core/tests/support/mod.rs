//! Shared test helpers for `visadesk-core` integration tests.
//!
//! Fixtures and lightweight mocks so the service and scenario tests can
//! focus on behaviour instead of boilerplate.

// Not every test target uses every fixture.
#![allow(dead_code)]

pub mod sources;

use rust_decimal::Decimal;
use visadesk_core::CaseSnapshot;
use visadesk_domain::{CaseChannel, CustomCharge, Fine, Payment, PaymentKind, Residence};

/// A mainland case with the given sale price and nothing else attached.
pub fn mainland_case(residence_id: i64, sale_price: Decimal) -> Residence {
    let mut residence = Residence::new(residence_id, CaseChannel::Mainland);
    residence.sale_price = sale_price;
    residence
}

/// A freezone case at the eVisa draft position.
pub fn freezone_case(residence_id: i64, sale_price: Decimal) -> Residence {
    let mut residence = Residence::new(residence_id, CaseChannel::Freezone);
    residence.sale_price = sale_price;
    residence
}

/// Snapshot with no attached records.
pub fn bare_snapshot(residence: Residence) -> CaseSnapshot {
    CaseSnapshot { residence, fines: Vec::new(), custom_charges: Vec::new(), payments: Vec::new() }
}

/// Fine record fixture.
pub fn fine(residence_fine_id: i64, residence_id: i64, amount: Decimal) -> Fine {
    Fine {
        residence_fine_id,
        residence_id,
        fine_amount: amount,
        account_id: 3,
        currency_id: None,
        fine_date: None,
        staff_name: None,
        doc_name: None,
    }
}

/// Custom charge fixture.
pub fn charge(id: i64, residence_id: i64, net_cost: Decimal, sale_price: Decimal) -> CustomCharge {
    CustomCharge {
        id,
        residence_id,
        charge_title: format!("Charge {id}"),
        net_cost,
        sale_price,
        account_id: 3,
        remarks: None,
        staff_name: None,
        created_at: None,
    }
}

/// Payment record fixture.
pub fn payment(kind: PaymentKind, amount: Decimal) -> Payment {
    Payment {
        amount,
        currency_name: Some("AED".to_owned()),
        payment_type: kind,
        account_name: None,
        staff_name: None,
        remarks: None,
        payment_date: None,
    }
}
