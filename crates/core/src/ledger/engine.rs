//! The ledger engine
//!
//! One pure function computes every "total owed" figure in the application.
//! The same arithmetic used to be repeated by hand on each screen that
//! displayed a balance; this module is the single source of truth and every
//! call site consumes its output.
//!
//! ## Aggregation rules
//!
//! Seven components add up to the invoice total:
//!
//! 1. sale price
//! 2. Tawjeeh charge - the backend's invoiced aggregate when present,
//!    otherwise the explicit amount (or the configured default) when the fee
//!    is not bundled, otherwise zero
//! 3. ILOE insurance charge - same rule with its own default
//! 4. ILOE fine
//! 5. e-visa fine total - the backend aggregate (`total_Fine`, falling back
//!    to the older `fine` alias) when present, otherwise the sum of the
//!    supplied fine records
//! 6. custom charges - the backend aggregate when present, otherwise the sum
//!    of the supplied charge records' sale prices
//! 7. cancellation charges
//!
//! Paid totals come from the payment records, split by stream; when the
//! caller holds no records (list views that only carry the joined
//! aggregates) the residence's own paid aggregates are used instead. The
//! regular and fine streams are subtracted separately and never conflated.
//!
//! Missing or unparsable monetary inputs were already zeroed at the
//! deserialization boundary, so the computation here never fails: a
//! malformed snapshot yields zeroed totals, which is the intended display
//! behavior.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use visadesk_domain::{
    CustomCharge, FamilyResidence, FeeDefaults, Fine, Payment, PaymentStream, Residence,
};

/// Result of one ledger computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Full invoice amount across all seven components.
    pub total_amount: Decimal,
    /// Regular-stream payments received.
    pub total_paid: Decimal,
    /// Fine-stream payments received.
    pub total_fine_paid: Decimal,
    /// `total_amount - total_paid - total_fine_paid`; negative on
    /// overpayment.
    pub total_remaining: Decimal,
}

impl LedgerTotals {
    /// Whether the customer still owes anything.
    #[must_use]
    pub fn has_outstanding(&self) -> bool {
        self.total_remaining > Decimal::ZERO
    }

    /// Regular-stream collection progress, 0 to 100.
    ///
    /// A zero invoice reports 0% rather than dividing by zero.
    #[must_use]
    pub fn payment_progress_percent(&self) -> Decimal {
        if self.total_amount.is_zero() {
            return Decimal::ZERO;
        }
        let percent = self.total_paid * Decimal::ONE_HUNDRED / self.total_amount;
        percent.min(Decimal::ONE_HUNDRED)
    }
}

/// Computes invoice totals and outstanding balances for residence cases.
///
/// Holds the deployment's fallback fee amounts; construction is the only
/// place they enter the arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerEngine {
    defaults: FeeDefaults,
}

impl LedgerEngine {
    /// Engine with explicit fallback fee amounts.
    #[must_use]
    pub const fn new(defaults: FeeDefaults) -> Self {
        Self { defaults }
    }

    /// Compute the totals for a full residence snapshot.
    ///
    /// Pure and O(n) over the supplied collections; safe to call on every
    /// render. See the module documentation for the aggregation rules.
    #[must_use]
    pub fn compute(
        &self,
        residence: &Residence,
        fines: &[Fine],
        charges: &[CustomCharge],
        payments: &[Payment],
    ) -> LedgerTotals {
        let tawjeeh_charge = residence.tawjeeh_charges.unwrap_or_else(|| {
            if residence.tawjeeh_included {
                Decimal::ZERO
            } else {
                residence.tawjeeh_amount.unwrap_or(self.defaults.tawjeeh_amount)
            }
        });

        let iloe_charge = residence.iloe_charges.unwrap_or_else(|| {
            if residence.insurance_included {
                Decimal::ZERO
            } else {
                residence.insurance_amount.unwrap_or(self.defaults.iloe_insurance_amount)
            }
        });

        let evisa_fine_total = residence
            .total_fine
            .or(residence.fine)
            .unwrap_or_else(|| fines.iter().map(|fine| fine.fine_amount).sum());

        let custom_charges = residence
            .custom_charges_total
            .unwrap_or_else(|| charges.iter().map(|charge| charge.sale_price).sum());

        let cancellation = residence.cancellation_charges.unwrap_or_default();

        let total_amount = residence.sale_price
            + tawjeeh_charge
            + iloe_charge
            + residence.iloe_fine
            + evisa_fine_total
            + custom_charges
            + cancellation;

        let (total_paid, total_fine_paid) = if payments.is_empty() {
            (
                residence.total_paid.unwrap_or_default(),
                residence.total_fine_paid.unwrap_or_default(),
            )
        } else {
            payments.iter().fold(
                (Decimal::ZERO, Decimal::ZERO),
                |(regular, fine), payment| match payment.stream() {
                    PaymentStream::Regular => (regular + payment.amount, fine),
                    PaymentStream::Fine => (regular, fine + payment.amount),
                },
            )
        };

        LedgerTotals {
            total_amount,
            total_paid,
            total_fine_paid,
            total_remaining: total_amount - total_paid - total_fine_paid,
        }
    }

    /// Simplified ledger for a dependent case: one price, one paid amount,
    /// no fee or fine aggregation.
    #[must_use]
    pub fn compute_family(&self, family: &FamilyResidence) -> LedgerTotals {
        LedgerTotals {
            total_amount: family.sale_price,
            total_paid: family.paid_amount,
            total_fine_paid: Decimal::ZERO,
            total_remaining: family.sale_price - family.paid_amount,
        }
    }
}
