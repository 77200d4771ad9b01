//! Lookup lists passed through from the backend
//!
//! Accounts and currencies are owned by out-of-scope CRUD screens; the
//! engine only uses them to validate foreign-key-shaped fields on mutation
//! commands before anything is sent to the backend.

use serde::{Deserialize, Serialize};

/// A bookkeeping account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    #[serde(rename = "accountID")]
    pub account_id: i64,
    /// Display name.
    #[serde(rename = "accountName")]
    pub account_name: String,
}

/// A currency known to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Unique currency identifier.
    #[serde(rename = "currencyID")]
    pub currency_id: i64,
    /// Display name (e.g. "AED").
    #[serde(rename = "currencyName")]
    pub currency_name: String,
}

/// Snapshot of the lookup lists used for command validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupTables {
    /// Known accounts.
    pub accounts: Vec<Account>,
    /// Known currencies.
    pub currencies: Vec<Currency>,
}

impl LookupTables {
    /// Whether the given account exists.
    #[must_use]
    pub fn has_account(&self, account_id: i64) -> bool {
        self.accounts.iter().any(|account| account.account_id == account_id)
    }

    /// Whether the given currency exists.
    #[must_use]
    pub fn has_currency(&self, currency_id: i64) -> bool {
        self.currencies.iter().any(|currency| currency.currency_id == currency_id)
    }
}
