//! Outstanding balance computation

mod engine;

pub use engine::{LedgerEngine, LedgerTotals};
