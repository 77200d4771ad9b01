//! Case facade exposed to the UI layer

pub mod ports;
mod service;

pub use service::{CaseService, CaseView};
