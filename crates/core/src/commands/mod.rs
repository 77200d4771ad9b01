//! Validated mutation commands
//!
//! The UI layer builds these before calling the backend. Construction is the
//! validation step: a command value either exists and is well-formed, or the
//! constructor returned a `Validation` error and nothing was sent. The
//! engine itself never persists.

mod charges;
mod fees;
mod fines;

pub use charges::AddCustomCharge;
pub use fees::{InsuranceUpdate, TawjeehUpdate};
pub use fines::{AddFine, DeleteFine, UpdateFine};
