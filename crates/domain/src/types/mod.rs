//! Domain types and models

pub mod charge;
pub mod family;
pub mod fine;
pub mod lookup;
pub mod payment;
pub mod residence;
pub mod stage;

// Re-export the core entity types for convenience
pub use charge::CustomCharge;
pub use family::FamilyResidence;
pub use fine::Fine;
pub use lookup::{Account, Currency, LookupTables};
pub use payment::{Payment, PaymentKind, PaymentStream};
pub use residence::{CaseChannel, CaseStatus, Residence};
pub use stage::{FreezoneStage, MainlandStep, ProcessingStage, StepEvent};
