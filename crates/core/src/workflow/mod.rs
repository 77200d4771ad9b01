//! Residence step state machine

mod engine;

pub use engine::{advance, can_advance, legal_events};
