//! Pure utility helpers shared across domain types

pub mod lenient;
