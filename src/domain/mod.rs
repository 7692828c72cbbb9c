//! Domain layer - the ACH model and its pure analysis services.

pub mod engine;
pub mod foundation;
pub mod matrix;
