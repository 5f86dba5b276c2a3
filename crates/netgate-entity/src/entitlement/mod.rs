//! Entitlement value object and evaluator.

pub mod model;

pub use model::Entitlement;
