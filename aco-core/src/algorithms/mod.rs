//! Contains algorithms which are not coupled with the optimizer internals.

pub mod geo;
pub mod statistics;
