//! Background jobs.

pub mod lifecycle;
pub mod metrics;
