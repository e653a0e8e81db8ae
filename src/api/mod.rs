//! Remote API clients for the takt application.

pub mod records;
