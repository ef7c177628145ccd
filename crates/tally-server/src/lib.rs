//! tally server library entry.
//!
//! This crate wires the config layer, store backends, HTTP handlers, and SPA
//! fallback into a cohesive service. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod config;
pub mod ops;
pub mod router;
pub mod spa;
pub mod state;
pub mod store;
