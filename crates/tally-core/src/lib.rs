//! tally core: error surface and JSON wire types shared by the server and tests.
//!
//! This crate defines the client-facing contracts of the counter service. It
//! intentionally carries no transport or runtime dependencies so it can be
//! reused by the server, the test suite, and any future client tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod api;
pub mod error;

pub use error::{ClientCode, Result, TallyError};
