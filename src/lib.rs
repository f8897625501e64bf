#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # funky
//!
//! Option, Result and more functional stuff: absence and failure as ordinary
//! values instead of null references or panics.
//!
//! This library re-exports the `funky-core` workspace crate for convenience.

pub use funky_core;
pub use funky_core::*;

pub mod prelude;
