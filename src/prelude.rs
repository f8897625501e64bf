//! Prelude module - common imports for funky
//!
//! Import this module to get the constructors, the two algebras and the
//! traits their combinators rely on:
//! ```rust
//! use funky::prelude::*;
//!
//! let greeting: Outcome<&str, String> = ok("hello")?;
//! assert!(greeting.ok().is_some());
//! # Ok::<(), funky::Error>(())
//! ```

// Re-export the algebras and their constructors
pub use funky_core::{Optional, Outcome, err, none, ok, some};

// Re-export error types
pub use funky_core::Error;

// Re-export traits and boundary types
pub use funky_core::{Either, Presence, Value};
