//! # funky core
//!
//! `Optional<T>` and `Outcome<T, E>`: absence and failure as ordinary values.
//!
//! ## Laws
//!
//! - Every combinator returns a new value; nothing mutates its receiver.
//! - Success variants never hold a missing payload when built through the
//!   checked constructors [`some`] and [`ok`].
//! - Misuse is reported through [`Result`], never by panicking:
//!   - [`Error::InvalidArgument`] for a missing payload or a value that is
//!     not an `Optional`/`Outcome` record,
//!   - [`Error::IllegalState`] for `unwrap`/`unwrap_err` on the wrong variant.
//!
//! ```
//! use funky_core::{none, some, Optional};
//!
//! fn first_even(items: &[i32]) -> Optional<i32> {
//!     items.iter().copied().find(|n| n % 2 == 0).into()
//! }
//!
//! assert_eq!(first_even(&[1, 4, 5]).match_with(|n| n * 10, || 0), 40);
//! assert_eq!(first_even(&[1, 3]).or(some(-1)?).unwrap()?, -1);
//! assert!(first_even(&[]).and(none::<()>()).is_none());
//! # Ok::<(), funky_core::Error>(())
//! ```

mod error;
pub mod optional;
pub mod outcome;
pub mod predicates;
mod presence;
mod result;
pub mod value;

pub use either::Either;
pub use error::Error;
pub use optional::{Optional, is_none, is_option, is_some, none, some};
pub use outcome::{Outcome, err, is_err, is_ok, is_outcome, ok};
pub use predicates::{
    is_array, is_array_empty, is_array_of, is_boolean, is_function, is_missing, is_null,
    is_number, is_object, is_one_of, is_present, is_string, is_undefined,
};
pub use presence::Presence;
pub use result::Result;
pub use value::{Function, Value};
