//! Result type for the crate's own fallible calls.

use crate::error::Error;

/// The standard Result type for funky operations.
///
/// Checked constructors, boundary guards and variant-specific accessors all
/// return this type. Use the `?` operator, `match`, or combinator methods to
/// handle it.
///
/// # Examples
///
/// ```
/// use funky_core::{some, Result};
///
/// fn answer() -> Result<i32> {
///     let value = some(41)?.map(|n| n + 1);
///     value.unwrap()
/// }
///
/// assert_eq!(answer(), Ok(42));
/// ```
pub type Result<T> = std::result::Result<T, Error>;
