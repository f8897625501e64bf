//! The fallible result algebra.
//!
//! An [`Outcome<T, E>`] is either `Ok(T)`, holding a present success value,
//! or `Err(E)`, holding a failure payload. It mirrors
//! [`Optional`](crate::Optional) with the empty side replaced by an error,
//! which makes it the "Either" of the optional value:
//!
//! ```
//! use funky_core::{err, ok, Outcome};
//!
//! let parsed: Outcome<i32, String> = ok(20)?;
//! let doubled = parsed.and_then(|n| Outcome::Ok(n * 2));
//! assert_eq!(doubled.unwrap()?, 40);
//!
//! let failed: Outcome<i32, &str> = err("bad input");
//! assert_eq!(failed.unwrap_err()?, "bad input");
//! # Ok::<(), funky_core::Error>(())
//! ```

use std::fmt;

use either::Either;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::Error;
use crate::optional::Optional;
use crate::predicates::{is_object, is_one_of};
use crate::presence::Presence;
use crate::result::Result;
use crate::value::{PAYLOAD_KEY, TYPE_KEY, Value};

const OK: &str = "Ok";
const ERR: &str = "Err";

/// The result of an operation that may fail.
///
/// Serializes as `{"_type": "Ok", "value": v}` or `{"_type": "Err", "value": e}`.
/// Decoding goes through [`ok`], so an `Ok` record with a missing payload is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "_type", content = "value")]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

#[derive(Deserialize)]
#[serde(tag = "_type", content = "value")]
enum OutcomeRecord<T, E> {
    Ok(T),
    Err(E),
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de> + Presence,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match OutcomeRecord::deserialize(deserializer)? {
            OutcomeRecord::Ok(value) => ok(value).map_err(de::Error::custom),
            OutcomeRecord::Err(error) => Ok(Self::Err(error)),
        }
    }
}

impl<T, E> Outcome<T, E> {
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Apply `f` to a success value. A failure passes through untouched and
    /// `f` is never invoked.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Visit the receiver with one handler per variant and return the
    /// handler's result. Exactly one handler runs.
    #[inline]
    pub fn match_with<U, O, R>(self, ok: O, err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }

    /// Run `f` on a success value for its side effect. No-op on `Err`.
    #[inline]
    pub fn match_ok<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = self {
            f(value);
        }
    }

    /// Run `f` on a failure payload for its side effect. No-op on `Ok`.
    #[inline]
    pub fn match_err<F>(&self, f: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = self {
            f(error);
        }
    }

    /// Take the success value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] if the receiver is `Err`.
    #[inline]
    pub fn unwrap(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(Error::illegal_state(
                "Outcome::unwrap()",
                "cannot unwrap a failed result",
            )),
        }
    }

    /// Take the failure payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] if the receiver is `Ok`.
    #[inline]
    pub fn unwrap_err(self) -> Result<E> {
        match self {
            Self::Ok(_) => Err(Error::illegal_state(
                "Outcome::unwrap_err()",
                "cannot unwrap the error of a successful result",
            )),
            Self::Err(error) => Ok(error),
        }
    }

    /// The success value, otherwise `default`. Never fails.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Chain a fallible computation on the success value. A failure
    /// short-circuits with the same error and `f` is never invoked.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recover from a failure. A success short-circuits unchanged and `f`
    /// is never invoked.
    #[inline]
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// The success value as an [`Optional`], discarding any error.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(_) => Optional::None,
        }
    }

    /// The failure payload as an [`Optional`], discarding any success value.
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Ok(_) => Optional::None,
            Self::Err(error) => Optional::Some(error),
        }
    }

    #[inline]
    pub fn into_result(self) -> std::result::Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// `Left` carries the failure, `Right` the success.
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Err(error) => Either::Left(error),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Like [`Outcome::ok`], but the discarded error is logged.
    pub fn into_optional_logged(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Some(value),
            Self::Err(error) => {
                tracing::error!("Operation failed: {}", error);
                Optional::None
            }
        }
    }

    /// Like [`Outcome::unwrap_or`], but the discarded error is logged.
    pub fn unwrap_or_logged(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                tracing::error!("Operation failed, using default: {}", error);
                default
            }
        }
    }
}

impl Outcome<Value, Value> {
    /// Decode a boundary record produced by untrusted code. An `Err` record
    /// may carry any payload, including a missing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is not an outcome
    /// record, or if an `Ok` record carries a missing payload.
    pub fn from_value(value: &Value) -> Result<Self> {
        const OPERATION: &str = "Outcome::from_value(value)";

        if !is_outcome(value) {
            return Err(not_an_outcome(OPERATION, value));
        }
        let payload = value.get(PAYLOAD_KEY).cloned().unwrap_or_default();
        if value.tag() == Some(ERR) {
            return Ok(Self::Err(payload));
        }
        if payload.is_missing() {
            return Err(Error::invalid_argument(
                OPERATION,
                "value.value",
                "to be present, but it was missing",
            ));
        }
        Ok(Self::Ok(payload))
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Right(value) => Self::Ok(value),
            Either::Left(error) => Self::Err(error),
        }
    }
}

/// Encode as a boundary record understood by [`is_outcome`].
impl From<Outcome<Value, Value>> for Value {
    fn from(outcome: Outcome<Value, Value>) -> Self {
        match outcome {
            Outcome::Ok(value) => Self::tagged(OK, Some(value)),
            Outcome::Err(error) => Self::tagged(ERR, Some(error)),
        }
    }
}

/// Wrap a present `value` in `Ok`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is missing.
pub fn ok<T: Presence, E>(value: T) -> Result<Outcome<T, E>> {
    if value.is_missing() {
        return Err(Error::missing_payload("ok(value)"));
    }
    Ok(Outcome::Ok(value))
}

/// Wrap any `error` in `Err`. Missing payloads are accepted.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Whether `value` is a record carrying an `Outcome` discriminator.
#[must_use]
pub fn is_outcome(value: &Value) -> bool {
    is_object(value)
        && value
            .get(TYPE_KEY)
            .is_some_and(|tag| is_one_of(tag, &[Value::from(OK), Value::from(ERR)]))
}

/// Whether the outcome record `value` is an `Ok`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not an outcome record.
pub fn is_ok(value: &Value) -> Result<bool> {
    if !is_outcome(value) {
        return Err(not_an_outcome("is_ok(value)", value));
    }
    Ok(value.tag() == Some(OK))
}

/// Whether the outcome record `value` is an `Err`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not an outcome record.
pub fn is_err(value: &Value) -> Result<bool> {
    if !is_outcome(value) {
        return Err(not_an_outcome("is_err(value)", value));
    }
    Ok(value.tag() == Some(ERR))
}

fn not_an_outcome(operation: &str, value: &Value) -> Error {
    Error::invalid_argument(
        operation,
        "value",
        format!("to be of type Outcome<T, E>, but it was {}", value.kind()),
    )
}
