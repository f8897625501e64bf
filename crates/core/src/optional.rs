//! The optional value algebra.
//!
//! An [`Optional<T>`] is either `Some(T)`, holding exactly one present value,
//! or `None`. Combinators never mutate the receiver; each one produces a new
//! `Optional` (or a plain value). Accessors that can only succeed on one
//! variant return [`Result`] instead of panicking:
//!
//! ```
//! use funky_core::{none, some};
//!
//! let answer = some(41)?.map(|n| n + 1);
//! assert_eq!(answer.unwrap()?, 42);
//!
//! let nothing = none::<i32>().map(|n| n + 1);
//! assert!(nothing.unwrap().is_err());
//! assert_eq!(nothing.unwrap_or(-1), -1);
//! # Ok::<(), funky_core::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::Error;
use crate::outcome::Outcome;
use crate::predicates::{is_object, is_one_of};
use crate::presence::Presence;
use crate::result::Result;
use crate::value::{PAYLOAD_KEY, TYPE_KEY, Value};

const SOME: &str = "Some";
const NONE: &str = "None";

/// A value which might or might not be present.
///
/// Serializes as `{"_type": "Some", "value": v}` or `{"_type": "None"}`.
/// Decoding goes through [`some`], so a `Some` record with a missing payload
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "_type", content = "value")]
pub enum Optional<T> {
    Some(T),
    None,
}

/// Wire shape of an [`Optional`] record before the presence check.
#[derive(Deserialize)]
#[serde(tag = "_type", content = "value")]
enum OptionalRecord<T> {
    Some(T),
    None,
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de> + Presence,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match OptionalRecord::deserialize(deserializer)? {
            OptionalRecord::Some(value) => some(value).map_err(de::Error::custom),
            OptionalRecord::None => Ok(Self::None),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Optional<T> {
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrow the payload, leaving the receiver untouched.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Apply `f` to the payload of a `Some`. On `None`, `f` is never invoked.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(f(value)),
            Self::None => Optional::None,
        }
    }

    /// Visit the receiver with one handler per variant and return the
    /// handler's result. Exactly one handler runs.
    #[inline]
    pub fn match_with<U, S, N>(self, some: S, none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    /// Run `f` on the payload of a `Some` for its side effect. No-op on `None`.
    #[inline]
    pub fn match_some<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            f(value);
        }
    }

    /// Run `f` for its side effect if the receiver is `None`. No-op on `Some`.
    #[inline]
    pub fn match_none<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
    }

    /// The receiver if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// `other` if the receiver is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Chain a computation that may itself produce nothing. On `None`, `f` is
    /// never invoked.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Optional::None,
        }
    }

    /// Take the payload of a `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalState`] if the receiver is `None`.
    #[inline]
    pub fn unwrap(self) -> Result<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::illegal_state(
                "Optional::unwrap()",
                "cannot unwrap an absent optional",
            )),
        }
    }

    /// The payload of a `Some`, otherwise `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Turn absence into a failure carrying `error`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(f()),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl Optional<Value> {
    /// Decode a boundary record produced by untrusted code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is not an optional
    /// record, or if a `Some` record carries a missing payload.
    pub fn from_value(value: &Value) -> Result<Self> {
        const OPERATION: &str = "Optional::from_value(value)";

        if !is_option(value) {
            return Err(not_an_option(OPERATION, value));
        }
        if value.tag() == Some(NONE) {
            return Ok(Self::None);
        }
        let payload = value.get(PAYLOAD_KEY).cloned().unwrap_or_default();
        if payload.is_missing() {
            return Err(Error::invalid_argument(
                OPERATION,
                "value.value",
                "to be present, but it was missing",
            ));
        }
        Ok(Self::Some(payload))
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

/// Encode as a boundary record understood by [`is_option`].
impl From<Optional<Value>> for Value {
    fn from(optional: Optional<Value>) -> Self {
        match optional {
            Optional::Some(value) => Self::tagged(SOME, Some(value)),
            Optional::None => Self::tagged(NONE, None),
        }
    }
}

/// Wrap a present `value` in `Some`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is missing.
pub fn some<T: Presence>(value: T) -> Result<Optional<T>> {
    if value.is_missing() {
        return Err(Error::missing_payload("some(value)"));
    }
    Ok(Optional::Some(value))
}

/// An absent value of any payload type.
#[inline]
#[must_use]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Whether `value` is a record carrying an `Optional` discriminator.
#[must_use]
pub fn is_option(value: &Value) -> bool {
    is_object(value)
        && value
            .get(TYPE_KEY)
            .is_some_and(|tag| is_one_of(tag, &[Value::from(SOME), Value::from(NONE)]))
}

/// Whether the optional record `value` is a `Some`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not an optional record.
pub fn is_some(value: &Value) -> Result<bool> {
    if !is_option(value) {
        return Err(not_an_option("is_some(value)", value));
    }
    Ok(value.tag() == Some(SOME))
}

/// Whether the optional record `value` is a `None`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is not an optional record.
pub fn is_none(value: &Value) -> Result<bool> {
    if !is_option(value) {
        return Err(not_an_option("is_none(value)", value));
    }
    Ok(value.tag() == Some(NONE))
}

fn not_an_option(operation: &str, value: &Value) -> Error {
    Error::invalid_argument(
        operation,
        "value",
        format!("to be of type Optional<T>, but it was {}", value.kind()),
    )
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_some_rejects_missing_payload() {
        let result = some(Value::Null);
        assert!(result.as_ref().is_err_and(Error::is_invalid_argument));
        assert!(some(Value::Undefined).is_err());
        assert!(some(None::<i32>).is_err());
    }

    #[test]
    fn test_some_accepts_falsy_payloads() -> Result<()> {
        assert!(some(0)?.is_some());
        assert!(some("")?.is_some());
        assert!(some(false)?.is_some());
        assert!(some(Vec::<i32>::new())?.is_some());
        Ok(())
    }

    #[test]
    fn test_variants_are_exclusive() -> Result<()> {
        let present = some(42)?;
        assert!(present.is_some());
        assert!(!present.is_none());

        let absent = none::<i32>();
        assert!(absent.is_none());
        assert!(!absent.is_some());
        Ok(())
    }

    #[test]
    fn test_unwrap_none_is_illegal_state() {
        let error = none::<i32>().unwrap().err();
        assert_eq!(
            error.map(|e| e.to_string()),
            Some("Optional::unwrap(): cannot unwrap an absent optional".to_string())
        );
    }

    #[test]
    fn test_map_skips_handler_on_none() {
        let calls = Cell::new(0);
        let mapped = none::<i32>().map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert!(mapped.is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_match_with() -> Result<()> {
        assert_eq!(some(42)?.match_with(|x| x + 1, || -1), 43);
        assert_eq!(none::<i32>().match_with(|x| x + 1, || -1), -1);
        Ok(())
    }

    #[test]
    fn test_match_some_and_match_none_are_no_ops_on_wrong_variant() -> Result<()> {
        let calls = Cell::new(0);
        let present = some("value")?;
        present.match_none(|| calls.set(calls.get() + 1));
        none::<&str>().match_some(|_| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);

        let mut seen = None;
        present.match_some(|v| seen = Some(*v));
        assert_eq!(seen, Some("value"));
        Ok(())
    }

    #[test]
    fn test_or_keeps_original_some() -> Result<()> {
        assert_eq!(some(1)?.or(some(2)?).unwrap()?, 1);
        assert_eq!(none().or(some(2)?).unwrap()?, 2);
        assert!(none::<i32>().or(none()).is_none());
        Ok(())
    }

    #[test]
    fn test_and() -> Result<()> {
        assert_eq!(some(1)?.and(some("next")?).unwrap()?, "next");
        assert!(none::<i32>().and(some("next")?).is_none());
        assert!(some(1)?.and(none::<&str>()).is_none());
        Ok(())
    }

    #[test]
    fn test_and_then() -> Result<()> {
        let half = |n: i32| {
            if n % 2 == 0 {
                Optional::Some(n / 2)
            } else {
                Optional::None
            }
        };
        assert_eq!(some(8)?.and_then(half).and_then(half), Optional::Some(2));
        assert!(some(3)?.and_then(half).is_none());
        assert!(none().and_then(half).is_none());
        Ok(())
    }

    #[test]
    fn test_ok_or() -> Result<()> {
        assert_eq!(some(1)?.ok_or("missing"), Outcome::Ok(1));
        assert_eq!(none::<i32>().ok_or("missing"), Outcome::Err("missing"));
        assert_eq!(none::<i32>().ok_or_else(|| 7), Outcome::Err(7));
        Ok(())
    }

    #[test]
    fn test_std_option_conversions() {
        assert_eq!(Optional::from(Some(3)), Optional::Some(3));
        assert_eq!(Optional::<i32>::from(None), Optional::None);
        assert_eq!(Optional::Some("x").into_option(), Some("x"));
        assert_eq!(none::<u8>().into_option(), None);
    }

    #[test]
    fn test_as_ref_leaves_receiver_usable() -> Result<()> {
        let name = some(String::from("funky"))?;
        assert_eq!(name.as_ref().map(String::len).unwrap_or(0), 5);
        assert_eq!(name.unwrap()?, "funky");
        Ok(())
    }

    #[test]
    fn test_unwrap_or_variants() {
        assert_eq!(none::<i32>().unwrap_or_else(|| 5), 5);
        assert_eq!(none::<String>().unwrap_or_default(), "");
        assert_eq!(Optional::Some(2).unwrap_or_default(), 2);
    }

    #[test]
    fn test_guards_on_boundary_records() -> Result<()> {
        let present = Value::from(some(Value::from(42))?);
        let absent = Value::from(none::<Value>());

        assert!(is_option(&present));
        assert!(is_some(&present)?);
        assert!(!is_none(&present)?);
        assert!(is_none(&absent)?);
        assert!(!is_some(&absent)?);
        Ok(())
    }

    #[test]
    fn test_guards_reject_non_options() {
        let inputs = [
            Value::Null,
            Value::from(42),
            Value::object([("_type", Value::from("Ok"))]),
            Value::object([("value", Value::from(1))]),
            Value::array([Value::from("Some")]),
        ];
        for input in &inputs {
            assert!(!is_option(input));
            assert!(is_some(input).is_err_and(|e| e.is_invalid_argument()));
            assert!(is_none(input).is_err_and(|e| e.is_invalid_argument()));
        }
    }

    #[test]
    fn test_guard_error_names_operation() {
        let message = is_some(&Value::from(1)).err().map(|e| e.to_string());
        assert_eq!(
            message.as_deref(),
            Some("is_some(value) expected @value to be of type Optional<T>, but it was number")
        );
    }

    #[test]
    fn test_from_value() -> Result<()> {
        let record = Value::object([("_type", Value::from("Some")), ("value", Value::from("x"))]);
        assert_eq!(Optional::<Value>::from_value(&record)?, Optional::Some(Value::from("x")));

        let empty = Value::object([("_type", Value::from("None"))]);
        assert_eq!(Optional::<Value>::from_value(&empty)?, Optional::None);

        let hollow = Value::object([("_type", Value::from("Some")), ("value", Value::Null)]);
        assert!(Optional::<Value>::from_value(&hollow).is_err());
        assert!(Optional::<Value>::from_value(&Value::from("Some")).is_err());
        Ok(())
    }

    #[test]
    fn test_serde_shape_matches_guards() {
        let json = serde_json::to_value(Optional::Some(42)).ok();
        assert_eq!(json, Some(serde_json::json!({"_type": "Some", "value": 42})));
        assert_eq!(json.map(|json| is_some(&Value::from(json))), Some(Ok(true)));

        let json = serde_json::to_value(none::<i32>()).ok();
        assert_eq!(json, Some(serde_json::json!({"_type": "None"})));
    }

    #[test]
    fn test_deserialize_rejects_missing_some_payload() {
        let record = r#"{"_type": "Some", "value": null}"#;

        let decoded = serde_json::from_str::<Optional<Value>>(record);
        assert!(decoded.is_err_and(|e| e.to_string().contains("to be present")));
        assert!(serde_json::from_str::<Optional<Option<i32>>>(record).is_err());
    }

    #[test]
    fn test_deserialize_agrees_with_from_value() {
        let present = serde_json::from_str::<Optional<Value>>(r#"{"_type": "Some", "value": 0}"#);
        assert_eq!(present.ok(), Some(Optional::Some(Value::from(0))));

        let absent = serde_json::from_str::<Optional<Value>>(r#"{"_type": "None"}"#);
        assert_eq!(absent.ok(), Some(Optional::None));

        let nested = serde_json::from_str::<Optional<Option<i32>>>(r#"{"_type": "Some", "value": 5}"#);
        assert_eq!(nested.ok(), Some(Optional::Some(Some(5))));
    }
}
