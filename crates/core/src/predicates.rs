//! Type-predicate helpers.
//!
//! Every predicate is total: it accepts any [`Value`] and answers with a
//! `bool`, never an error.

use crate::value::Value;

/// Whether `value` is `Undefined`.
#[must_use]
pub const fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Whether `value` is `Null`.
#[must_use]
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Whether `value` is missing, i.e. either `Null` or `Undefined`.
#[must_use]
pub const fn is_missing(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Undefined)
}

/// Whether `value` is present, i.e. neither `Null` nor `Undefined`.
#[must_use]
pub const fn is_present(value: &Value) -> bool {
    !is_missing(value)
}

#[must_use]
pub const fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

#[must_use]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

#[must_use]
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

#[must_use]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

#[must_use]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Whether `value` is a plain keyed record. Arrays, functions and the
/// absence markers are not objects.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Whether `items` has no elements.
#[must_use]
pub const fn is_array_empty<T>(items: &[T]) -> bool {
    items.is_empty()
}

/// Whether `value` is an array whose every element satisfies `check`.
///
/// An empty array satisfies any `check`; a non-array never does.
pub fn is_array_of<F>(value: &Value, check: F) -> bool
where
    F: Fn(&Value) -> bool,
{
    value
        .as_array()
        .is_some_and(|items| items.iter().all(|item| check(item)))
}

/// Whether `value` is strictly equal to at least one of `options`.
///
/// See [`Value::strict_eq`] for the equality used.
#[must_use]
pub fn is_one_of(value: &Value, options: &[Value]) -> bool {
    options.iter().any(|option| option.strict_eq(value))
}
