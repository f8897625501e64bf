//! Presence checks for statically typed payloads.
//!
//! The checked constructors [`some`](crate::some) and [`ok`](crate::ok)
//! refuse to wrap a missing payload. Most Rust types cannot be missing at
//! all; the ones that can (a `None`, a JSON `null`, a [`Value`] absence
//! marker) say so through this trait.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::optional::Optional;
use crate::outcome::Outcome;
use crate::predicates;
use crate::value::{Function, Value};

/// A payload that may or may not be present.
///
/// The default implementation reports the payload as always present, so a
/// type that has no notion of absence opts in with an empty impl:
///
/// ```
/// use funky_core::{some, Presence};
///
/// struct Date(u32, u32, u32);
/// impl Presence for Date {}
///
/// assert!(some(Date(2020, 5, 25)).is_ok());
/// ```
pub trait Presence {
    /// Whether this payload is the absence marker of its type.
    fn is_missing(&self) -> bool {
        false
    }

    fn is_present(&self) -> bool {
        !self.is_missing()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

always_present!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    Function,
);

macro_rules! forward_presence {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Presence + ?Sized> Presence for $wrapper<T> {
                fn is_missing(&self) -> bool {
                    (**self).is_missing()
                }
            }
        )*
    };
}

forward_presence!(Box, Rc, Arc);

impl<T: Presence + ?Sized> Presence for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

impl<T> Presence for [T] {}
impl<T, const N: usize> Presence for [T; N] {}
impl<T> Presence for Vec<T> {}
impl<T> Presence for VecDeque<T> {}
impl<T> Presence for BTreeSet<T> {}
impl<T, S> Presence for HashSet<T, S> {}
impl<K, V> Presence for BTreeMap<K, V> {}
impl<K, V, S> Presence for HashMap<K, V, S> {}

impl<A, B> Presence for (A, B) {}
impl<A, B, C> Presence for (A, B, C) {}

impl<T> Presence for Optional<T> {}
impl<T, E> Presence for Outcome<T, E> {}

/// `None` is missing.
impl<T> Presence for Option<T> {
    fn is_missing(&self) -> bool {
        self.is_none()
    }
}

/// `Null` and `Undefined` are missing.
impl Presence for Value {
    fn is_missing(&self) -> bool {
        predicates::is_missing(self)
    }
}

/// `null` is missing.
impl Presence for serde_json::Value {
    fn is_missing(&self) -> bool {
        self.is_null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_are_present() {
        assert!(0_i32.is_present());
        assert!(false.is_present());
        assert!("".is_present());
        assert!(String::new().is_present());
        assert!(().is_present());
        assert!(f64::NAN.is_present());
    }

    #[test]
    fn test_empty_collections_are_present() {
        assert!(Vec::<i32>::new().is_present());
        assert!(HashMap::<String, i32>::new().is_present());
        assert!([0_u8; 0].is_present());
    }

    #[test]
    fn test_option_none_is_missing() {
        assert!(None::<i32>.is_missing());
        assert!(Some(0).is_present());
        assert!(Some(None::<i32>).is_present());
    }

    #[test]
    fn test_value_absence_markers_are_missing() {
        assert!(Value::Null.is_missing());
        assert!(Value::Undefined.is_missing());
        assert!(Value::from("").is_present());
        assert!(serde_json::Value::Null.is_missing());
        assert!(serde_json::json!([]).is_present());
    }

    #[test]
    fn test_wrappers_forward() {
        assert!(Box::new(Value::Null).is_missing());
        assert!(Arc::new(None::<u8>).is_missing());
        assert!((&Value::Undefined).is_missing());
        assert!(Rc::new(1_i32).is_present());
    }
}
