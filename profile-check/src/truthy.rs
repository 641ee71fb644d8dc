//! The "present and non-empty" predicate applied to every required field.
//!
//! A value is truthy when it carries information:
//!
//! | Type | Truthy when |
//! |---|---|
//! | strings | non-empty |
//! | integers | non-zero |
//! | floats | non-zero and not NaN |
//! | `bool` | `true` |
//! | `Option<T>` | `Some` and the inner value is truthy |
//! | slices, `Vec` | non-empty |
//! | JSON values | by the rules above; `null` is falsy, empty objects too |
//!
//! Zero is falsy for every numeric type, so an age of `0` counts as missing.

use crate::json::JsonValue;
use miniserde::json::{Number, Value};

/// A value that can be tested for presence.
pub trait Truthy {
    /// Whether this value counts as filled in.
    fn is_truthy(&self) -> bool;
}

/// Free-function form of [`Truthy::is_truthy`].
///
/// ```
/// use profile_check::is_truthy;
///
/// assert!(is_truthy("vegetarian"));
/// assert!(!is_truthy(""));
/// assert!(!is_truthy(&0_u32));
/// assert!(!is_truthy(&None::<String>));
/// ```
#[inline]
#[must_use]
pub fn is_truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

// === Strings ===

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for std::borrow::Cow<'_, str> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// === Numbers ===

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

// === Containers ===

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for std::rc::Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for std::sync::Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// === JSON ===

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(Number::I64(i)) => *i != 0,
            Value::Number(Number::U64(u)) => *u != 0,
            Value::Number(Number::F64(f)) => f.is_truthy(),
            Value::String(s) => !s.is_empty(),
            Value::Array(arr) => !arr.is_empty(),
            Value::Object(obj) => !obj.is_empty(),
        }
    }
}

impl Truthy for JsonValue {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.path_truthy(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use miniserde::json::{Array, Object};

    #[test]
    fn test_strings() {
        assert!("a".is_truthy());
        assert!(!"".is_truthy());
        assert!(String::from(" ").is_truthy());
        assert!(!String::new().is_truthy());
        assert!(std::borrow::Cow::Borrowed("x").is_truthy());
    }

    #[test]
    fn test_integers() {
        assert!(1_i8.is_truthy());
        assert!((-1_i64).is_truthy());
        assert!(!0_u32.is_truthy());
        assert!(!0_usize.is_truthy());
        assert!(u128::MAX.is_truthy());
    }

    #[test]
    fn test_floats() {
        assert!(0.5_f64.is_truthy());
        assert!(f64::INFINITY.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(!(-0.0_f64).is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!f32::NAN.is_truthy());
        assert!(!0.0_f32.is_truthy());
    }

    #[test]
    fn test_bool() {
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
    }

    #[test]
    fn test_option_requires_truthy_inner() {
        assert!(Some("x".to_string()).is_truthy());
        assert!(!Some(String::new()).is_truthy());
        assert!(!Some(0_i64).is_truthy());
        assert!(!None::<i64>.is_truthy());
        assert!(!Some(None::<String>).is_truthy());
    }

    #[test]
    fn test_collections() {
        assert!(vec![0].is_truthy());
        assert!(!Vec::<u8>::new().is_truthy());
        let empty: &[u8] = &[];
        assert!(!empty.is_truthy());
    }

    #[test]
    fn test_pointers() {
        assert!(Box::new("x").is_truthy());
        assert!(!std::rc::Rc::new(0_u8).is_truthy());
        assert!(std::sync::Arc::new(String::from("y")).is_truthy());
        assert!(is_truthy(&&&"nested"));
    }

    #[test]
    fn test_raw_value() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Number(Number::U64(3)).is_truthy());
        assert!(!Value::Number(Number::I64(0)).is_truthy());
        assert!(!Value::Number(Number::F64(0.0)).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(!Value::Array(Array::new()).is_truthy());
        assert!(!Value::Object(Object::new()).is_truthy());
    }

    #[test]
    fn test_json_value_lazy_and_parsed_agree() {
        for text in ["null", "0", "1", "\"\"", "\"a\"", "[]", "[1]", "{}", "{\"a\":1}", "true", "false"] {
            let lazy = json::try_parse(text.as_bytes()).unwrap();
            let full = json::try_parse_full(text.as_bytes()).unwrap();
            assert_eq!(lazy.is_truthy(), full.is_truthy(), "disagree on {text}");
        }
    }

    #[test]
    fn test_json_value_builders() {
        assert!(json::str("a").is_truthy());
        assert!(!json::str("").is_truthy());
        assert!(!json::int(0).is_truthy());
        assert!(!json::null().is_truthy());
        assert!(!json::obj().is_truthy());
        assert!(json::arr().push(json::null()).is_truthy());
    }
}
