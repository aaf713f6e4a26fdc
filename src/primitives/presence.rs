//! Presence and emptiness rules

use crate::rule::{create_rule, Rule};
use crate::value::Value;

/// Values that can be missing.
///
/// A value is present unless it is null/`None` or an empty string.
/// Collections count as present even when they have no elements.
pub trait Presence {
    /// Returns true when the value is present.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        true
    }
}

impl Presence for Value {
    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

macro_rules! always_present {
    ($($ty:ty),*) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present!(bool, char, f32, f64);
always_present!(i8, i16, i32, i64, i128, isize);
always_present!(u8, u16, u32, u64, u128, usize);

/// Create a rule that checks the value is present.
///
/// # Example
///
/// ```rust
/// use okay::{required, Value};
///
/// assert!(!required().check(&Value::Null, &()).unwrap());
/// assert!(!required().check("", &()).unwrap());
/// assert!(required().check(&Value::from(0), &()).unwrap());
/// ```
pub fn required<V, C>() -> Rule<V, C>
where
    V: Presence + ?Sized + 'static,
    C: 'static,
{
    create_rule(|value: &V, _: &(), _: &C| value.is_present(), ())
}

/// Create a rule that checks the value is empty.
///
/// See [`Value::is_empty`] for what counts as empty.
///
/// # Example
///
/// ```rust
/// use okay::{empty, Value};
///
/// assert!(empty().check(&Value::Null, &()).unwrap());
/// assert!(!empty().check(&Value::from(vec![1, 2, 3]), &()).unwrap());
/// ```
pub fn empty<C: 'static>() -> Rule<Value, C> {
    create_rule(|value: &Value, _: &(), _: &C| value.is_empty(), ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = required::<Value, ()>();
        assert_eq!(rule.check_value(&Value::Null), Ok(false));
        assert_eq!(rule.check_value(&Value::from("")), Ok(false));
        assert_eq!(rule.check_value(&Value::from(0)), Ok(true));
        assert_eq!(rule.check_value(&Value::from(false)), Ok(true));
        assert_eq!(rule.check_value(&Value::from(Vec::<i32>::new())), Ok(true));
    }

    #[test]
    fn test_required_on_options() {
        let rule = required::<Option<String>, ()>();
        assert_eq!(rule.check_value(&None), Ok(false));
        assert_eq!(rule.check_value(&Some(String::new())), Ok(false));
        assert_eq!(rule.check_value(&Some("x".to_string())), Ok(true));

        let rule = required::<Option<i32>, ()>();
        assert_eq!(rule.check_value(&Some(0)), Ok(true));
    }

    #[test]
    fn test_empty() {
        let rule = empty::<()>();
        assert_eq!(rule.check_value(&Value::Null), Ok(true));
        assert_eq!(rule.check_value(&Value::from(true)), Ok(true));
        assert_eq!(rule.check_value(&Value::from(1)), Ok(true));
        assert_eq!(rule.check_value(&Value::from(vec![1, 2, 3])), Ok(false));
        assert_eq!(rule.check_value(&Value::from_iter([("a", 1)])), Ok(false));
    }
}
