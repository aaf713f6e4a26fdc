//! Type-check rules over [`Value`]

use crate::rule::{create_rule, Rule};
use crate::value::Value;

fn kind_rule<C: 'static>(matches: fn(&Value) -> bool) -> Rule<Value, C> {
    create_rule(move |value: &Value, _: &(), _: &C| matches(value), ())
}

/// Create a rule that checks the value is an array.
pub fn array<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| matches!(value, Value::Array(_)))
}

/// Create a rule that checks the value is a boolean.
pub fn boolean<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| matches!(value, Value::Bool(_)))
}

/// Create a rule that checks the value is a date.
pub fn date<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| matches!(value, Value::Date(_)))
}

/// Create a rule that checks the value is a number.
pub fn number<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| matches!(value, Value::Number(_)))
}

/// Create a rule that checks the value is object-like.
///
/// Arrays and dates are objects too; null and scalars are not.
///
/// ```rust
/// use okay::{object, Value};
///
/// assert!(object().check(&Value::from(vec![1]), &()).unwrap());
/// assert!(!object().check(&Value::Null, &()).unwrap());
/// ```
pub fn object<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| {
        matches!(value, Value::Object(_) | Value::Array(_) | Value::Date(_))
    })
}

/// Create a rule that checks the value is a string.
pub fn string<C: 'static>() -> Rule<Value, C> {
    kind_rule(|value| matches!(value, Value::String(_)))
}
