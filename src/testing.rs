//! Testing utilities for rules
//!
//! This module provides a call-counting spy for checking how often rules,
//! producers and callbacks run, assertion macros for rule results, and
//! property-based testing support for [`Value`](crate::Value).
//!
//! # Examples
//!
//! ## Counting invocations
//!
//! ```rust
//! use okay::testing::CallCounter;
//! use okay::all;
//!
//! let calls = CallCounter::new();
//! let rule = all([calls.stub::<i32, ()>(false), calls.stub(true)]).unwrap();
//!
//! assert!(!rule.check(&0, &()).unwrap());
//! assert_eq!(calls.count(), 2); // no short-circuit
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use okay::{assert_fails, assert_passes, assert_rule_error, compose, gt, Rule};
//!
//! assert_passes!(gt(0), &1);
//! assert_fails!(gt(0), &-1);
//! assert_rule_error!(compose(Vec::<Rule<i32>>::new()), InvalidArgument);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::invoke::Callback;
use crate::resolvable::Resolvable;
use crate::rule::Rule;

/// A shared counter recording how many times something ran.
///
/// Clones share the same count, so a clone can be moved into a closure while
/// this handle is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }

    /// A rule that records each evaluation and always returns `result`.
    pub fn stub<V: ?Sized + 'static, C: 'static>(&self, result: bool) -> Rule<V, C> {
        let counter = self.clone();
        Rule::from_fn(move |_, _| {
            counter.record();
            result
        })
    }

    /// A callback that records each invocation.
    pub fn callback<V: ?Sized + 'static, C: 'static>(&self) -> Callback<V, C> {
        let counter = self.clone();
        Callback::new(move |_: &V, _: &C| counter.record())
    }

    /// A producer that records each resolution and yields a clone of `value`.
    pub fn producer<T, C>(&self, value: T) -> Resolvable<T, C>
    where
        T: Clone + Send + Sync + 'static,
        C: 'static,
    {
        let counter = self.clone();
        Resolvable::producer(move |_: &C| {
            counter.record();
            value.clone()
        })
    }
}

/// Assert that a rule holds for a value.
///
/// The context defaults to `&()`.
///
/// # Example
///
/// ```rust
/// use okay::{assert_passes, lt};
///
/// assert_passes!(lt(10), &3);
/// assert_passes!(lt(10), &3, &());
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($rule:expr, $value:expr) => {
        $crate::assert_passes!($rule, $value, &())
    };
    ($rule:expr, $value:expr, $context:expr) => {
        let value = $value;
        match $rule.check(value, $context) {
            Ok(true) => {}
            Ok(false) => panic!("Expected rule to pass, but it failed for {:?}", value),
            Err(e) => panic!("Expected rule to pass, got error: {}", e),
        }
    };
}

/// Assert that a rule does not hold for a value.
///
/// The context defaults to `&()`.
///
/// # Example
///
/// ```rust
/// use okay::{assert_fails, lt};
///
/// assert_fails!(lt(10), &30);
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($rule:expr, $value:expr) => {
        $crate::assert_fails!($rule, $value, &())
    };
    ($rule:expr, $value:expr, $context:expr) => {
        let value = $value;
        match $rule.check(value, $context) {
            Ok(false) => {}
            Ok(true) => panic!("Expected rule to fail, but it passed for {:?}", value),
            Err(e) => panic!("Expected rule to fail, got error: {}", e),
        }
    };
}

/// Assert that a result is a [`RuleError`](crate::RuleError), optionally of a
/// given kind.
///
/// # Example
///
/// ```rust
/// use okay::{assert_rule_error, create_rule};
///
/// let broken = create_rule(|_: &i32, _: &(), _: &()| None::<bool>, ());
/// assert_rule_error!(broken.check(&1, &()));
/// assert_rule_error!(broken.check(&1, &()), ContractViolation);
/// ```
#[macro_export]
macro_rules! assert_rule_error {
    ($result:expr) => {
        match $result {
            Err(_) => {}
            Ok(v) => panic!("Expected RuleError, got Ok: {:?}", v),
        }
    };
    ($result:expr, $kind:ident) => {
        match $result {
            Err($crate::RuleError::$kind { .. }) => {}
            other => panic!(
                "Expected RuleError::{}, got {:?}",
                stringify!($kind),
                other
            ),
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::value::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::value::Value;
        use std::time::{Duration, UNIX_EPOCH};

        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::String),
            (0u64..4_000_000_000_000)
                .prop_map(|ms| Value::Date(UNIX_EPOCH + Duration::from_millis(ms))),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{gt, lt};

    #[test]
    fn counter_starts_at_zero() {
        let calls = CallCounter::new();
        assert_eq!(calls.count(), 0);
        calls.record();
        calls.clone().record();
        assert_eq!(calls.count(), 2);
        calls.reset();
        assert_eq!(calls.count(), 0);
    }

    #[test]
    fn stub_records_evaluations() {
        let calls = CallCounter::new();
        let rule = calls.stub::<i32, ()>(true);
        assert_eq!(rule.check_value(&1), Ok(true));
        assert_eq!(rule.check_value(&2), Ok(true));
        assert_eq!(calls.count(), 2);
    }

    #[test]
    fn producer_records_resolutions() {
        let calls = CallCounter::new();
        let producer: Resolvable<i32> = calls.producer(5);
        assert_eq!(*producer.resolve(&()), 5);
        assert_eq!(calls.count(), 1);
    }

    #[test]
    fn assert_passes_macro() {
        assert_passes!(gt(0), &1);
        assert_passes!(lt(0), &-1, &());
    }

    #[test]
    fn assert_fails_macro() {
        assert_fails!(gt(0), &0);
    }

    #[test]
    #[should_panic(expected = "Expected rule to pass, but it failed")]
    fn assert_passes_panics_on_failure() {
        assert_passes!(gt(0), &-1);
    }

    #[test]
    #[should_panic(expected = "Expected rule to fail, but it passed")]
    fn assert_fails_panics_on_success() {
        assert_fails!(gt(0), &1);
    }

    #[test]
    #[should_panic(expected = "Expected RuleError::InvalidArgument")]
    fn assert_rule_error_checks_kind() {
        let broken = crate::create_rule(|_: &i32, _: &(), _: &()| None::<bool>, ());
        assert_rule_error!(broken.check(&1, &()), InvalidArgument);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::primitives::{empty, required};
        use crate::value::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn null_is_never_required(value in any::<Value>()) {
                let present = required::<Value, ()>().check_value(&value).unwrap();
                prop_assert_eq!(present, !value.is_null() && value != Value::from(""));
            }

            #[test]
            fn empty_matches_value_emptiness(value in any::<Value>()) {
                prop_assert_eq!(empty::<()>().check_value(&value).unwrap(), value.is_empty());
            }
        }
    }
}
