//! Conditional invokers
//!
//! These rules evaluate an inner rule and, depending on its result, fire
//! caller-supplied callbacks. The returned boolean is always the inner
//! rule's result; callbacks only produce side effects.
//!
//! Callbacks receive the resolved value and the evaluation context. Anything
//! else a callback needs (a logger, an error list) is captured by the
//! closure.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use okay::{all, gt, invoke_if_not, lt};
//!
//! let errors = Arc::new(Mutex::new(Vec::new()));
//! let log = |message: &'static str| {
//!     let errors = Arc::clone(&errors);
//!     move |_: &i32, _: &()| errors.lock().unwrap().push(message)
//! };
//!
//! let rule = all([
//!     invoke_if_not(gt(0), log("must be positive")),
//!     invoke_if_not(lt(10), log("must be below 10")),
//! ])
//! .unwrap();
//!
//! assert!(!rule.check(&-20, &()).unwrap());
//! assert_eq!(*errors.lock().unwrap(), vec!["must be positive"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::RuleError;
use crate::resolvable::Resolvable;
use crate::rule::{create_rule, Rule};

/// A side-effecting callback fired by the conditional invokers.
pub struct Callback<V: ?Sized, C = ()>(Arc<dyn Fn(&V, &C) + Send + Sync>);

impl<V: ?Sized, C> Callback<V, C> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&V, &C) + Send + Sync + 'static,
    {
        Callback(Arc::new(f))
    }

    /// Invoke the callback.
    #[inline]
    pub fn call(&self, value: &V, context: &C) {
        (self.0)(value, context)
    }
}

impl<V: ?Sized, C> Clone for Callback<V, C> {
    fn clone(&self) -> Self {
        Callback(Arc::clone(&self.0))
    }
}

impl<V: ?Sized, C> fmt::Debug for Callback<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(<fn>)")
    }
}

struct Branches<V: ?Sized, C> {
    rule: Rule<V, C>,
    on_true: Option<Callback<V, C>>,
    on_false: Option<Callback<V, C>>,
}

impl<V: ?Sized, C> Clone for Branches<V, C> {
    fn clone(&self) -> Self {
        Branches {
            rule: self.rule.clone(),
            on_true: self.on_true.clone(),
            on_false: self.on_false.clone(),
        }
    }
}

fn branch<V, C>(branches: Branches<V, C>) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
{
    create_rule(
        |value: &V, branches: &Branches<V, C>, context: &C| -> Result<bool, RuleError> {
            let result = branches.rule.check(value, context)?;
            let callback = if result {
                &branches.on_true
            } else {
                &branches.on_false
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(
                result,
                fired = callback.is_some(),
                "conditional rule evaluated"
            );

            if let Some(callback) = callback {
                callback.call(value, context);
            }
            Ok(result)
        },
        Resolvable::Literal(branches),
    )
}

/// Evaluate `rule`, then fire `then_callback` on success or `else_callback`
/// on failure.
///
/// Either callback may be `None`; a missing callback is a no-op.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use okay::{call_if, eq, Callback};
///
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// let rule = call_if(
///     eq(1),
///     Some(Callback::new(move |_: &i32, _: &()| flag.store(true, Ordering::SeqCst))),
///     None,
/// );
///
/// assert!(rule.check(&1, &()).unwrap());
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub fn call_if<V, C>(
    rule: Rule<V, C>,
    then_callback: Option<Callback<V, C>>,
    else_callback: Option<Callback<V, C>>,
) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
{
    branch(Branches {
        rule,
        on_true: then_callback,
        on_false: else_callback,
    })
}

/// Evaluate `rule`, then fire `if_callback` on success or `if_not_callback`
/// on failure.
pub fn invoke<V, C, F, G>(rule: Rule<V, C>, if_callback: F, if_not_callback: G) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
    F: Fn(&V, &C) + Send + Sync + 'static,
    G: Fn(&V, &C) + Send + Sync + 'static,
{
    branch(Branches {
        rule,
        on_true: Some(Callback::new(if_callback)),
        on_false: Some(Callback::new(if_not_callback)),
    })
}

/// Evaluate `rule` and fire `callback` only when it holds.
pub fn invoke_if<V, C, F>(rule: Rule<V, C>, callback: F) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
    F: Fn(&V, &C) + Send + Sync + 'static,
{
    branch(Branches {
        rule,
        on_true: Some(Callback::new(callback)),
        on_false: None,
    })
}

/// Evaluate `rule` and fire `callback` only when it does not hold.
pub fn invoke_if_not<V, C, F>(rule: Rule<V, C>, callback: F) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
    F: Fn(&V, &C) + Send + Sync + 'static,
{
    branch(Branches {
        rule,
        on_true: None,
        on_false: Some(Callback::new(callback)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::gt;
    use crate::testing::CallCounter;
    use std::sync::Mutex;

    #[test]
    fn test_call_if_then_branch() {
        let rule_calls = CallCounter::new();
        let then_calls = CallCounter::new();
        let else_calls = CallCounter::new();

        let rule = call_if(
            rule_calls.stub::<(), ()>(true),
            Some(then_calls.callback()),
            Some(else_calls.callback()),
        );

        assert_eq!(rule.check_value(&()), Ok(true));
        assert_eq!(rule_calls.count(), 1);
        assert_eq!(then_calls.count(), 1);
        assert_eq!(else_calls.count(), 0);
    }

    #[test]
    fn test_call_if_else_branch() {
        let rule_calls = CallCounter::new();
        let else_calls = CallCounter::new();

        let on_false = Some(else_calls.callback());
        let rule = call_if(rule_calls.stub::<(), ()>(false), None, on_false);

        assert_eq!(rule.check_value(&()), Ok(false));
        assert_eq!(rule_calls.count(), 1);
        assert_eq!(else_calls.count(), 1);
    }

    #[test]
    fn test_call_if_missing_callbacks_are_no_ops() {
        let calls = CallCounter::new();
        let rule = call_if(calls.stub::<(), ()>(true), None, None);
        assert_eq!(rule.check_value(&()), Ok(true));
        let rule = call_if(calls.stub::<(), ()>(false), None, None);
        assert_eq!(rule.check_value(&()), Ok(false));
    }

    #[test]
    fn test_callbacks_receive_value_and_context() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let rule = invoke(
            gt(0),
            {
                let sink = Arc::clone(&sink);
                move |v: &i32, ctx: &u8| sink.lock().unwrap().push(format!("ok {} {}", v, ctx))
            },
            move |v: &i32, ctx: &u8| sink.lock().unwrap().push(format!("bad {} {}", v, ctx)),
        );

        assert_eq!(rule.check(&3, &1), Ok(true));
        assert_eq!(rule.check(&-3, &2), Ok(false));
        assert_eq!(*seen.lock().unwrap(), vec!["ok 3 1", "bad -3 2"]);
    }

    #[test]
    fn test_invoke_if() {
        let calls = CallCounter::new();
        let hits = calls.clone();
        let rule = invoke_if(gt(0), move |_: &i32, _: &()| hits.record());

        assert_eq!(rule.check_value(&1), Ok(true));
        assert_eq!(rule.check_value(&-1), Ok(false));
        assert_eq!(calls.count(), 1);
    }

    #[test]
    fn test_invoke_if_not() {
        let calls = CallCounter::new();
        let hits = calls.clone();
        let rule = invoke_if_not(gt(0), move |_: &i32, _: &()| hits.record());

        assert_eq!(rule.check_value(&1), Ok(true));
        assert_eq!(rule.check_value(&-1), Ok(false));
        assert_eq!(rule.check_value(&-2), Ok(false));
        assert_eq!(calls.count(), 2);
    }

    #[test]
    fn test_inner_error_skips_callbacks() {
        let calls = CallCounter::new();
        let broken = create_rule(|_: &i32, _: &(), _: &()| None::<bool>, ());
        let rule = call_if(broken, Some(calls.callback()), Some(calls.callback()));
        assert_eq!(rule.check_value(&0), Err(RuleError::ContractViolation));
        assert_eq!(calls.count(), 0);
    }
}
