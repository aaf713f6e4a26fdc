//! Logical combinators over rules
//!
//! `all` and `any` are ordinary rules built by the factory: their parameter
//! is the composed list of sub-rules and their resolution function folds the
//! composed results. Because composition never stops early, every sub-rule
//! runs on every evaluation, including any callbacks attached through the
//! conditional invokers.
//!
//! # Example
//!
//! ```rust
//! use okay::{all, any, gt, lt, not};
//!
//! let in_range = all([gt(0), lt(5)]).unwrap();
//! assert!(in_range.check(&3, &()).unwrap());
//! assert!(!in_range.check(&6, &()).unwrap());
//!
//! let outside = any([lt(0), gt(5)]).unwrap();
//! assert!(outside.check(&6, &()).unwrap());
//!
//! assert!(not(outside).check(&3, &()).unwrap());
//! ```

use std::ops;

use crate::compose::{compose, Composed};
use crate::error::RuleError;
use crate::resolvable::Resolvable;
use crate::rule::{create_rule, Rule};

fn fold<V, C>(composed: Composed<V, C>, seed: bool, op: fn(bool, bool) -> bool) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
{
    create_rule(
        move |value: &V, composed: &Composed<V, C>, context: &C| -> Result<bool, RuleError> {
            Ok(composed.apply(value, context)?.into_iter().fold(seed, op))
        },
        Resolvable::Literal(composed),
    )
}

/// Rule that holds when every sub-rule holds.
///
/// All sub-rules are evaluated, left to right, even after one fails.
/// Fails with [`RuleError::InvalidArgument`] when no rules are given.
pub fn all<V, C, I>(rules: I) -> Result<Rule<V, C>, RuleError>
where
    V: ?Sized + 'static,
    C: 'static,
    I: IntoIterator<Item = Rule<V, C>>,
{
    Ok(fold(compose(rules)?, true, |acc, result| acc && result))
}

/// Alias for [`all`].
pub fn and<V, C, I>(rules: I) -> Result<Rule<V, C>, RuleError>
where
    V: ?Sized + 'static,
    C: 'static,
    I: IntoIterator<Item = Rule<V, C>>,
{
    all(rules)
}

/// Rule that holds when at least one sub-rule holds.
///
/// All sub-rules are evaluated, left to right, even after one succeeds.
/// Fails with [`RuleError::InvalidArgument`] when no rules are given.
pub fn any<V, C, I>(rules: I) -> Result<Rule<V, C>, RuleError>
where
    V: ?Sized + 'static,
    C: 'static,
    I: IntoIterator<Item = Rule<V, C>>,
{
    Ok(fold(compose(rules)?, false, |acc, result| acc || result))
}

/// Alias for [`any`].
pub fn or<V, C, I>(rules: I) -> Result<Rule<V, C>, RuleError>
where
    V: ?Sized + 'static,
    C: 'static,
    I: IntoIterator<Item = Rule<V, C>>,
{
    any(rules)
}

/// Rule that inverts another rule.
pub fn not<V, C>(rule: Rule<V, C>) -> Rule<V, C>
where
    V: ?Sized + 'static,
    C: 'static,
{
    create_rule(
        |value: &V, rule: &Rule<V, C>, context: &C| rule.check(value, context).map(|r| !r),
        Resolvable::Literal(rule),
    )
}

impl<V: ?Sized + 'static, C: 'static> Rule<V, C> {
    /// Combine with AND logic. Both rules always run.
    ///
    /// ```rust
    /// use okay::{gt, lt};
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.check(&50, &()).unwrap());
    /// assert!(!p.check(&0, &()).unwrap());
    /// ```
    pub fn and(self, other: Rule<V, C>) -> Rule<V, C> {
        fold(Composed::pair(self, other), true, |acc, result| {
            acc && result
        })
    }

    /// Combine with OR logic. Both rules always run.
    ///
    /// ```rust
    /// use okay::{gt, lt};
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.check(&-5, &()).unwrap());
    /// assert!(!p.check(&50, &()).unwrap());
    /// ```
    pub fn or(self, other: Rule<V, C>) -> Rule<V, C> {
        fold(Composed::pair(self, other), false, |acc, result| {
            acc || result
        })
    }
}

impl<V: ?Sized + 'static, C: 'static> ops::Not for Rule<V, C> {
    type Output = Rule<V, C>;

    fn not(self) -> Rule<V, C> {
        not(self)
    }
}

/// Build an [`all`] rule from a comma-separated list of rules.
///
/// ```rust
/// use okay::{gt, lt};
///
/// let rule = okay::all!(gt(0), lt(5));
/// assert!(rule.check(&3, &()).unwrap());
/// ```
#[macro_export]
macro_rules! all {
    ($first:expr $(, $rule:expr)* $(,)?) => {
        $first$(.and($rule))*
    };
}

/// Build an [`any`] rule from a comma-separated list of rules.
///
/// ```rust
/// use okay::{gt, lt};
///
/// let rule = okay::any!(lt(0), gt(5));
/// assert!(rule.check(&6, &()).unwrap());
/// ```
#[macro_export]
macro_rules! any {
    ($first:expr $(, $rule:expr)* $(,)?) => {
        $first$(.or($rule))*
    };
}
