//! Comparison rules
//!
//! Each comparison takes a parameter that is either a literal or a
//! [`Resolvable::Producer`](crate::Resolvable::Producer) resolved against the
//! context on every evaluation.

use crate::rule::{create_rule, IntoResolvable, Rule};

/// Create a rule that checks for equality with `param`.
///
/// # Example
///
/// ```rust
/// use okay::eq;
///
/// assert!(eq(5).check(&5, &()).unwrap());
/// assert!(!eq(5).check(&4, &()).unwrap());
/// ```
pub fn eq<V, P, C>(param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: PartialEq<P> + ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    create_rule(|value: &V, param: &P, _: &C| *value == *param, param)
}

/// Create a rule that checks if the value is greater than `param`.
///
/// # Example
///
/// ```rust
/// use okay::gt;
///
/// assert!(gt(5).check(&6, &()).unwrap());
/// assert!(!gt(5).check(&5, &()).unwrap());
/// assert!(!gt(5).check(&4, &()).unwrap());
/// ```
pub fn gt<V, P, C>(param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: PartialOrd<P> + ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    create_rule(|value: &V, param: &P, _: &C| *value > *param, param)
}

/// Create a rule that checks if the value is greater than or equal to `param`.
///
/// # Example
///
/// ```rust
/// use okay::gte;
///
/// assert!(gte(5).check(&6, &()).unwrap());
/// assert!(gte(5).check(&5, &()).unwrap());
/// assert!(!gte(5).check(&4, &()).unwrap());
/// ```
pub fn gte<V, P, C>(param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: PartialOrd<P> + ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    create_rule(|value: &V, param: &P, _: &C| *value >= *param, param)
}

/// Create a rule that checks if the value is less than `param`.
///
/// # Example
///
/// ```rust
/// use okay::lt;
///
/// assert!(lt(5).check(&4, &()).unwrap());
/// assert!(!lt(5).check(&5, &()).unwrap());
/// assert!(!lt(5).check(&6, &()).unwrap());
/// ```
pub fn lt<V, P, C>(param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: PartialOrd<P> + ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    create_rule(|value: &V, param: &P, _: &C| *value < *param, param)
}

/// Create a rule that checks if the value is less than or equal to `param`.
///
/// # Example
///
/// ```rust
/// use okay::lte;
///
/// assert!(lte(5).check(&4, &()).unwrap());
/// assert!(lte(5).check(&5, &()).unwrap());
/// assert!(!lte(5).check(&6, &()).unwrap());
/// ```
pub fn lte<V, P, C>(param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: PartialOrd<P> + ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    create_rule(|value: &V, param: &P, _: &C| *value <= *param, param)
}
