//! Running several rules against one value
//!
//! [`compose`] is the building block behind [`all`](crate::all) and
//! [`any`](crate::any). It evaluates every rule, in order, with the same
//! value and context, and never stops early.

use std::fmt;

use crate::error::RuleError;
use crate::rule::Rule;

/// An ordered, non-empty sequence of rules evaluated together.
pub struct Composed<V: ?Sized, C = ()> {
    rules: Vec<Rule<V, C>>,
}

impl<V: ?Sized, C> Clone for Composed<V, C> {
    fn clone(&self) -> Self {
        Composed {
            rules: self.rules.clone(),
        }
    }
}

impl<V: ?Sized, C> fmt::Debug for Composed<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<V: ?Sized, C> Composed<V, C> {
    pub(crate) fn pair(first: Rule<V, C>, second: Rule<V, C>) -> Self {
        Composed {
            rules: vec![first, second],
        }
    }

    /// Evaluate every rule and collect the results in rule order.
    ///
    /// All rules run even when an earlier one returned `false`. An error
    /// from any rule is returned immediately.
    pub fn apply(&self, value: &V, context: &C) -> Result<Vec<bool>, RuleError> {
        let results = self
            .rules
            .iter()
            .map(|rule| rule.check(value, context))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(?results, "composed rules evaluated");

        Ok(results)
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[Rule<V, C>] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a composition holds at least one rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compose rules into a function producing one boolean per rule.
///
/// Fails with [`RuleError::InvalidArgument`] when no rules are given.
///
/// # Example
///
/// ```rust
/// use okay::{compose, gt, lt};
///
/// let bounds = compose([gt(0), lt(10)]).unwrap();
/// assert_eq!(bounds.apply(&5, &()).unwrap(), vec![true, true]);
/// assert_eq!(bounds.apply(&15, &()).unwrap(), vec![true, false]);
///
/// assert!(compose(Vec::<okay::Rule<i32>>::new()).is_err());
/// ```
pub fn compose<V, C, I>(rules: I) -> Result<Composed<V, C>, RuleError>
where
    V: ?Sized,
    I: IntoIterator<Item = Rule<V, C>>,
{
    let rules: Vec<_> = rules.into_iter().collect();
    if rules.is_empty() {
        return Err(RuleError::invalid_argument("rules", "rules are missing"));
    }
    Ok(Composed { rules })
}

/// Compose a comma-separated list of rules.
///
/// ```rust
/// use okay::{gt, lt};
///
/// let composed = okay::compose!(gt(0), lt(10), lt(3)).unwrap();
/// assert_eq!(composed.apply(&5, &()).unwrap(), vec![true, true, false]);
/// ```
#[macro_export]
macro_rules! compose {
    ($($rule:expr),+ $(,)?) => {
        $crate::compose(::std::vec![$($rule),+])
    };
}
