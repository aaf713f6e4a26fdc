//! Rule type and the rule factory
//!
//! Every rule in this crate, primitives and combinators alike, is produced
//! by [`create_rule`] (or its descriptor form, [`Rule::builder`]). The
//! factory owns the shared evaluation steps:
//!
//! 1. resolve the value (when evaluated through [`Rule::evaluate`]),
//! 2. resolve the parameter with the context,
//! 3. run the resolution function,
//! 4. reject anything that is not a genuine boolean verdict.
//!
//! # Example
//!
//! ```rust
//! use okay::{create_rule, Resolvable};
//!
//! let divisible_by = create_rule(|value: &i32, divisor: &i32, _: &()| value % divisor == 0, 3);
//!
//! assert!(divisible_by.check(&9, &()).unwrap());
//! assert!(!divisible_by.check(&10, &()).unwrap());
//!
//! // Values can be lazy too; the producer runs on every evaluation.
//! let lazy = Resolvable::producer(|_: &()| 12);
//! assert!(divisible_by.evaluate(&lazy, &()).unwrap());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::RuleError;
use crate::resolvable::Resolvable;

type Eval<V, C> = dyn Fn(&V, &C) -> Result<bool, RuleError> + Send + Sync;
type Resolve<V, P, C> = dyn Fn(&V, &P, &C) -> Result<bool, RuleError> + Send + Sync;

/// Output of a resolution function.
///
/// A verdict must turn into a genuine boolean. `Option<bool>` models a
/// resolution function that may produce nothing at all; `None` is reported
/// as [`RuleError::ContractViolation`] when the rule runs.
pub trait Verdict {
    /// Convert into a boolean, or fail the boolean contract.
    fn into_verdict(self) -> Result<bool, RuleError>;
}

impl Verdict for bool {
    #[inline]
    fn into_verdict(self) -> Result<bool, RuleError> {
        Ok(self)
    }
}

impl Verdict for Option<bool> {
    #[inline]
    fn into_verdict(self) -> Result<bool, RuleError> {
        self.ok_or(RuleError::ContractViolation)
    }
}

impl Verdict for Result<bool, RuleError> {
    #[inline]
    fn into_verdict(self) -> Result<bool, RuleError> {
        self
    }
}

/// Conversion into a rule parameter.
///
/// Implemented for [`Resolvable`] itself and for the common literal types,
/// so `gt(5)` and `gt(Resolvable::producer(..))` both work.
pub trait IntoResolvable<T, C> {
    /// Perform the conversion.
    fn into_resolvable(self) -> Resolvable<T, C>;
}

impl<T, C> IntoResolvable<T, C> for Resolvable<T, C> {
    #[inline]
    fn into_resolvable(self) -> Resolvable<T, C> {
        self
    }
}

macro_rules! literal_params {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<C> IntoResolvable<$ty, C> for $ty {
                #[inline]
                fn into_resolvable(self) -> Resolvable<$ty, C> {
                    Resolvable::Literal(self)
                }
            }
        )*
    };
}

literal_params!(
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
    String,
    &'static str,
    std::time::SystemTime,
    regex::Regex,
    crate::value::Value,
);

/// A reusable boolean predicate over a value and a context.
///
/// Rules are immutable and cheap to clone: clones share the same
/// underlying closure. Evaluation never mutates the rule.
pub struct Rule<V: ?Sized, C = ()> {
    eval: Arc<Eval<V, C>>,
}

impl<V: ?Sized, C> Clone for Rule<V, C> {
    fn clone(&self) -> Self {
        Rule {
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<V: ?Sized, C> fmt::Debug for Rule<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl<V: ?Sized + 'static, C: 'static> Rule<V, C> {
    /// Start a descriptor-style rule definition.
    ///
    /// ```rust
    /// use okay::{Rule, RuleError};
    ///
    /// let rule = Rule::<i32>::builder()
    ///     .param(10)
    ///     .resolve(|value: &i32, max: &i32, _: &()| value <= max)
    ///     .build()
    ///     .unwrap();
    /// assert!(rule.check(&10, &()).unwrap());
    ///
    /// let missing = Rule::<i32>::builder().param(10).build();
    /// assert!(matches!(missing, Err(RuleError::InvalidArgument { argument: "resolve", .. })));
    /// ```
    pub fn builder() -> RuleBuilder<V, (), C> {
        RuleBuilder {
            param: Resolvable::Literal(()),
            resolve: None,
        }
    }

    /// Wrap a plain predicate as a rule.
    ///
    /// The predicate receives the already-resolved value and the context.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&V, &C) -> bool + Send + Sync + 'static,
    {
        Rule::from_eval(move |value, context| Ok(predicate(value, context)))
    }

    pub(crate) fn from_eval<F>(eval: F) -> Self
    where
        F: Fn(&V, &C) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        Rule {
            eval: Arc::new(eval),
        }
    }
}

impl<V: ?Sized, C> Rule<V, C> {
    /// Evaluate the rule against a literal value.
    #[inline]
    pub fn check(&self, value: &V, context: &C) -> Result<bool, RuleError> {
        (self.eval)(value, context)
    }
}

impl<V: Clone, C> Rule<V, C> {
    /// Evaluate the rule against a possibly lazy value.
    ///
    /// A producer is invoked exactly once, with the context, before the
    /// parameter is resolved.
    pub fn evaluate(&self, value: &Resolvable<V, C>, context: &C) -> Result<bool, RuleError> {
        let value = value.resolve(context);
        self.check(&*value, context)
    }
}

impl<V: ?Sized> Rule<V, ()> {
    /// Evaluate a context-free rule.
    #[inline]
    pub fn check_value(&self, value: &V) -> Result<bool, RuleError> {
        self.check(value, &())
    }
}

/// Build a rule from a resolution function and a parameter.
///
/// The parameter may be a literal or a [`Resolvable::Producer`]; producers
/// are invoked with the context on every evaluation.
///
/// # Example
///
/// ```rust
/// use okay::{create_rule, Resolvable};
///
/// let rule = create_rule(
///     |value: &i32, param: &i32, _: &()| value > param,
///     Resolvable::producer(|_: &()| 0),
/// );
/// assert!(rule.evaluate(&Resolvable::producer(|_: &()| 1), &()).unwrap());
/// ```
pub fn create_rule<V, P, C, F, O>(resolve: F, param: impl IntoResolvable<P, C>) -> Rule<V, C>
where
    V: ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
    F: Fn(&V, &P, &C) -> O + Send + Sync + 'static,
    O: Verdict,
{
    bind(
        Arc::new(move |value: &V, param: &P, context: &C| {
            resolve(value, param, context).into_verdict()
        }),
        param.into_resolvable(),
    )
}

fn bind<V, P, C>(resolve: Arc<Resolve<V, P, C>>, param: Resolvable<P, C>) -> Rule<V, C>
where
    V: ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    Rule::from_eval(move |value, context| {
        let param = param.resolve(context);
        let verdict = resolve(value, &*param, context);
        if let Err(RuleError::ContractViolation) = verdict {
            #[cfg(feature = "tracing")]
            tracing::warn!("rule resolution did not produce a boolean verdict");
        }
        verdict
    })
}

/// Descriptor-style rule construction.
///
/// Created by [`Rule::builder`]. A builder without a resolution function
/// fails to build with [`RuleError::InvalidArgument`].
pub struct RuleBuilder<V: ?Sized, P, C = ()> {
    param: Resolvable<P, C>,
    resolve: Option<Arc<Resolve<V, P, C>>>,
}

impl<V: ?Sized, P: fmt::Debug, C> fmt::Debug for RuleBuilder<V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("param", &self.param)
            .field("has_resolve", &self.resolve.is_some())
            .finish()
    }
}

impl<V, P, C> RuleBuilder<V, P, C>
where
    V: ?Sized + 'static,
    P: Clone + Send + Sync + 'static,
    C: 'static,
{
    /// Set the parameter, replacing any previous one.
    ///
    /// Every call clears a previously set resolution function, whether or
    /// not the parameter type changes. Set the parameter first.
    pub fn param<Q>(self, param: impl IntoResolvable<Q, C>) -> RuleBuilder<V, Q, C> {
        RuleBuilder {
            param: param.into_resolvable(),
            resolve: None,
        }
    }

    /// Set the resolution function.
    pub fn resolve<F, O>(mut self, resolve: F) -> Self
    where
        F: Fn(&V, &P, &C) -> O + Send + Sync + 'static,
        O: Verdict,
    {
        self.resolve = Some(Arc::new(move |value: &V, param: &P, context: &C| {
            resolve(value, param, context).into_verdict()
        }));
        self
    }

    /// Finish the rule.
    pub fn build(self) -> Result<Rule<V, C>, RuleError> {
        let resolve = self.resolve.ok_or_else(|| {
            RuleError::invalid_argument(
                "resolve",
                "`resolve` argument is missing or is not a function",
            )
        })?;
        Ok(bind(resolve, self.param))
    }
}
