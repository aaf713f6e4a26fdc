//! Lazily evaluated values and parameters
//!
//! A [`Resolvable`] is either a literal or a producer that builds the
//! literal from the evaluation context. Producers run on every rule
//! invocation; their output is never cached.
//!
//! # Example
//!
//! ```rust
//! use okay::{gt, Resolvable};
//!
//! struct Limits {
//!     min_age: i32,
//! }
//!
//! let old_enough = gt(Resolvable::producer(|limits: &Limits| limits.min_age - 1));
//!
//! assert!(old_enough.check(&18, &Limits { min_age: 18 }).unwrap());
//! assert!(!old_enough.check(&18, &Limits { min_age: 21 }).unwrap());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A value that is either known up front or produced from a context.
pub enum Resolvable<T, C = ()> {
    /// A plain value used as-is.
    Literal(T),
    /// A producer invoked with the context on every resolution.
    Producer(Arc<dyn Fn(&C) -> T + Send + Sync>),
}

impl<T, C> Resolvable<T, C> {
    /// Wrap a literal value.
    pub fn literal(value: T) -> Self {
        Resolvable::Literal(value)
    }

    /// Wrap a producer function.
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn(&C) -> T + Send + Sync + 'static,
    {
        Resolvable::Producer(Arc::new(f))
    }

    /// Returns true if this resolvable is computed from the context.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Resolvable::Producer(_))
    }

    /// Resolve against a context.
    ///
    /// Literals are borrowed, producers are invoked and their output owned.
    ///
    /// ```rust
    /// use okay::Resolvable;
    ///
    /// let lazy: Resolvable<i32, i32> = Resolvable::producer(|ctx: &i32| ctx * 2);
    /// assert_eq!(*lazy.resolve(&21), 42);
    /// ```
    pub fn resolve(&self, context: &C) -> Cow<'_, T>
    where
        T: Clone,
    {
        match self {
            Resolvable::Literal(value) => Cow::Borrowed(value),
            Resolvable::Producer(produce) => Cow::Owned(produce(context)),
        }
    }
}

impl<T: Clone, C> Clone for Resolvable<T, C> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(value.clone()),
            Resolvable::Producer(produce) => Resolvable::Producer(Arc::clone(produce)),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Resolvable<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Resolvable::Producer(_) => f.write_str("Producer(<fn>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_literal_is_borrowed() {
        let r: Resolvable<String> = Resolvable::literal("abc".to_string());
        assert!(!r.is_lazy());
        assert!(matches!(r.resolve(&()), Cow::Borrowed(_)));
        assert_eq!(r.resolve(&()).as_str(), "abc");
    }

    #[test]
    fn test_producer_runs_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let r: Resolvable<usize> =
            Resolvable::producer(move |_| counter.fetch_add(1, Ordering::SeqCst));

        assert!(r.is_lazy());
        assert_eq!(*r.resolve(&()), 0);
        assert_eq!(*r.resolve(&()), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_producer_receives_context() {
        let r: Resolvable<usize, String> = Resolvable::producer(|ctx: &String| ctx.len());
        assert_eq!(*r.resolve(&"hello".to_string()), 5);
    }

    #[test]
    fn test_clone_shares_producer() {
        let r: Resolvable<i32, i32> = Resolvable::producer(|ctx| ctx + 1);
        let copy = r.clone();
        assert_eq!(*copy.resolve(&1), 2);
        assert_eq!(format!("{:?}", copy), "Producer(<fn>)");
    }

    #[test]
    fn test_literal_debug() {
        let r: Resolvable<i32> = Resolvable::literal(7);
        assert_eq!(format!("{:?}", r), "Literal(7)");
    }
}
