//! # Okay
//!
//! Composable, context-aware validation rules.
//!
//! A [`Rule`] is a reusable boolean predicate over a value and an optional
//! context. Rules are built from a resolution function and a parameter with
//! [`create_rule`], combined with [`all`], [`any`] and [`not`], and wired to
//! side effects with [`call_if`] and the `invoke*` helpers.
//!
//! Values and parameters may be literals or [`Resolvable::Producer`]s that
//! compute them from the context each time the rule runs.
//!
//! ## Quick Example
//!
//! ```rust
//! use okay::{all, any, gt, lt, not, required};
//!
//! let positive_and_small = all([gt(0), lt(5)]).unwrap();
//! assert!(positive_and_small.check(&3, &()).unwrap());
//! assert!(!positive_and_small.check(&-1, &()).unwrap());
//! assert!(!positive_and_small.check(&6, &()).unwrap());
//!
//! let outside = any([lt(0), gt(5)]).unwrap();
//! assert!(outside.check(&6, &()).unwrap());
//!
//! assert!(not(required()).check("", &()).unwrap());
//! ```
//!
//! ## Context
//!
//! ```rust
//! use okay::{gte, Resolvable};
//!
//! struct Form {
//!     minimum: u32,
//! }
//!
//! let enough = gte(Resolvable::producer(|form: &Form| form.minimum));
//! assert!(enough.check(&3u32, &Form { minimum: 3 }).unwrap());
//! assert!(!enough.check(&3u32, &Form { minimum: 4 }).unwrap());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while rules run
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod compose;
pub mod error;
pub mod invoke;
pub mod primitives;
pub mod resolvable;
pub mod rule;
pub mod testing;
pub mod value;

// Re-exports
pub use combinators::{all, and, any, not, or};
pub use compose::{compose, Composed};
pub use error::RuleError;
pub use invoke::{call_if, invoke, invoke_if, invoke_if_not, Callback};
pub use primitives::{
    array, boolean, date, email, empty, eq, gt, gte, lt, lte, number, object, pattern,
    pattern_regex, required, string, tax_code, Presence, TaxCodeCountry, Text,
};
pub use resolvable::Resolvable;
pub use rule::{create_rule, IntoResolvable, Rule, RuleBuilder, Verdict};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{all, any, not};
    pub use crate::compose::compose;
    pub use crate::error::RuleError;
    pub use crate::invoke::{call_if, invoke, invoke_if, invoke_if_not, Callback};
    pub use crate::resolvable::Resolvable;
    pub use crate::rule::{create_rule, IntoResolvable, Rule, Verdict};
    pub use crate::value::Value;
}
