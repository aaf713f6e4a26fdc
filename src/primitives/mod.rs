//! Primitive rules
//!
//! Each primitive is a one-line resolution function handed to
//! [`create_rule`](crate::create_rule), so primitives evaluate exactly like
//! any user-defined rule.
//!
//! # Example
//!
//! ```rust
//! use okay::{email, not, required};
//!
//! let optional_email = not(required()).or(email());
//! assert!(optional_email.check("", &()).unwrap());
//! assert!(optional_email.check("user@example.com", &()).unwrap());
//! assert!(!optional_email.check("user", &()).unwrap());
//! ```

mod number;
mod presence;
mod string;
mod tax_code;
mod types;

pub use number::{eq, gt, gte, lt, lte};
pub use presence::{empty, required, Presence};
pub use string::{email, pattern, pattern_regex, Text};
pub use tax_code::{tax_code, TaxCodeCountry};
pub use types::{array, boolean, date, number, object, string};
