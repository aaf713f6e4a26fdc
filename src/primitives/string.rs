//! Pattern rules
//!
//! Rules in this module match textual values (anything implementing
//! [`Text`]) against regular expressions. Values without text, such as a
//! [`Value::Number`], never match.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleError;
use crate::rule::{create_rule, IntoResolvable, Rule};
use crate::value::Value;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
});

/// Values that may carry text.
pub trait Text {
    /// The text, or `None` when the value is not textual.
    fn text(&self) -> Option<&str>;
}

impl Text for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Text for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

impl<T: Text> Text for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(Text::text)
    }
}

impl Text for Value {
    fn text(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Create a rule that checks the value matches a regular expression.
///
/// Fails with [`RuleError::InvalidArgument`] if `param` does not compile.
///
/// # Example
///
/// ```rust
/// use okay::pattern;
///
/// let digits = pattern(r"^\d*$").unwrap();
/// assert!(digits.check("123", &()).unwrap());
/// assert!(!digits.check("abc", &()).unwrap());
///
/// assert!(pattern::<str, ()>("(").is_err());
/// ```
pub fn pattern<V, C>(param: &str) -> Result<Rule<V, C>, RuleError>
where
    V: Text + ?Sized + 'static,
    C: 'static,
{
    let regex = Regex::new(param).map_err(|e| {
        RuleError::invalid_argument(
            "param",
            format!("`param` is not a regular expression: {}", e),
        )
    })?;
    Ok(pattern_regex(regex))
}

/// Create a rule from an already compiled (or lazily produced) regex.
pub fn pattern_regex<V, C>(regex: impl IntoResolvable<Regex, C>) -> Rule<V, C>
where
    V: Text + ?Sized + 'static,
    C: 'static,
{
    create_rule(
        |value: &V, regex: &Regex, _: &C| value.text().is_some_and(|text| regex.is_match(text)),
        regex,
    )
}

/// Create a rule that checks the value looks like an email address.
///
/// # Example
///
/// ```rust
/// use okay::email;
///
/// assert!(email().check("user@example.com", &()).unwrap());
/// assert!(!email().check("user.example.com", &()).unwrap());
/// ```
pub fn email<V, C>() -> Rule<V, C>
where
    V: Text + ?Sized + 'static,
    C: 'static,
{
    pattern_regex(EMAIL_REGEX.clone())
}
