//! Tax code rules
//!
//! Only Italian fiscal codes (`codice fiscale`) are supported. A code is
//! 16 characters: surname and name letters, birth year, month letter, birth
//! day (plus 40 for women), municipality code and a check character. Digits
//! may be replaced by letters (omocodia) to disambiguate clashing codes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleError;
use crate::primitives::Text;
use crate::resolvable::Resolvable;
use crate::rule::{create_rule, Rule};

static ITALIAN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z]{6}[0-9LMNPQRSTUV]{2}[ABCDEHLMPRST][0-9LMNPQRSTUV]{2}[A-Z][0-9LMNPQRSTUV]{3}[A-Z]$",
    )
    .expect("italian tax code pattern is a valid regex")
});

// Check-character weights for characters in odd (1-based) positions,
// indexed by digit value or letter offset.
const ODD_WEIGHTS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Country whose tax code format a rule enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxCodeCountry {
    /// Italy (`"it"`).
    Italy,
}

impl TaxCodeCountry {
    /// Look up a country by its ISO 3166-1 alpha-2 code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "it" => Some(TaxCodeCountry::Italy),
            _ => None,
        }
    }

    /// Returns true if `code` is a valid tax code for this country.
    pub fn is_valid(self, code: &str) -> bool {
        match self {
            TaxCodeCountry::Italy => is_valid_italian(code),
        }
    }
}

fn position_value(c: u8) -> u32 {
    if c.is_ascii_digit() {
        u32::from(c - b'0')
    } else {
        u32::from(c - b'A')
    }
}

fn is_valid_italian(code: &str) -> bool {
    let code = code.to_ascii_uppercase();
    if !ITALIAN_FORMAT.is_match(&code) {
        return false;
    }

    let bytes = code.as_bytes();
    let sum: u32 = bytes[..15]
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let value = position_value(c);
            if i % 2 == 0 {
                ODD_WEIGHTS[value as usize]
            } else {
                value
            }
        })
        .sum();

    bytes[15] == b'A' + (sum % 26) as u8
}

/// Create a rule that validates tax codes of the given country.
///
/// Fails with [`RuleError::InvalidArgument`] for an unknown country.
///
/// # Example
///
/// ```rust
/// use okay::tax_code;
///
/// let codice_fiscale = tax_code("it").unwrap();
/// assert!(codice_fiscale.check("DGVDRN78E02H501C", &()).unwrap());
/// assert!(!codice_fiscale.check("DGVDRN78E02H501D", &()).unwrap());
///
/// assert!(tax_code::<str, ()>("").is_err());
/// ```
pub fn tax_code<V, C>(country: &str) -> Result<Rule<V, C>, RuleError>
where
    V: Text + ?Sized + 'static,
    C: 'static,
{
    let country = TaxCodeCountry::from_code(country).ok_or_else(|| {
        RuleError::invalid_argument(
            "country",
            format!("`country` is missing or not supported: {:?}", country),
        )
    })?;
    Ok(create_rule(
        |value: &V, country: &TaxCodeCountry, _: &C| {
            value.text().is_some_and(|code| country.is_valid(code))
        },
        Resolvable::Literal(country),
    ))
}
