//! PromptPay payee identifier normalization
//!
//! PromptPay addresses a mobile subscriber as `66` followed by the 9 local
//! digits. Customers and operators type the number in several ways, so
//! [`normalize`] accepts exactly four shapes and rejects everything else.

use crate::core::error::FormatError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Thailand's country calling code
pub const COUNTRY_CODE: &str = "66";

/// Number of local digits after the trunk or country prefix
pub const LOCAL_DIGITS: usize = 9;

/// The accepted spellings of a Thai mobile number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneShape {
    /// `0XXXXXXXXX`
    LocalTrunk,
    /// `XXXXXXXXX`
    Subscriber,
    /// `66XXXXXXXXX`
    CountryCode,
    /// `+66XXXXXXXXX`
    International,
}

impl PhoneShape {
    /// Detect the shape of an already cleaned identifier
    pub fn detect(cleaned: &str) -> Option<Self> {
        match (cleaned.len(), cleaned) {
            (10, s) if s.starts_with('0') => Some(PhoneShape::LocalTrunk),
            (9, _) => Some(PhoneShape::Subscriber),
            (11, s) if s.starts_with(COUNTRY_CODE) => Some(PhoneShape::CountryCode),
            (12, s) if s.starts_with("+66") => Some(PhoneShape::International),
            _ => None,
        }
    }

    /// Rewrite a cleaned identifier of this shape into `66XXXXXXXXX`
    fn canonicalize(self, cleaned: &str) -> String {
        match self {
            PhoneShape::LocalTrunk => format!("{}{}", COUNTRY_CODE, &cleaned[1..]),
            PhoneShape::Subscriber => format!("{}{}", COUNTRY_CODE, cleaned),
            PhoneShape::CountryCode => cleaned.to_string(),
            PhoneShape::International => cleaned[1..].to_string(),
        }
    }
}

/// A normalized PromptPay mobile identifier: `66` followed by 9 digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PromptPayId(String);

impl PromptPayId {
    /// The normalized form, e.g. `66812345678`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 9 local digits without any prefix
    pub fn local_digits(&self) -> &str {
        &self.0[COUNTRY_CODE.len()..]
    }

    /// The proxy value carried in the merchant account block: `0066` + local digits
    pub fn proxy_value(&self) -> String {
        format!("00{}{}", COUNTRY_CODE, self.local_digits())
    }

    /// Local display form, e.g. `081-234-5678`
    pub fn display(&self) -> String {
        crate::core::display::format_for_display(&self.0)
    }

    /// Display form with the middle group hidden, e.g. `081-XXX-5678`
    pub fn masked(&self) -> String {
        let local = self.local_digits();
        format!("0{}-XXX-{}", &local[..2], &local[5..])
    }
}

impl fmt::Display for PromptPayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptPayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PromptPayId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl<'de> Deserialize<'de> for PromptPayId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        normalize(&raw).map_err(serde::de::Error::custom)
    }
}

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[-\s]").unwrap())
}

fn normalized_pattern() -> &'static Regex {
    static NORMALIZED: OnceLock<Regex> = OnceLock::new();
    NORMALIZED.get_or_init(|| Regex::new(r"^66[0-9]{9}$").unwrap())
}

/// Normalize a raw phone number into a [`PromptPayId`]
///
/// Whitespace and hyphens are stripped first. Accepted shapes:
///
/// - `0XXXXXXXXX` → leading `0` replaced by `66`
/// - `XXXXXXXXX` → `66` prepended
/// - `66XXXXXXXXX` → unchanged
/// - `+66XXXXXXXXX` → leading `+` dropped
///
/// Anything else is a [`FormatError`]; the input is never repaired.
pub fn normalize(raw: &str) -> Result<PromptPayId, FormatError> {
    let cleaned = separators().replace_all(raw, "");
    if cleaned.is_empty() {
        return Err(FormatError::Empty);
    }

    let Some(shape) = PhoneShape::detect(&cleaned) else {
        tracing::debug!(length = cleaned.len(), "rejected PromptPay identifier shape");
        return Err(FormatError::UnrecognizedShape {
            length: cleaned.len(),
        });
    };

    // Slicing in canonicalize is only safe on ASCII input
    if !cleaned.is_ascii() {
        return Err(FormatError::NonDigit);
    }

    let normalized = shape.canonicalize(&cleaned);
    if !normalized_pattern().is_match(&normalized) {
        return Err(FormatError::NonDigit);
    }

    tracing::debug!(?shape, "normalized PromptPay identifier");
    Ok(PromptPayId(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_normalize_to_same_id() {
        for raw in ["0812345678", "812345678", "66812345678", "+66812345678"] {
            let id = normalize(raw).expect(raw);
            assert_eq!(id.as_str(), "66812345678", "input {}", raw);
        }
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(normalize("081-234-5678").unwrap().as_str(), "66812345678");
        assert_eq!(normalize(" 081 234 5678 ").unwrap().as_str(), "66812345678");
        assert_eq!(normalize("+66 81-234-5678").unwrap().as_str(), "66812345678");
        assert_eq!(normalize("081\t234\n5678").unwrap().as_str(), "66812345678");
    }

    #[test]
    fn test_detect_shapes() {
        assert_eq!(PhoneShape::detect("0812345678"), Some(PhoneShape::LocalTrunk));
        assert_eq!(PhoneShape::detect("812345678"), Some(PhoneShape::Subscriber));
        assert_eq!(PhoneShape::detect("66812345678"), Some(PhoneShape::CountryCode));
        assert_eq!(PhoneShape::detect("+66812345678"), Some(PhoneShape::International));
        assert_eq!(PhoneShape::detect("1812345678"), None);
        assert_eq!(PhoneShape::detect("+1812345678"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), Err(FormatError::Empty));
        assert_eq!(normalize(" - - "), Err(FormatError::Empty));
    }

    #[test]
    fn test_wrong_length_rejected() {
        for raw in ["12345", "08123456789", "0812345", "66812345678901"] {
            assert!(
                matches!(normalize(raw), Err(FormatError::UnrecognizedShape { .. })),
                "input {}",
                raw
            );
        }
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        // 10 digits without trunk 0, 11 digits without 66, +1 instead of +66
        for raw in ["1812345678", "44812345678", "+1812345678"] {
            assert!(
                matches!(normalize(raw), Err(FormatError::UnrecognizedShape { .. })),
                "input {}",
                raw
            );
        }
    }

    #[test]
    fn test_letters_rejected() {
        for raw in ["08123456ab", "81234567x", "668123456o8", "+6681234567z"] {
            assert!(
                matches!(normalize(raw), Err(FormatError::NonDigit)),
                "input {}",
                raw
            );
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        // Thai digits are not ASCII digits
        assert!(normalize("๐๘๑๒๓").is_err());
        assert!(matches!(
            normalize("0๘12345"),
            Err(FormatError::NonDigit) | Err(FormatError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn test_proxy_value_and_local_digits() {
        let id = normalize("0914974798").unwrap();
        assert_eq!(id.local_digits(), "914974798");
        assert_eq!(id.proxy_value(), "0066914974798");
    }

    #[test]
    fn test_masked() {
        let id = normalize("0812345678").unwrap();
        assert_eq!(id.masked(), "081-XXX-5678");
    }

    #[test]
    fn test_from_str_and_serde() {
        let id: PromptPayId = "081-234-5678".parse().unwrap();
        assert_eq!(id.to_string(), "66812345678");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"66812345678\"");

        let parsed: PromptPayId = serde_json::from_str("\"+66812345678\"").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<PromptPayId>("\"12\"").is_err());
    }
}
