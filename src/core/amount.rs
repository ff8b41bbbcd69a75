//! Transaction amounts
//!
//! Amounts are held as fixed-point decimals and rounded **half up** to two
//! decimal places. Floating-point inputs are first converted through their
//! shortest round-trip decimal representation, so `1.005_f64` is treated as
//! the decimal `1.005` and becomes `1.01`, not `1.00`.

use crate::core::error::ValidationError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Decimal places carried by THB amounts
pub const AMOUNT_SCALE: u32 = 2;

/// Longest transaction amount value allowed in tag 54
pub const MAX_AMOUNT_LEN: usize = 13;

/// A positive amount in baht, rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Amount {
    value: Decimal,
    rendered: String,
}

impl Amount {
    /// Build an amount from a decimal value
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        let mut rounded =
            value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded <= Decimal::ZERO {
            return Err(ValidationError::NonPositive {
                amount: value.to_string(),
            });
        }
        rounded.rescale(AMOUNT_SCALE);

        let rendered = rounded.to_string();
        if rendered.len() > MAX_AMOUNT_LEN {
            return Err(ValidationError::TooLarge {
                amount: value.to_string(),
            });
        }

        Ok(Self {
            value: rounded,
            rendered,
        })
    }

    /// Build an amount from a floating-point number
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive {
                amount: value.to_string(),
            });
        }

        let shortest = value.to_string();
        let decimal = Decimal::from_str(&shortest)
            .map_err(|_| ValidationError::Unrepresentable { amount: shortest })?;
        Self::new(decimal)
    }

    /// The rounded decimal value
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Fixed two-decimal rendering, e.g. `125.00`
    pub fn as_payload_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.rendered
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl TryFrom<f64> for Amount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::from_f64(value)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed).map_err(|_| ValidationError::Unrepresentable {
            amount: trimmed.to_string(),
        })?;
        Amount::new(decimal)
    }
}
