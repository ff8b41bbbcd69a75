//! Promo codes and discount computation

use crate::core::error::{self, PromoError, ValidationError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Share of the subtotal a discount may never exceed
pub const MAX_DISCOUNT_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// How a promo code's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoKind {
    /// `value` percent of the subtotal
    Percentage,
    /// `value` baht off
    Fixed,
}

/// A promo code definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    /// Code as typed by the customer (matched case-insensitively)
    pub code: String,

    pub kind: PromoKind,

    /// Percent or baht, depending on `kind`
    pub value: Decimal,

    /// Smallest subtotal the code applies to
    #[serde(default)]
    pub min_amount: Decimal,
}

impl PromoCode {
    pub fn percentage(code: &str, percent: Decimal, min_amount: Decimal) -> Self {
        Self {
            code: code.to_uppercase(),
            kind: PromoKind::Percentage,
            value: percent,
            min_amount,
        }
    }

    pub fn fixed(code: &str, baht: Decimal, min_amount: Decimal) -> Self {
        Self {
            code: code.to_uppercase(),
            kind: PromoKind::Fixed,
            value: baht,
            min_amount,
        }
    }

    /// Discount granted on `subtotal`
    ///
    /// Capped at half the subtotal and rounded half up to 2 decimal places.
    pub fn discount_for(&self, subtotal: Decimal) -> error::Result<Decimal> {
        if subtotal < self.min_amount {
            return Err(PromoError::BelowMinimum {
                code: self.code.clone(),
                min_amount: self.min_amount,
                subtotal,
            }
            .into());
        }

        let raw = match self.kind {
            PromoKind::Percentage => (self.value / Decimal::ONE_HUNDRED)
                .checked_mul(subtotal)
                .ok_or_else(|| ValidationError::Overflow {
                    item: self.code.clone(),
                })?,
            PromoKind::Fixed => self.value,
        };
        let capped = raw.min(subtotal * MAX_DISCOUNT_RATIO);

        Ok(capped.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// The set of promo codes a shop accepts
#[derive(Debug, Clone, Default)]
pub struct PromoCatalog {
    codes: Vec<PromoCode>,
}

impl PromoCatalog {
    pub fn new(codes: Vec<PromoCode>) -> Self {
        Self { codes }
    }

    /// Find a code, ignoring case and surrounding whitespace
    pub fn lookup(&self, code: &str) -> Result<&PromoCode, PromoError> {
        let wanted = code.trim().to_uppercase();
        self.codes
            .iter()
            .find(|promo| promo.code.to_uppercase() == wanted)
            .ok_or(PromoError::Unknown { code: wanted })
    }

    /// Look a code up and compute its discount on `subtotal`
    pub fn discount(&self, code: &str, subtotal: Decimal) -> error::Result<Decimal> {
        let promo = self.lookup(code)?;
        let discount = promo.discount_for(subtotal)?;
        tracing::debug!(code = %promo.code, %subtotal, %discount, "applied promo code");
        Ok(discount)
    }

    pub fn codes(&self) -> &[PromoCode] {
        &self.codes
    }
}
