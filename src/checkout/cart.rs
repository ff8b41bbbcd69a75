//! Cart lines and checkout totals

use crate::checkout::promo::PromoCode;
use crate::core::amount::Amount;
use crate::core::error::{self, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One item of the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,

    /// Free-text kitchen note ("no vegetables")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn line_total(&self) -> Result<Decimal, ValidationError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| ValidationError::Overflow {
                item: self.name.clone(),
            })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity {
                item: self.name.clone(),
            });
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                item: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// Subtotal, discount and amount due for a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl CheckoutTotals {
    /// Sum the cart and apply an optional promo code
    pub fn compute(lines: &[CartLine], promo: Option<&PromoCode>) -> error::Result<Self> {
        if lines.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }

        let mut subtotal = Decimal::ZERO;
        for line in lines {
            line.validate()?;
            subtotal = subtotal
                .checked_add(line.line_total()?)
                .ok_or_else(|| ValidationError::Overflow {
                    item: line.name.clone(),
                })?;
        }

        let discount = match promo {
            Some(promo) => promo.discount_for(subtotal)?,
            None => Decimal::ZERO,
        };

        let total = subtotal
            .checked_sub(discount)
            .ok_or_else(|| ValidationError::Overflow {
                item: "total".to_string(),
            })?;

        Ok(Self {
            subtotal,
            discount,
            total,
            promo_code: promo.map(|p| p.code.clone()),
        })
    }

    /// The amount to charge through PromptPay
    pub fn amount(&self) -> Result<Amount, ValidationError> {
        Amount::new(self.total)
    }
}
