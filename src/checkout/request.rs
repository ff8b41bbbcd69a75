//! The payment request handed to the QR-rendering collaborator

use crate::checkout::cart::CheckoutTotals;
use crate::config::PromptPayConfig;
use crate::core::amount::Amount;
use crate::core::display::format_baht;
use crate::core::error;
use crate::core::payload::assemble_amount;
use crate::core::phone::PromptPayId;
use serde::Serialize;

/// Everything a checkout page needs to show a PromptPay QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRequest {
    /// The EMVCo string to encode as a QR image
    pub payload: String,
    /// Normalized payee, e.g. `66914974798`
    pub payee_id: PromptPayId,
    /// Payee as shown to the customer, e.g. `091-497-4798`
    pub payee_display: String,
    /// Account holder name shown under the code
    pub payee_name: String,
    pub amount: Amount,
    /// e.g. `125.00 บาท`
    pub amount_display: String,
}

impl PaymentRequest {
    /// Build the request for the configured payee
    pub fn new(config: &PromptPayConfig, amount: &Amount) -> error::Result<Self> {
        let payee_id = config.payee_id()?;
        let payload = assemble_amount(&payee_id, amount)?;

        tracing::info!(
            payee = %payee_id.masked(),
            amount = %amount,
            "created PromptPay payment request"
        );

        Ok(Self {
            payload,
            payee_display: payee_id.display(),
            payee_id,
            payee_name: config.name.clone(),
            amount: amount.clone(),
            amount_display: format_baht(amount),
        })
    }

    /// Build the request for the amount due on a checkout
    pub fn for_checkout(
        config: &PromptPayConfig,
        totals: &CheckoutTotals,
    ) -> error::Result<Self> {
        let amount = totals.amount().inspect_err(|err| {
            tracing::warn!(total = %totals.total, error = %err, "checkout total is not payable");
        })?;
        Self::new(config, &amount)
    }
}
