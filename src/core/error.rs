//! Typed error handling for PromptPay payload generation
//!
//! Every failure of the payment core is reported through one of the
//! category types below, wrapped by [`PromptPayError`] so callers can
//! match precisely instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`FormatError`]: the payee identifier does not have an accepted shape
//! - [`ValidationError`]: an amount or cart input cannot be used
//! - [`EncodingError`]: an internal TLV invariant was violated
//! - [`PromoError`]: a promo code is unknown or not applicable
//! - [`ConfigError`]: configuration could not be loaded or is invalid
//!
//! # Example
//!
//! ```rust
//! use promptpay::prelude::*;
//!
//! match normalize("12-34") {
//!     Ok(id) => println!("payee {}", id),
//!     Err(e) => {
//!         let err = PromptPayError::from(e);
//!         assert_eq!(err.error_code(), "INVALID_PROMPTPAY_ID");
//!         assert!(err.is_user_error());
//!     }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum PromptPayError {
    /// Payee identifier errors
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Amount and cart validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// TLV encoding invariant violations
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Promo code errors
    #[error(transparent)]
    Promo(#[from] PromoError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure handed to whatever transport renders errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PromptPayError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PromptPayError::Format(_) => "INVALID_PROMPTPAY_ID",
            PromptPayError::Validation(_) => "INVALID_AMOUNT",
            PromptPayError::Encoding(_) => "ENCODING_ERROR",
            PromptPayError::Promo(_) => "INVALID_PROMO_CODE",
            PromptPayError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the end user can fix this error by changing their input.
    ///
    /// Encoding and configuration errors are defects of the deployment,
    /// not of the request.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PromptPayError::Format(_) | PromptPayError::Validation(_) | PromptPayError::Promo(_)
        )
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PromptPayError::Format(FormatError::UnrecognizedShape { length, .. }) => {
                Some(serde_json::json!({ "length": length }))
            }
            PromptPayError::Promo(PromoError::BelowMinimum {
                code, min_amount, ..
            }) => Some(serde_json::json!({
                "code": code,
                "min_amount": min_amount.to_string()
            })),
            PromptPayError::Encoding(EncodingError::ValueTooLong { tag, length }) => {
                Some(serde_json::json!({ "tag": tag, "length": length }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Format Errors
// =============================================================================

/// The payee identifier does not match any accepted phone shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing left after stripping separators
    #[error("PromptPay identifier is empty")]
    Empty,

    /// Length and prefix match none of the accepted shapes
    #[error("Unrecognized PromptPay identifier ({length} characters)")]
    UnrecognizedShape { length: usize },

    /// The shape matched but the result is not `66` followed by 9 digits
    #[error("PromptPay identifier must contain digits only")]
    NonDigit,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// An amount or cart input cannot be turned into a payment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// NaN or infinite
    #[error("Amount must be a finite number")]
    NotFinite,

    /// Zero or negative, before or after rounding to 2 decimal places
    #[error("Amount must be greater than zero (got {amount})")]
    NonPositive { amount: String },

    /// The rendered amount exceeds the 13 characters EMVCo allows
    #[error("Amount {amount} is too large to encode")]
    TooLarge { amount: String },

    /// The value has no decimal representation
    #[error("Amount {amount} cannot be represented as a decimal")]
    Unrepresentable { amount: String },

    /// Checkout with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line with quantity 0
    #[error("Quantity of '{item}' must be at least 1")]
    ZeroQuantity { item: String },

    /// A cart line with a negative unit price
    #[error("Price of '{item}' must not be negative")]
    NegativePrice { item: String },

    /// Decimal arithmetic on a line, the subtotal or a discount overflowed
    #[error("Total for '{item}' is too large to compute")]
    Overflow { item: String },
}

// =============================================================================
// Encoding Errors
// =============================================================================

/// An internal TLV invariant was violated
///
/// These indicate a programming defect rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Tags are exactly two ASCII digits
    #[error("Invalid TLV tag '{tag}'")]
    InvalidTag { tag: String },

    /// The two-digit length field cannot hold the value length
    #[error("TLV value for tag {tag} is {length} characters, at most 99 allowed")]
    ValueTooLong { tag: String, length: usize },

    /// Payload values are plain ASCII
    #[error("TLV value for tag {tag} contains non-ASCII characters")]
    NonAscii { tag: String },

    /// Decoding ran past the end of the input
    #[error("Truncated TLV field at offset {offset}")]
    Truncated { offset: usize },

    /// Decoding met a non-numeric length field
    #[error("Invalid TLV length '{length}' at offset {offset}")]
    InvalidLength { length: String, offset: usize },
}

// =============================================================================
// Promo Errors
// =============================================================================

/// A promo code cannot be applied to the order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    /// No promo code with this name exists
    #[error("Unknown promo code '{code}'")]
    Unknown { code: String },

    /// The order subtotal is below the code's minimum
    #[error("Promo code '{code}' requires a subtotal of at least {min_amount} (got {subtotal})")]
    BelowMinimum {
        code: String,
        min_amount: rust_decimal::Decimal,
        subtotal: rust_decimal::Decimal,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured payee phone number is not a valid PromptPay identifier
    #[error("Invalid PromptPay payee '{phone_number}': {source}")]
    InvalidPayee {
        phone_number: String,
        #[source]
        source: FormatError,
    },

    /// Two promo codes share the same name
    #[error("Duplicate promo code '{code}'")]
    DuplicatePromoCode { code: String },

    /// A promo code has a negative value or minimum
    #[error("Promo code '{code}' has a negative value or minimum")]
    NegativePromoValue { code: String },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PromptPayError>;
