//! # promptpay-rs
//!
//! PromptPay payment payloads for checkout flows.
//!
//! ## Features
//!
//! - **Phone Normalization**: `0812345678`, `812345678`, `66812345678` and
//!   `+66812345678` all map to the same payee, anything else is rejected
//! - **EMVCo Payloads**: TLV fields assembled with computed lengths and a
//!   CRC-16/CCITT-FALSE checksum
//! - **Fixed-Point Amounts**: `rust_decimal` amounts rounded half up to 2 places
//! - **Checkout Totals**: cart lines, promo codes, and the amount due
//! - **Configuration-Based**: payee and promo codes via YAML and environment
//! - **Typed Errors**: format, validation, encoding, promo and config errors
//!
//! ## Quick Start
//!
//! ```rust
//! use promptpay::prelude::*;
//!
//! let payee = normalize("091-497-4798")?;
//! let payload = assemble(&payee, 125.0)?;
//!
//! assert!(payload.starts_with("000201010212"));
//! assert!(payload.contains("5406125.00"));
//! assert!(verify_checksum(&payload));
//! assert_eq!(payee.display(), "091-497-4798");
//! # Ok::<(), PromptPayError>(())
//! ```
//!
//! The payload string is handed to any QR-code renderer; this crate does no
//! I/O of its own.

pub mod checkout;
pub mod config;
pub mod core;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Payload pipeline ===
    pub use crate::core::{
        amount::Amount,
        checksum::{crc16, crc16_value},
        display::{format_baht, format_for_display},
        payload::{assemble, assemble_amount, inspect, verify_checksum},
        phone::{PhoneShape, PromptPayId, normalize},
        tlv::{TlvField, TlvList, decode, tlv},
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, EncodingError, ErrorResponse, FormatError, PromoError, PromptPayError,
        ValidationError,
    };

    // === Checkout ===
    pub use crate::checkout::{
        CartLine, CheckoutTotals, PaymentRequest, PromoCatalog, PromoCode, PromoKind,
    };

    // === Config ===
    pub use crate::config::{CheckoutConfig, PromptPayConfig};

    // === External dependencies ===
    pub use rust_decimal::Decimal;
}
