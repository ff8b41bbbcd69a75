//! Core module containing the PromptPay payload pipeline

pub mod amount;
pub mod checksum;
pub mod display;
pub mod error;
pub mod payload;
pub mod phone;
pub mod tlv;

pub use amount::Amount;
pub use checksum::{crc16, crc16_value};
pub use display::{format_baht, format_for_display};
pub use error::{
    ConfigError, EncodingError, ErrorResponse, FormatError, PromoError, PromptPayError,
    ValidationError,
};
pub use payload::{assemble, assemble_amount, inspect, verify_checksum};
pub use phone::{PhoneShape, PromptPayId, normalize};
pub use tlv::{TlvField, TlvList, tlv};
