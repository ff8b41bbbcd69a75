//! PromptPay payload assembly
//!
//! Builds the EMVCo Merchant-Presented QR string for a mobile-number
//! PromptPay payee:
//!
//! | tag | field | value |
//! |-----|-------|-------|
//! | 00 | payload format indicator | `01` |
//! | 01 | point of initiation | `12` |
//! | 29 | merchant account | `00` GUID, `01` proxy `0066XXXXXXXXX` |
//! | 53 | currency | `764` (THB) |
//! | 54 | amount | `125.00` |
//! | 58 | country | `TH` |
//! | 63 | CRC16 | 4 hex digits |
//!
//! The CRC covers everything before it, including the `6304` header of the
//! CRC field itself.

use crate::core::amount::Amount;
use crate::core::checksum::crc16;
use crate::core::error::{self, EncodingError};
use crate::core::phone::PromptPayId;
use crate::core::tlv::{self, TlvList};

pub const TAG_FORMAT_INDICATOR: &str = "00";
pub const TAG_INITIATION_METHOD: &str = "01";
pub const TAG_MERCHANT_ACCOUNT: &str = "29";
pub const TAG_CURRENCY: &str = "53";
pub const TAG_AMOUNT: &str = "54";
pub const TAG_COUNTRY: &str = "58";
pub const TAG_CRC: &str = "63";

/// Sub-tags of the merchant account block
pub const SUBTAG_GUID: &str = "00";
pub const SUBTAG_MOBILE: &str = "01";

pub const FORMAT_INDICATOR: &str = "01";
/// Dynamic code, valid for one transaction
pub const INITIATION_DYNAMIC: &str = "12";
/// PromptPay application identifier
pub const PROMPTPAY_GUID: &str = "A000000677010111";
/// ISO 4217 numeric code for THB
pub const CURRENCY_THB: &str = "764";
pub const COUNTRY_TH: &str = "TH";

/// Tag and length of the CRC field, which are part of the checksummed data
pub const CRC_HEADER: &str = "6304";
const CRC_LEN: usize = 4;

/// Build the merchant account block (tag 29) for a payee
pub fn merchant_account(id: &PromptPayId) -> Result<TlvList, EncodingError> {
    let mut block = TlvList::new();
    block
        .push(SUBTAG_GUID, PROMPTPAY_GUID)?
        .push(SUBTAG_MOBILE, id.proxy_value())?;
    Ok(block)
}

/// Every field preceding the CRC, in payload order
pub fn payload_fields(id: &PromptPayId, amount: &Amount) -> Result<TlvList, EncodingError> {
    let mut fields = TlvList::new();
    fields
        .push(TAG_FORMAT_INDICATOR, FORMAT_INDICATOR)?
        .push(TAG_INITIATION_METHOD, INITIATION_DYNAMIC)?
        .nested(TAG_MERCHANT_ACCOUNT, &merchant_account(id)?)?
        .push(TAG_CURRENCY, CURRENCY_THB)?
        .push(TAG_AMOUNT, amount.as_payload_str())?
        .push(TAG_COUNTRY, COUNTRY_TH)?;
    Ok(fields)
}

/// Assemble the checksummed payload for a decimal amount
pub fn assemble_amount(id: &PromptPayId, amount: &Amount) -> Result<String, EncodingError> {
    let mut payload = payload_fields(id, amount)?.encode();
    payload.push_str(CRC_HEADER);
    let checksum = crc16(&payload);
    payload.push_str(&checksum);

    tracing::debug!(
        payee = %id.masked(),
        amount = %amount,
        crc = %checksum,
        "assembled PromptPay payload"
    );
    Ok(payload)
}

/// Assemble the checksummed payload for a floating-point amount
///
/// The amount is rounded half up to 2 decimal places; see
/// [`Amount::from_f64`].
///
/// ```rust
/// use promptpay::prelude::*;
///
/// let id = normalize("0914974798")?;
/// let payload = assemble(&id, 125.0)?;
/// assert!(payload.contains("5406125.00"));
/// assert!(verify_checksum(&payload));
/// # Ok::<(), PromptPayError>(())
/// ```
pub fn assemble(id: &PromptPayId, amount: f64) -> error::Result<String> {
    let amount = Amount::from_f64(amount)?;
    Ok(assemble_amount(id, &amount)?)
}

/// Check that a finished payload ends with a correct CRC field
pub fn verify_checksum(payload: &str) -> bool {
    if !payload.is_ascii() || payload.len() < CRC_HEADER.len() + CRC_LEN {
        return false;
    }
    let (body, checksum) = payload.split_at(payload.len() - CRC_LEN);
    body.ends_with(CRC_HEADER) && crc16(body) == checksum
}

/// Top-level fields of a payload whose checksum is valid
pub fn inspect(payload: &str) -> Option<TlvList> {
    if !verify_checksum(payload) {
        return None;
    }
    let fields = tlv::decode(payload).ok()?;
    fields.get(TAG_CRC)?;
    Some(fields)
}
