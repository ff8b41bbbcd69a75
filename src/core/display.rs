//! Human-readable rendering of payees and amounts

use crate::core::amount::Amount;

/// Convert `66XXXXXXXXX` into the local display form `0XX-XXX-XXXX`
///
/// Purely cosmetic: anything that is not a normalized identifier is
/// returned unchanged.
pub fn format_for_display(normalized: &str) -> String {
    let local = match normalized.strip_prefix("66") {
        Some(local) if local.len() == 9 && local.bytes().all(|b| b.is_ascii_digit()) => local,
        _ => {
            tracing::debug!("payee is not normalized, displaying it as is");
            return normalized.to_string();
        }
    };

    format!("0{}-{}-{}", &local[..2], &local[2..5], &local[5..])
}

/// Render an amount for the payment summary, e.g. `125.00 บาท`
pub fn format_baht(amount: &Amount) -> String {
    format!("{} บาท", amount.as_payload_str())
}
