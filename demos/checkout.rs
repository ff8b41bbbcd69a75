//! Checkout example: cart → totals → PromptPay payment request
//!
//! ```text
//! cargo run --example checkout
//! PROMPTPAY_PHONE=0812345678 RUST_LOG=debug cargo run --example checkout -- config.yaml
//! ```

use promptpay::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).try_init();

    let path = std::env::args().nth(1);
    let config = CheckoutConfig::load(path.as_deref())?;
    let catalog = config.promo_catalog();

    println!("🛒 PromptPay Checkout Example\n");

    let cart = vec![
        CartLine::new("Boiled chicken rice", Decimal::from(50), 2),
        CartLine::new("Fried chicken rice", Decimal::from(50), 1).with_notes("no cucumber"),
        CartLine::new("Tip", Decimal::from(5), 1),
    ];
    let promo = catalog.lookup("welcome10")?;
    let totals = CheckoutTotals::compute(&cart, Some(promo))?;

    println!("Subtotal: {}฿", totals.subtotal);
    println!("Discount: -{}฿ ({})", totals.discount, promo.code);
    println!("Total:    {}฿\n", totals.total);

    let request = PaymentRequest::for_checkout(&config.promptpay, &totals)?;
    println!("Pay to:   {} ({})", request.payee_display, request.payee_name);
    println!("Amount:   {}", request.amount_display);
    println!("Payload:  {}\n", request.payload);
    println!("{}", serde_json::to_string_pretty(&request)?);

    // A malformed payee never produces a payload
    match normalize("+1 555 0100") {
        Ok(id) => println!("unexpected payee {}", id),
        Err(err) => {
            let response = PromptPayError::from(err).to_response();
            println!("\nRejected payee: {} ({})", response.message, response.code);
        }
    }

    Ok(())
}
