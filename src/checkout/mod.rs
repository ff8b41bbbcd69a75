//! Checkout flow on top of the payload core
//!
//! Turns a cart and an optional promo code into the amount due, then into a
//! [`PaymentRequest`] carrying the QR payload and its display strings.

pub mod cart;
pub mod promo;
pub mod request;

pub use cart::{CartLine, CheckoutTotals};
pub use promo::{PromoCatalog, PromoCode, PromoKind};
pub use request::PaymentRequest;
