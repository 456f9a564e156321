//! Storefront checkout: order form, simulated payment, confirmation.

pub mod confirmation;
pub mod order;
pub mod payment;

pub use confirmation::{format_address, ConfirmationDetails};
pub use order::{CartLine, CheckoutSession, CustomerDetails, OrderForm};
pub use payment::{submit_payment, PaymentForm};
