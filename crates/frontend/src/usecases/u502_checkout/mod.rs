pub mod confirmation_view;
pub mod order_view;
pub mod payment_view;

pub use confirmation_view::ConfirmationPage;
pub use order_view::OrderPage;
pub use payment_view::PaymentPage;
