pub mod order_status;
pub mod payment_method;
pub mod user_role;

pub use order_status::{OrderStatus, StatusFilter};
pub use payment_method::PaymentMethod;
pub use user_role::UserRole;
