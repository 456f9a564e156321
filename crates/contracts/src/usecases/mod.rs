pub mod u501_procurement;
pub mod u502_checkout;
