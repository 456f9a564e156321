pub mod a001_purchase_order;
pub mod a002_supplier;
pub mod a003_inventory_item;
pub mod a004_product;
pub mod common;
