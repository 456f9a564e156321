pub mod executor;

pub use executor::{
    add_order, change_order_status, delete_order, delete_order_prompt, delete_supplier,
    delete_supplier_prompt, sync_inventory, StatusChange, StockChange, ORDER_ADDED_MESSAGE,
};
