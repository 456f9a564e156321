use chrono::NaiveDate;

use crate::domain::a001_purchase_order::aggregate::{NewOrderForm, PurchaseOrder, ID_PREFIX};
use crate::domain::a002_supplier::aggregate::Supplier;
use crate::domain::a003_inventory_item::aggregate::InventoryItem;
use crate::domain::common::{CollectionError, RecordCollection, SaveOutcome};
use crate::enums::OrderStatus;
use crate::shared::id::IdSource;
use crate::shared::storage::KeyValueStorage;
use crate::shared::validation::FieldErrors;

pub const ORDER_ADDED_MESSAGE: &str = "Order added successfully!";

/// Effect of one inventory sync step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    Added { item: String, quantity: u32 },
    /// Item was absent and has been created with the delivered quantity
    Created { item: String, quantity: u32 },
    Subtracted { item: String, quantity: u32 },
    /// Subtraction found no item; nothing changed
    Missing { item: String },
    /// Zero quantity; nothing to do
    Skipped,
}

impl StockChange {
    pub fn changed(&self) -> bool {
        matches!(
            self,
            StockChange::Added { .. } | StockChange::Created { .. } | StockChange::Subtracted { .. }
        )
    }
}

/// Add or subtract `quantity` on the item matched case-insensitively by
/// name. Subtraction clamps at zero.
pub fn sync_inventory(
    inventory: &mut RecordCollection<InventoryItem>,
    item: &str,
    quantity: u32,
    adding: bool,
    today: NaiveDate,
) -> StockChange {
    if quantity == 0 {
        log::warn!("Invalid parameters for inventory update of {}", item);
        return StockChange::Skipped;
    }

    let change = match (inventory.get_mut(item), adding) {
        (Some(existing), true) => {
            existing.add_stock(quantity, today);
            StockChange::Added { item: item.to_string(), quantity }
        }
        (Some(existing), false) => {
            existing.remove_stock(quantity, today);
            StockChange::Subtracted { item: item.to_string(), quantity }
        }
        (None, true) => {
            inventory.insert(InventoryItem::new(item, quantity, today));
            log::info!("New item {} added to inventory", item);
            StockChange::Created { item: item.to_string(), quantity }
        }
        (None, false) => {
            log::warn!("Item {} not found in inventory for stock deduction", item);
            return StockChange::Missing { item: item.to_string() };
        }
    };

    log::info!(
        "Inventory updated for {}. Action: {} {}",
        item,
        if adding { "Add" } else { "Subtract" },
        quantity
    );
    change
}

/// Validate the add-order form and append a Pending order.
pub fn add_order(
    orders: &mut RecordCollection<PurchaseOrder>,
    storage: &dyn KeyValueStorage,
    form: NewOrderForm,
    ids: &mut dyn IdSource,
) -> Result<PurchaseOrder, FieldErrors> {
    form.validate()?;
    let order = form.into_order(ids.next_id(ID_PREFIX))?;
    orders.insert(order.clone());
    orders.persist(storage);
    log::info!("Added order {} ({} x {})", order.id, order.quantity, order.item);
    Ok(order)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub stock: StockChange,
    pub orders_saved: SaveOutcome,
}

/// Set a new status. Entering Delivered adds the order quantity to stock;
/// leaving Delivered subtracts it again. Any other transition leaves stock
/// alone.
///
/// The reversal assumes the stock was added by this order's own delivery,
/// so repeated toggling after manual stock edits can drift.
pub fn change_order_status(
    orders: &mut RecordCollection<PurchaseOrder>,
    inventory: &mut RecordCollection<InventoryItem>,
    storage: &dyn KeyValueStorage,
    order_id: &str,
    new_status: OrderStatus,
    today: NaiveDate,
) -> Result<StatusChange, CollectionError> {
    let mut previous = None;
    orders.merge(order_id, |order| {
        previous = Some((order.status, order.item.clone(), order.quantity));
        order.status = new_status;
    })?;
    let Some((from, item, quantity)) = previous else {
        return Err(CollectionError::NotFound {
            kind: "order",
            id: order_id.to_string(),
        });
    };

    let stock = match (from == OrderStatus::Delivered, new_status == OrderStatus::Delivered) {
        (false, true) => sync_inventory(inventory, &item, quantity, true, today),
        (true, false) => sync_inventory(inventory, &item, quantity, false, today),
        _ => StockChange::Skipped,
    };
    if stock.changed() {
        inventory.persist(storage);
    }

    let orders_saved = orders.persist(storage);
    log::info!("Order {} status {} -> {}", order_id, from, new_status);
    Ok(StatusChange { from, to: new_status, stock, orders_saved })
}

pub fn delete_order_prompt(order_id: &str) -> String {
    format!("Are you sure you want to delete order {}?", order_id)
}

pub fn delete_order(
    orders: &mut RecordCollection<PurchaseOrder>,
    storage: &dyn KeyValueStorage,
    order_id: &str,
) -> Result<PurchaseOrder, CollectionError> {
    let removed = orders.remove(order_id)?;
    orders.persist(storage);
    log::info!("Deleted order {}", order_id);
    Ok(removed)
}

pub fn delete_supplier_prompt(suppliers: &RecordCollection<Supplier>, supplier_id: &str) -> String {
    let name = suppliers
        .get(supplier_id)
        .map(|s| s.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(supplier_id);
    format!("Are you sure you want to delete supplier {}? This cannot be undone.", name)
}

pub fn delete_supplier(
    suppliers: &mut RecordCollection<Supplier>,
    storage: &dyn KeyValueStorage,
    supplier_id: &str,
) -> Result<Supplier, CollectionError> {
    let removed = suppliers.remove(supplier_id)?;
    suppliers.persist(storage);
    log::info!("Deleted supplier {}", supplier_id);
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_purchase_order::aggregate::sample_orders;
    use crate::domain::a002_supplier::aggregate::sample_suppliers;
    use crate::domain::a003_inventory_item::aggregate::sample_inventory;
    use crate::shared::id::ClockIds;
    use crate::shared::storage::MemoryStorage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn order(id: &str, item: &str, quantity: u32, status: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            supplier: "GrainCorp".to_string(),
            date: "2024-05-25".to_string(),
            item: item.to_string(),
            quantity,
            status,
        }
    }

    fn stock_of(inventory: &RecordCollection<InventoryItem>, name: &str) -> Option<u32> {
        inventory.get(name).map(|i| i.stock)
    }

    #[test]
    fn test_pending_to_delivered_adds_exact_quantity() {
        let storage = MemoryStorage::new();
        let mut orders = RecordCollection::in_memory("orders", sample_orders());
        let mut inventory = RecordCollection::in_memory("inventory", sample_inventory());

        let change = change_order_status(
            &mut orders,
            &mut inventory,
            &storage,
            "PO003",
            OrderStatus::Delivered,
            today(),
        )
        .unwrap();
        assert_eq!(change.stock, StockChange::Added { item: "Rice".to_string(), quantity: 200 });
        assert_eq!(stock_of(&inventory, "Rice"), Some(700));
        assert_eq!(inventory.get("Rice").unwrap().last_updated, "2024-06-01");
        assert_eq!(orders.get("PO003").unwrap().status, OrderStatus::Delivered);

        change_order_status(&mut orders, &mut inventory, &storage, "PO003", OrderStatus::Pending, today())
            .unwrap();
        assert_eq!(stock_of(&inventory, "Rice"), Some(500));
    }

    #[test]
    fn test_reversal_clamps_at_zero() {
        let storage = MemoryStorage::new();
        let mut orders =
            RecordCollection::in_memory("orders", vec![order("PO1", "Oats", 15, OrderStatus::Delivered)]);
        let mut inventory =
            RecordCollection::in_memory("inventory", vec![InventoryItem::new("Oats", 10, today())]);

        let change =
            change_order_status(&mut orders, &mut inventory, &storage, "PO1", OrderStatus::Pending, today())
                .unwrap();
        assert_eq!(change.stock, StockChange::Subtracted { item: "Oats".to_string(), quantity: 15 });
        assert_eq!(stock_of(&inventory, "Oats"), Some(0));
    }

    #[test]
    fn test_delivery_creates_missing_item_case_insensitively() {
        let storage = MemoryStorage::new();
        let mut orders = RecordCollection::in_memory(
            "orders",
            vec![
                order("PO1", "Dates", 30, OrderStatus::Approved),
                order("PO2", "APPLES", 5, OrderStatus::Approved),
            ],
        );
        let mut inventory = RecordCollection::in_memory("inventory", sample_inventory());

        change_order_status(&mut orders, &mut inventory, &storage, "PO1", OrderStatus::Delivered, today())
            .unwrap();
        assert_eq!(stock_of(&inventory, "Dates"), Some(30));
        assert_eq!(inventory.len(), 6);

        change_order_status(&mut orders, &mut inventory, &storage, "PO2", OrderStatus::Delivered, today())
            .unwrap();
        assert_eq!(stock_of(&inventory, "Apples"), Some(155));
        assert_eq!(inventory.len(), 6);
    }

    #[test]
    fn test_leaving_delivered_for_missing_item_is_noop() {
        let storage = MemoryStorage::new();
        let mut orders =
            RecordCollection::in_memory("orders", vec![order("PO1", "Figs", 3, OrderStatus::Delivered)]);
        let mut inventory = RecordCollection::in_memory("inventory", sample_inventory());
        let change = change_order_status(
            &mut orders,
            &mut inventory,
            &storage,
            "PO1",
            OrderStatus::Cancelled,
            today(),
        )
        .unwrap();
        assert_eq!(change.stock, StockChange::Missing { item: "Figs".to_string() });
        assert_eq!(inventory.len(), 5);
        assert_eq!(storage.get_item("inventory").unwrap(), None);
    }

    #[test]
    fn test_non_delivery_transitions_leave_stock() {
        let storage = MemoryStorage::new();
        let mut orders = RecordCollection::in_memory("orders", sample_orders());
        let mut inventory = RecordCollection::in_memory("inventory", sample_inventory());
        let change =
            change_order_status(&mut orders, &mut inventory, &storage, "PO003", OrderStatus::Approved, today())
                .unwrap();
        assert_eq!(change.stock, StockChange::Skipped);
        assert_eq!(stock_of(&inventory, "Rice"), Some(500));

        assert!(change_order_status(
            &mut orders,
            &mut inventory,
            &storage,
            "PO404",
            OrderStatus::Delivered,
            today()
        )
        .is_err());
    }

    #[test]
    fn test_add_and_delete_order() {
        let storage = MemoryStorage::new();
        let mut orders = RecordCollection::load(&storage, "orders", "orders.rev", sample_orders());
        let mut ids = ClockIds::new(1_716_200_654_321, 7);

        let form = NewOrderForm {
            supplier: "GrainCorp".to_string(),
            item: "Flour".to_string(),
            quantity: "0".to_string(),
            date: "2024-06-01".to_string(),
        };
        let errors = add_order(&mut orders, &storage, form.clone(), &mut ids).unwrap_err();
        assert_eq!(errors.banner(), Some("Please fill all fields correctly."));
        assert_eq!(orders.len(), 3);

        let oversized = NewOrderForm { quantity: "5000000000".to_string(), ..form.clone() };
        let errors = add_order(&mut orders, &storage, oversized, &mut ids).unwrap_err();
        assert!(errors.is_invalid("quantity"));
        assert_eq!(orders.len(), 3);

        let form = NewOrderForm { quantity: "25".to_string(), ..form };
        let added = add_order(&mut orders, &storage, form, &mut ids).unwrap();
        assert_eq!(added.id, "PO6543217");
        assert_eq!(added.status, OrderStatus::Pending);

        let reloaded = RecordCollection::<PurchaseOrder>::load(&storage, "orders", "orders.rev", vec![]);
        assert_eq!(reloaded.len(), 4);

        assert_eq!(delete_order_prompt("PO001"), "Are you sure you want to delete order PO001?");
        delete_order(&mut orders, &storage, "PO001").unwrap();
        assert!(delete_order(&mut orders, &storage, "PO001").is_err());
        let reloaded = RecordCollection::<PurchaseOrder>::load(&storage, "orders", "orders.rev", vec![]);
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_delete_supplier() {
        let storage = MemoryStorage::new();
        let mut suppliers = RecordCollection::in_memory("suppliers", sample_suppliers());
        assert_eq!(
            delete_supplier_prompt(&suppliers, "S02"),
            "Are you sure you want to delete supplier DairyBest Ltd.? This cannot be undone."
        );
        assert_eq!(delete_supplier(&mut suppliers, &storage, "S02").unwrap().id, "S02");
        assert_eq!(suppliers.len(), 2);
    }
}
