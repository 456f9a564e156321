use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::a001_purchase_order::aggregate::PurchaseOrder;
use crate::domain::a002_supplier::aggregate::Supplier;
use crate::domain::a003_inventory_item::aggregate::InventoryItem;
use crate::enums::OrderStatus;
use crate::shared::config::{AppConfig, MetricsConfig};
use crate::shared::storage::{load, KeyValueStorage};

/// Figures shown on the admin dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminMetrics {
    pub total_orders: usize,
    pub pending_orders: usize,
    /// Quantity × fixed unit price over Approved and Delivered orders
    pub simulated_value: f64,
    /// Delivered orders dated inside the trailing window
    pub delivered_recently: usize,
    pub total_suppliers: usize,
    pub inventory_items: usize,
    pub low_stock_items: usize,
}

impl AdminMetrics {
    /// e.g. "$1500.00"
    pub fn simulated_value_label(&self) -> String {
        format!("${:.2}", self.simulated_value)
    }
}

/// Recomputed from scratch on every dashboard load.
pub fn compute_metrics(
    orders: &[PurchaseOrder],
    suppliers: &[Supplier],
    inventory: &[InventoryItem],
    today: NaiveDate,
    config: &MetricsConfig,
) -> AdminMetrics {
    let cutoff = Duration::try_days(config.delivered_window_days)
        .and_then(|window| today.checked_sub_signed(window));
    if cutoff.is_none() {
        log::warn!(
            "Delivered window of {} days is out of range, counting every delivered order",
            config.delivered_window_days
        );
    }

    let simulated_value = orders
        .iter()
        .filter(|o| o.status.is_billable())
        .map(|o| f64::from(o.quantity) * config.simulated_unit_price)
        .sum();

    // Dates that do not parse are not counted
    let delivered_recently = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .filter_map(PurchaseOrder::parsed_date)
        .filter(|date| cutoff.map_or(true, |cutoff| *date > cutoff))
        .count();

    let metrics = AdminMetrics {
        total_orders: orders.len(),
        pending_orders: orders.iter().filter(|o| o.status == OrderStatus::Pending).count(),
        simulated_value,
        delivered_recently,
        total_suppliers: suppliers.len(),
        inventory_items: inventory.len(),
        low_stock_items: inventory
            .iter()
            .filter(|i| i.is_low_stock(config.low_stock_threshold))
            .count(),
    };
    log::debug!("Admin metrics computed: {:?}", metrics);
    metrics
}

/// Dashboard figures over whatever the procurement collections currently
/// hold. Absent keys count as empty collections.
pub fn load_metrics(
    storage: &dyn KeyValueStorage,
    config: &AppConfig,
    today: NaiveDate,
) -> AdminMetrics {
    let keys = &config.storage;
    let orders: Vec<PurchaseOrder> = load(storage, &keys.orders, Vec::new());
    let suppliers: Vec<Supplier> = load(storage, &keys.suppliers, Vec::new());
    let inventory: Vec<InventoryItem> = load(storage, &keys.inventory, Vec::new());
    compute_metrics(&orders, &suppliers, &inventory, today, &config.metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_purchase_order::aggregate::sample_orders;
    use crate::domain::a002_supplier::aggregate::sample_suppliers;
    use crate::domain::a003_inventory_item::aggregate::sample_inventory;
    use crate::shared::storage::{save, MemoryStorage};
    use crate::system::auth::SessionGate;

    fn order(id: &str, date: &str, quantity: u32, status: OrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            supplier: "GrainCorp".to_string(),
            date: date.to_string(),
            item: "Rice".to_string(),
            quantity,
            status,
        }
    }

    #[test]
    fn test_metrics_over_sample_data() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let metrics = compute_metrics(
            &sample_orders(),
            &sample_suppliers(),
            &sample_inventory(),
            today,
            &config.metrics,
        );
        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.pending_orders, 1);
        // (100 + 50) * 10
        assert_eq!(metrics.simulated_value_label(), "$1500.00");
        assert_eq!(metrics.delivered_recently, 1);
        assert_eq!(metrics.total_suppliers, 3);
        assert_eq!(metrics.inventory_items, 5);
        assert_eq!(metrics.low_stock_items, 1);
    }

    #[test]
    fn test_delivered_window_edges() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let orders = vec![
            order("PO1", "2024-05-31", 1, OrderStatus::Delivered),
            order("PO2", "2024-06-01", 1, OrderStatus::Delivered),
            order("PO3", "2024-06-20", 1, OrderStatus::Approved),
            order("PO4", "not a date", 1, OrderStatus::Delivered),
            order("PO5", "2024-07-04", 1, OrderStatus::Delivered),
        ];
        let metrics = compute_metrics(&orders, &[], &[], today, &config.metrics);
        assert_eq!(metrics.delivered_recently, 2);
        assert_eq!(metrics.simulated_value, 50.0);
    }

    #[test]
    fn test_empty_collections() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let metrics = compute_metrics(&[], &[], &[], today, &config.metrics);
        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.simulated_value_label(), "$0.00");
        assert_eq!(metrics.low_stock_items, 0);
    }

    #[test]
    fn test_window_out_of_range_counts_every_delivery() {
        let mut config = AppConfig::default();
        config.metrics.delivered_window_days = i64::MAX / 1000;
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let orders = vec![
            order("PO1", "1999-01-01", 1, OrderStatus::Delivered),
            order("PO2", "2024-06-01", 1, OrderStatus::Delivered),
            order("PO3", "2024-06-02", 1, OrderStatus::Pending),
        ];
        let metrics = compute_metrics(&orders, &[], &[], today, &config.metrics);
        assert_eq!(metrics.delivered_recently, 2);

        config.metrics.delivered_window_days = i64::MIN;
        let metrics = compute_metrics(&orders, &[], &[], today, &config.metrics);
        assert_eq!(metrics.delivered_recently, 2);
    }

    #[test]
    fn test_admin_login_then_metrics_from_storage() {
        let config = AppConfig::default();
        let local = MemoryStorage::new();
        let session = MemoryStorage::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let mut orders = sample_orders();
        orders.push(order("PO004", "2024-06-05", 7, OrderStatus::Pending));
        save(&local, &config.storage.orders, &orders);
        save(&local, &config.storage.suppliers, &sample_suppliers()[..2]);
        save(&local, &config.storage.inventory, &sample_inventory());

        let gate = SessionGate::new(&session, &config);
        assert!(gate.login("wrong").is_err());
        assert!(!gate.is_logged_in());
        gate.login(&config.admin.password).unwrap();
        assert!(gate.is_logged_in());

        let metrics = load_metrics(&local, &config, today);
        assert_eq!(metrics.total_orders, 4);
        assert_eq!(metrics.pending_orders, 2);
        assert_eq!(metrics.simulated_value_label(), "$1500.00");
        assert_eq!(metrics.delivered_recently, 1);
        assert_eq!(metrics.total_suppliers, 2);
        assert_eq!(metrics.inventory_items, 5);
        assert_eq!(metrics.low_stock_items, 1);
    }

    #[test]
    fn test_metrics_with_nothing_stored() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let metrics = load_metrics(&MemoryStorage::new(), &config, today);
        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.total_suppliers, 0);
        assert_eq!(metrics.inventory_items, 0);
    }
}
