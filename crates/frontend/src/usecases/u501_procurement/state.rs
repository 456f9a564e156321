use contracts::domain::a001_purchase_order::aggregate::{sample_orders, PurchaseOrder};
use contracts::domain::a002_supplier::aggregate::{sample_suppliers, Supplier};
use contracts::domain::a003_inventory_item::aggregate::{sample_inventory, InventoryItem};
use contracts::domain::common::RecordCollection;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

use crate::shared::browser_storage::BrowserStorage;

/// Collections of the procurement page, hydrated once when the page mounts.
#[derive(Clone, Copy)]
pub struct ProcurementState {
    pub orders: RwSignal<RecordCollection<PurchaseOrder>>,
    pub suppliers: RwSignal<RecordCollection<Supplier>>,
    pub inventory: RwSignal<RecordCollection<InventoryItem>>,
    /// `false` when the browser refused local storage; forms are disabled
    pub storage_ready: bool,
}

impl ProcurementState {
    pub fn load(config: &AppConfig) -> Self {
        let keys = &config.storage;
        match BrowserStorage::local() {
            Ok(storage) => Self {
                orders: RwSignal::new(RecordCollection::load_configured(
                    &storage,
                    config,
                    &keys.orders,
                    sample_orders(),
                )),
                suppliers: RwSignal::new(RecordCollection::load_configured(
                    &storage,
                    config,
                    &keys.suppliers,
                    sample_suppliers(),
                )),
                inventory: RwSignal::new(RecordCollection::load_configured(
                    &storage,
                    config,
                    &keys.inventory,
                    sample_inventory(),
                )),
                storage_ready: true,
            },
            Err(e) => {
                log::error!("Procurement page disabled: {}", e);
                Self {
                    orders: RwSignal::new(RecordCollection::in_memory(&keys.orders, sample_orders())),
                    suppliers: RwSignal::new(RecordCollection::in_memory(
                        &keys.suppliers,
                        sample_suppliers(),
                    )),
                    inventory: RwSignal::new(RecordCollection::in_memory(
                        &keys.inventory,
                        sample_inventory(),
                    )),
                    storage_ready: false,
                }
            }
        }
    }
}

pub fn use_procurement() -> ProcurementState {
    use_context::<ProcurementState>().expect("ProcurementState context not found")
}
