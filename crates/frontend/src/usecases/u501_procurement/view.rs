use leptos::prelude::*;

use super::state::ProcurementState;
use crate::domain::a001_purchase_order::ui::details::NewOrderPanel;
use crate::domain::a001_purchase_order::ui::list::OrdersList;
use crate::domain::a002_supplier::ui::list::SuppliersList;
use crate::domain::a003_inventory_item::ui::list::InventoryList;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;

/// Back-office page: orders, suppliers and inventory over local storage.
#[component]
pub fn ProcurementPage() -> impl IntoView {
    let ctx = use_app_context();
    log::debug!("Running procurement page");

    let state = ctx.config.with_value(ProcurementState::load);
    provide_context(state);

    view! {
        <div class="page">
            <PageHeader
                title="Procurement Management"
                subtitle="Purchase orders, suppliers and stock levels"
            />
            <Show when=move || !state.storage_ready>
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">
                        "Local storage is not available in this browser. \
                        Changes cannot be saved and editing is disabled."
                    </span>
                </div>
            </Show>
            <NewOrderPanel />
            <OrdersList />
            <SuppliersList />
            <InventoryList />
        </div>
    }
}
