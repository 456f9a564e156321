use contracts::domain::a003_inventory_item::aggregate::{InventoryItem, StockForm};
use contracts::shared::table::{render_rows, Tabular};
use leptos::prelude::*;

use crate::domain::a003_inventory_item::ui::details::StockDetails;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{CellRef, RecordTable};
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::record_modal::ModalViewModel;
use crate::usecases::u501_procurement::state::use_procurement;

#[component]
#[allow(non_snake_case)]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_procurement();
    let (close_delay, threshold) =
        ctx.config.with_value(|c| (c.ui.modal_close_delay_ms, c.metrics.low_stock_threshold));
    let vm = ModalViewModel::<StockForm>::new(state.inventory, close_delay);
    let search = RwSignal::new(String::new());
    let disabled = !state.storage_ready;

    let rows = Signal::derive(move || {
        let term = search.get();
        state.inventory.with(|items| render_rows(&items.filtered(&term, |_| true)))
    });

    // Stock below the threshold gets a "(Low)" marker
    let render_cell = Callback::new(move |cell: CellRef| -> AnyView {
        let low = cell.column == "stock"
            && state.inventory.with_untracked(|items| {
                items
                    .get(&cell.row_key)
                    .is_some_and(|item| item.is_low_stock(threshold))
            });
        if low {
            view! {
                <span class="stock--low">
                    {cell.text} " " <Badge variant="warning">"(Low)"</Badge>
                </span>
            }
            .into_any()
        } else {
            cell.text.into_any()
        }
    });

    let actions = Callback::new(move |name: String| -> AnyView {
        view! {
            <Button
                variant="secondary"
                small=true
                disabled=disabled
                on_click=Callback::new(move |_| vm.open_edit(&name))
            >
                "Update Stock"
            </Button>
        }
        .into_any()
    });

    view! {
        <div class="card">
            <PageHeader title="Inventory">
                <Input
                    id="inventory-search"
                    placeholder="Search inventory..."
                    value=Signal::derive(move || search.get())
                    on_input=Callback::new(move |v: String| search.set(v))
                />
            </PageHeader>
            <RecordTable
                columns=InventoryItem::columns()
                rows=rows
                render_cell=render_cell
                actions=actions
            />
            <StockDetails vm=vm />
        </div>
    }
}
