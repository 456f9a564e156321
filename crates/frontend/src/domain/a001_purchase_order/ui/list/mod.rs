use contracts::domain::a001_purchase_order::aggregate::{OrderFilter, PurchaseOrder};
use contracts::enums::{OrderStatus, StatusFilter};
use contracts::shared::table::{render_rows, Tabular};
use contracts::usecases::u501_procurement::{change_order_status, delete_order, delete_order_prompt};
use leptos::prelude::*;

use crate::shared::browser_storage::with_local;
use crate::shared::clock::today;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::{CellRef, RecordTable};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::dialogs::confirm;
use crate::usecases::u501_procurement::state::use_procurement;

fn status_filter_options() -> Vec<(String, String)> {
    std::iter::once(StatusFilter::All)
        .chain(OrderStatus::all().into_iter().map(StatusFilter::Only))
        .map(|f| {
            let label = match f {
                StatusFilter::All => "All Statuses".to_string(),
                StatusFilter::Only(status) => status.code().to_string(),
            };
            (f.code().to_string(), label)
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn OrdersList() -> impl IntoView {
    let state = use_procurement();
    let filter = RwSignal::new(OrderFilter::default());
    let disabled = !state.storage_ready;

    let rows = Signal::derive(move || {
        let current = filter.get();
        state.orders.with(|orders| render_rows(&current.apply(orders.records())))
    });

    let set_status = move |order_id: String, code: String| {
        let Some(status) = OrderStatus::from_code(&code) else {
            log::warn!("Unknown order status '{}'", code);
            return;
        };
        let result = with_local(|storage| {
            let mut result = None;
            state.orders.update(|orders| {
                state.inventory.update(|inventory| {
                    result = Some(change_order_status(
                        orders, inventory, storage, &order_id, status, today(),
                    ));
                });
            });
            result
        })
        .flatten();

        match result {
            Some(Ok(change)) => log::debug!("Status change {:?}", change),
            Some(Err(e)) => log::error!("Status change failed: {}", e),
            None => {}
        }
    };

    let remove = move |order_id: String| {
        if !confirm(&delete_order_prompt(&order_id)) {
            return;
        }
        let result = with_local(|storage| {
            let mut result = None;
            state.orders.update(|orders| result = Some(delete_order(orders, storage, &order_id)));
            result
        })
        .flatten();
        if let Some(Err(e)) = result {
            log::error!("Delete failed: {}", e);
        }
    };

    let render_cell = Callback::new(move |cell: CellRef| -> AnyView {
        if cell.column != "status" {
            return cell.text.into_any();
        }
        let order_id = cell.row_key.clone();
        let current = cell.text.clone();
        view! {
            <select
                class="status-select"
                disabled=disabled
                on:change=move |ev| set_status(order_id.clone(), event_target_value(&ev))
            >
                {OrderStatus::all()
                    .into_iter()
                    .map(|status| {
                        let code = status.code();
                        view! { <option value=code selected={code == current}>{code}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any()
    });

    let actions = Callback::new(move |order_id: String| -> AnyView {
        view! {
            <Button
                variant="danger"
                small=true
                disabled=disabled
                on_click=Callback::new(move |_| remove(order_id.clone()))
            >
                "Delete"
            </Button>
        }
        .into_any()
    });

    view! {
        <div class="card">
            <PageHeader title="Purchase Orders">
                <Input
                    id="order-search"
                    placeholder="Search orders..."
                    value=Signal::derive(move || filter.with(|f| f.term.clone()))
                    on_input=Callback::new(move |v: String| filter.update(|f| f.term = v))
                />
                <Select
                    id="order-status-filter"
                    value=Signal::derive(move || filter.with(|f| f.status.code().to_string()))
                    on_change=Callback::new(move |v: String| {
                        filter.update(|f| f.status = StatusFilter::from_code(&v))
                    })
                    options=status_filter_options()
                />
            </PageHeader>
            <RecordTable
                columns=PurchaseOrder::columns()
                rows=rows
                render_cell=render_cell
                actions=actions
            />
        </div>
    }
}
