use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierForm};
use contracts::shared::table::{render_rows, Tabular};
use contracts::usecases::u501_procurement::{delete_supplier, delete_supplier_prompt};
use leptos::prelude::*;

use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::layout::global_context::use_app_context;
use crate::shared::browser_storage::with_local;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::RecordTable;
use crate::shared::components::ui::{Button, Input};
use crate::shared::dialogs::confirm;
use crate::shared::record_modal::ModalViewModel;
use crate::usecases::u501_procurement::state::use_procurement;

#[component]
#[allow(non_snake_case)]
pub fn SuppliersList() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_procurement();
    let close_delay = ctx.config.with_value(|c| c.ui.modal_close_delay_ms);
    let vm = ModalViewModel::<SupplierForm>::new(state.suppliers, close_delay);
    let search = RwSignal::new(String::new());
    let disabled = !state.storage_ready;

    let rows = Signal::derive(move || {
        let term = search.get();
        state.suppliers.with(|s| render_rows(&s.filtered(&term, |_| true)))
    });

    let remove = move |supplier_id: String| {
        let prompt = state.suppliers.with_untracked(|s| delete_supplier_prompt(s, &supplier_id));
        if !confirm(&prompt) {
            return;
        }
        let result = with_local(|storage| {
            let mut result = None;
            state.suppliers.update(|s| result = Some(delete_supplier(s, storage, &supplier_id)));
            result
        })
        .flatten();
        if let Some(Err(e)) = result {
            log::error!("Delete failed: {}", e);
        }
    };

    let actions = Callback::new(move |supplier_id: String| -> AnyView {
        let edit_id = supplier_id.clone();
        view! {
            <div class="row-actions">
                <Button
                    variant="secondary"
                    small=true
                    disabled=disabled
                    on_click=Callback::new(move |_| vm.open_edit(&edit_id))
                >
                    "Edit"
                </Button>
                <Button
                    variant="danger"
                    small=true
                    disabled=disabled
                    on_click=Callback::new(move |_| remove(supplier_id.clone()))
                >
                    "Delete"
                </Button>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="card">
            <PageHeader title="Suppliers">
                <Input
                    id="supplier-search"
                    placeholder="Search suppliers..."
                    value=Signal::derive(move || search.get())
                    on_input=Callback::new(move |v: String| search.set(v))
                />
                <Button disabled=disabled on_click=Callback::new(move |_| vm.open_add())>
                    "Add Supplier"
                </Button>
            </PageHeader>
            <RecordTable columns=Supplier::columns() rows=rows actions=actions />
            <SupplierDetails vm=vm />
        </div>
    }
}
