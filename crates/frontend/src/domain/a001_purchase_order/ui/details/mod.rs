use contracts::domain::a001_purchase_order::aggregate::NewOrderForm;
use contracts::domain::a002_supplier::aggregate::supplier_names;
use contracts::shared::modal::Feedback;
use contracts::shared::validation::FieldErrors;
use contracts::usecases::u501_procurement::{add_order, ORDER_ADDED_MESSAGE};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::browser_storage::with_local;
use crate::shared::clock::{today, BrowserIds};
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::feedback::{field_error, FeedbackLine, Flash};
use crate::usecases::u501_procurement::state::use_procurement;

/// "Add New Purchase Order" form above the orders table.
#[component]
#[allow(non_snake_case)]
pub fn NewOrderPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = use_procurement();
    let hide_ms = ctx.config.with_value(|c| c.ui.feedback_hide_ms);

    let form = RwSignal::new(NewOrderForm::for_today(today()));
    let errors = RwSignal::new(FieldErrors::new());
    let flash = Flash::new();

    let supplier_options = Signal::derive(move || {
        state.suppliers.with(|s| {
            supplier_names(s.records())
                .into_iter()
                .filter(|name| !name.is_empty())
                .map(|name| (name.clone(), name))
                .collect::<Vec<_>>()
        })
    });

    let submit = move |_: leptos::ev::MouseEvent| {
        let submitted = form.get_untracked();
        let result = with_local(|storage| {
            let mut ids = BrowserIds;
            let mut result = None;
            state.orders.update(|orders| {
                result = Some(add_order(orders, storage, submitted, &mut ids));
            });
            result
        })
        .flatten();

        match result {
            Some(Ok(_)) => {
                errors.set(FieldErrors::new());
                form.set(NewOrderForm::for_today(today()));
                flash.show(Feedback::success(ORDER_ADDED_MESSAGE), hide_ms);
            }
            Some(Err(e)) => {
                let banner = e.banner().unwrap_or("Please fill all fields correctly.").to_string();
                errors.set(e);
                flash.show(Feedback::error(banner), hide_ms);
            }
            None => flash.show(
                Feedback::error("Storage is not available. The order was not saved."),
                hide_ms,
            ),
        }
    };

    let disabled = !state.storage_ready;

    view! {
        <div class="card">
            <h3 class="card__title">"Add New Purchase Order"</h3>
            <div class="form-grid">
                <Select
                    label="Supplier"
                    id="order-supplier"
                    value=Signal::derive(move || form.with(|f| f.supplier.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.supplier = v))
                    options=supplier_options
                    prompt="Select Supplier"
                    error=field_error(errors, "supplier")
                    disabled=disabled
                />
                <Input
                    label="Item"
                    id="order-item"
                    value=Signal::derive(move || form.with(|f| f.item.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.item = v))
                    placeholder="e.g. Apples"
                    error=field_error(errors, "item")
                    disabled=disabled
                />
                <Input
                    label="Quantity"
                    id="order-quantity"
                    input_type="number"
                    min="1"
                    value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.quantity = v))
                    error=field_error(errors, "quantity")
                    disabled=disabled
                />
                <Input
                    label="Order Date"
                    id="order-date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.date.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.date = v))
                    error=field_error(errors, "date")
                    disabled=disabled
                />
            </div>
            <div class="form-actions">
                <Button on_click=Callback::new(submit) disabled=disabled>
                    "Add Order"
                </Button>
            </div>
            <FeedbackLine feedback=flash.get() />
        </div>
    }
}
