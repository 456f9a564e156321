use contracts::domain::a003_inventory_item::aggregate::StockForm;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::feedback::FeedbackLine;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::record_modal::ModalViewModel;

/// Stock quantity dialog; items are only ever edited here, never added.
#[component]
#[allow(non_snake_case)]
pub fn StockDetails(vm: ModalViewModel<StockForm>) -> impl IntoView {
    view! {
        <Show when=move || vm.is_open()>
            <ModalFrame
                title=Signal::derive(move || vm.title().to_string())
                on_close=Callback::new(move |_| vm.close())
                modal_class="modal--narrow"
            >
                <p class="modal__subject">
                    "Item: "
                    <strong>{move || vm.editor.with(|m| m.form.item_name.clone())}</strong>
                </p>
                <Input
                    label="New Stock Quantity"
                    id="stock-quantity"
                    input_type="number"
                    min="0"
                    value=vm.form_value(|f| f.stock.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.stock = v))
                    error=vm.field_error("stock")
                />
                <FeedbackLine feedback=vm.feedback() />
                <div class="modal__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.close())>
                        "Cancel"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        vm.save();
                    })>
                        "Update Stock"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
