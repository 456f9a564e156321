use contracts::domain::a002_supplier::aggregate::SupplierForm;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::feedback::FeedbackLine;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::record_modal::ModalViewModel;

/// Add/edit supplier dialog. Rendered only while the editor is open.
#[component]
#[allow(non_snake_case)]
pub fn SupplierDetails(vm: ModalViewModel<SupplierForm>) -> impl IntoView {
    view! {
        <Show when=move || vm.is_open()>
            <ModalFrame
                title=Signal::derive(move || vm.title().to_string())
                on_close=Callback::new(move |_| vm.close())
            >
                <Input
                    label="Name"
                    id="supplier-name"
                    value=vm.form_value(|f| f.name.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.name = v))
                    error=vm.field_error("name")
                />
                <Input
                    label="Email"
                    id="supplier-email"
                    input_type="email"
                    value=vm.form_value(|f| f.email.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.email = v))
                    error=vm.field_error("email")
                />
                <Input
                    label="Phone"
                    id="supplier-phone"
                    input_type="tel"
                    value=vm.form_value(|f| f.phone.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.phone = v))
                />
                <Input
                    label="Products Supplied"
                    id="supplier-products"
                    placeholder="e.g. Apples, Bananas"
                    value=vm.form_value(|f| f.products.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.products = v))
                />
                <FeedbackLine feedback=vm.feedback() />
                <div class="modal__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.close())>
                        "Cancel"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        vm.save();
                    })>
                        "Save Supplier"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
