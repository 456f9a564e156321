use contracts::enums::UserRole;
use contracts::system::users::UserForm;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::feedback::FeedbackLine;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::record_modal::ModalViewModel;

fn role_options() -> Vec<(String, String)> {
    UserRole::all()
        .into_iter()
        .map(|role| (role.code().to_string(), role.display_name().to_string()))
        .collect()
}

#[component]
pub fn UserDetails(vm: ModalViewModel<UserForm>) -> impl IntoView {
    view! {
        <Show when=move || vm.is_open()>
            <ModalFrame
                title=Signal::derive(move || vm.title().to_string())
                on_close=Callback::new(move |_| vm.close())
            >
                <Input
                    label="Name"
                    id="user-name"
                    value=vm.form_value(|f| f.name.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.name = v))
                    error=vm.field_error("name")
                />
                <Input
                    label="Email"
                    id="user-email"
                    input_type="email"
                    value=vm.form_value(|f| f.email.clone())
                    on_input=Callback::new(move |v: String| vm.set_form(|f| f.email = v))
                    error=vm.field_error("email")
                />
                <Select
                    label="Role"
                    id="user-role"
                    value=vm.form_value(|f| f.role.clone())
                    on_change=Callback::new(move |v: String| vm.set_form(|f| f.role = v))
                    options=role_options()
                    prompt="Select Role"
                    error=vm.field_error("role")
                />
                <FeedbackLine feedback=vm.feedback() />
                <div class="modal__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.close())>
                        "Cancel"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        vm.save();
                    })>
                        "Save User"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
