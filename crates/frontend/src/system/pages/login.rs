use leptos::html;
use leptos::prelude::*;

use crate::system::auth::context::use_admin_session;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let password_ref = NodeRef::<html::Input>::new();
    let session = use_admin_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match session.login(&password.get_untracked()) {
            Ok(()) => set_error_message.set(None),
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                // Retype from scratch
                if let Some(input) = password_ref.get_untracked() {
                    let _ = input.focus();
                    input.select();
                }
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SwiftGoods"</h1>
                <h2>"Admin Login"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="admin-password">"Password"</label>
                        <input
                            type="password"
                            id="admin-password"
                            node_ref=password_ref
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="button button--primary">
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
