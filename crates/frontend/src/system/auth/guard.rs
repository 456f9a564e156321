use leptos::prelude::*;

use super::context::use_admin_session;
use crate::system::pages::login::AdminLoginPage;

/// Renders `children` for a logged-in admin, the login form otherwise.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_admin_session();

    view! {
        <Show
            when=move || session.logged_in.get()
            fallback=|| view! { <AdminLoginPage /> }
        >
            {children()}
        </Show>
    }
}
