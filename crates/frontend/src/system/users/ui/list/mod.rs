mod state;

use contracts::domain::common::CollectionError;
use contracts::system::users::{delete_user, User, UserForm, PROTECTED_DELETE_MESSAGE};
use contracts::shared::table::{render_rows, Tabular};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::browser_storage::with_local;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::record_table::RecordTable;
use crate::shared::components::ui::{Button, Input};
use crate::shared::dialogs::{alert, confirm};
use crate::shared::record_modal::ModalViewModel;
use crate::system::users::ui::details::UserDetails;
use state::create_state;

/// User management table of the admin dashboard.
#[component]
pub fn UsersList() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let state = create_state(&config);
    let protected_id = StoredValue::new(config.admin.protected_user_id.clone());
    let vm = ModalViewModel::<UserForm>::new(state.users, config.ui.modal_close_delay_ms);
    let disabled = !state.storage_ready;

    let rows = Signal::derive(move || {
        let term = state.search_query.get();
        state.users.with(|users| render_rows(&users.filtered(&term, |_| true)))
    });

    let remove = move |user_id: String| {
        if protected_id.with_value(|protected| *protected == user_id) {
            alert(PROTECTED_DELETE_MESSAGE);
            return;
        }
        let name = state
            .users
            .with_untracked(|users| users.get(&user_id).map(|u| u.name.clone()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| user_id.clone());
        if !confirm(&format!("Delete user {}?", name)) {
            return;
        }
        let result = with_local(|storage| {
            let mut result = None;
            state.users.update(|users| {
                let removed = protected_id.with_value(|protected| delete_user(users, &user_id, protected));
                if removed.is_ok() {
                    users.persist(storage);
                }
                result = Some(removed);
            });
            result
        })
        .flatten();

        match result {
            Some(Ok(user)) => log::info!("Deleted user {}", user.id),
            Some(Err(CollectionError::ProtectedRecord { .. })) => alert(PROTECTED_DELETE_MESSAGE),
            Some(Err(e)) => log::error!("Delete failed: {}", e),
            None => {}
        }
    };

    let actions = Callback::new(move |user_id: String| -> AnyView {
        let edit_id = user_id.clone();
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
                    on_click=Callback::new(move |_| remove(user_id.clone()))
                >
                    "Delete"
                </Button>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="card">
            <PageHeader title="User Management">
                <Input
                    id="user-search"
                    placeholder="Search users..."
                    value=state.search_query
                    on_input=Callback::new(move |v: String| state.search_query.set(v))
                />
                <Button disabled=disabled on_click=Callback::new(move |_| vm.open_add())>
                    "Add User"
                </Button>
            </PageHeader>
            <RecordTable columns=User::columns() rows=rows actions=actions />
            <UserDetails vm=vm />
        </div>
    }
}
