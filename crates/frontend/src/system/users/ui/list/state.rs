use contracts::domain::common::RecordCollection;
use contracts::shared::config::AppConfig;
use contracts::system::users::{sample_users, User};
use leptos::prelude::*;

use crate::shared::browser_storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct UsersListState {
    pub users: RwSignal<RecordCollection<User>>,
    pub search_query: RwSignal<String>,
    /// `false` when local storage is refused; editing is disabled
    pub storage_ready: bool,
}

pub fn create_state(config: &AppConfig) -> UsersListState {
    let key = &config.storage.users;
    let (users, storage_ready) = match BrowserStorage::local() {
        Ok(storage) => (
            RecordCollection::load_configured(&storage, config, key, sample_users()),
            true,
        ),
        Err(e) => {
            log::error!("User management disabled: {}", e);
            (RecordCollection::in_memory(key, sample_users()), false)
        }
    };
    UsersListState {
        users: RwSignal::new(users),
        search_query: RwSignal::new(String::new()),
        storage_ready,
    }
}
