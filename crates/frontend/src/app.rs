use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::browser_storage::with_local;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

/// Stored override first, then the embedded defaults.
fn resolve_config() -> AppConfig {
    let loaded = with_local(|storage| load_config(Some(storage))).unwrap_or_else(|| load_config(None));
    match loaded {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration not loaded, using defaults: {:#}", e);
            AppConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(resolve_config()));

    view! {
        <AppRoutes />
    }
}
