use contracts::shared::config::AppConfig;
use contracts::usecases::u502_checkout::CheckoutSession;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages of the site. The active one is mirrored to `?page=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Catalogue,
    Order,
    Payment,
    Confirmation,
    Procurement,
    Admin,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Catalogue => "catalogue",
            Page::Order => "order",
            Page::Payment => "payment",
            Page::Confirmation => "confirmation",
            Page::Procurement => "procurement",
            Page::Admin => "admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Catalogue => "Products",
            Page::Order => "Order",
            Page::Payment => "Payment",
            Page::Confirmation => "Confirmation",
            Page::Procurement => "Procurement",
            Page::Admin => "Admin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [
            Page::Catalogue,
            Page::Order,
            Page::Payment,
            Page::Confirmation,
            Page::Procurement,
            Page::Admin,
        ]
        .into_iter()
        .find(|p| p.key() == key)
    }

    /// Pages listed in the header navigation
    pub fn nav() -> [Page; 4] {
        [Page::Catalogue, Page::Order, Page::Procurement, Page::Admin]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    /// Hand-off from the order page to payment and confirmation
    pub checkout: RwSignal<Option<CheckoutSession>>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            checkout: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    /// Pick up `?page=` once, then keep the URL in sync with the active page.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
