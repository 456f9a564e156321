use contracts::shared::config::AppConfig;
use contracts::system::auth::{AuthError, SessionGate};
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::browser_storage::BrowserStorage;

/// Admin login state of the current tab, mirrored from session storage.
#[derive(Clone, Copy)]
pub struct AdminSession {
    pub logged_in: RwSignal<bool>,
    config: StoredValue<AppConfig>,
}

impl AdminSession {
    /// Run `f` with the session gate over `sessionStorage`.
    fn with_gate<R>(&self, f: impl FnOnce(&SessionGate<'_>) -> R) -> Option<R> {
        match BrowserStorage::session() {
            Ok(session) => Some(
                self.config
                    .with_value(|config| f(&SessionGate::new(&session, config))),
            ),
            Err(e) => {
                log::error!("Session storage not accessible: {}", e);
                None
            }
        }
    }

    /// Check the password; the flag is set on success and cleared otherwise.
    pub fn login(&self, password: &str) -> Result<(), AuthError> {
        let result = self
            .with_gate(|gate| gate.login(password))
            .unwrap_or(Err(AuthError::IncorrectPassword));
        self.logged_in.set(result.is_ok());
        result
    }

    pub fn logout(&self) {
        self.with_gate(|gate| gate.logout());
        self.logged_in.set(false);
    }
}

/// Restores the login flag once and provides [`AdminSession`].
#[component]
pub fn AdminSessionProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let session = AdminSession {
        logged_in: RwSignal::new(false),
        config: ctx.config,
    };
    let restored = session.with_gate(|gate| gate.is_logged_in()).unwrap_or(false);
    session.logged_in.set(restored);
    provide_context(session);

    children()
}

pub fn use_admin_session() -> AdminSession {
    use_context::<AdminSession>().expect("AdminSessionProvider not found in component tree")
}
