//! Admin session gate.
//!
//! A single `"true"` flag in per-tab session storage decides whether the
//! dashboard renders. The password is compared in plain text; this is a
//! convenience gate, not access control.

use thiserror::Error;

use crate::shared::config::AppConfig;
use crate::shared::storage::KeyValueStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect password.")]
    IncorrectPassword,
}

const FLAG_VALUE: &str = "true";

pub struct SessionGate<'a> {
    session: &'a dyn KeyValueStorage,
    flag_key: String,
    password: String,
}

impl<'a> SessionGate<'a> {
    pub fn new(session: &'a dyn KeyValueStorage, config: &AppConfig) -> Self {
        Self {
            session,
            flag_key: config.storage.admin_session_flag.clone(),
            password: config.admin.password.clone(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.session.get_item(&self.flag_key), Ok(Some(v)) if v == FLAG_VALUE)
    }

    /// Exact match sets the flag; anything else clears it.
    pub fn login(&self, password: &str) -> Result<(), AuthError> {
        if password == self.password {
            if let Err(e) = self.session.set_item(&self.flag_key, FLAG_VALUE) {
                log::warn!("Admin session flag not stored: {}", e);
            }
            log::info!("Admin login successful");
            Ok(())
        } else {
            self.clear_flag();
            log::warn!("Admin login failed");
            Err(AuthError::IncorrectPassword)
        }
    }

    pub fn logout(&self) {
        self.clear_flag();
        log::info!("Admin logged out");
    }

    fn clear_flag(&self) {
        if let Err(e) = self.session.remove_item(&self.flag_key) {
            log::warn!("Admin session flag not cleared: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_wrong_password_clears_flag() {
        let session = MemoryStorage::new();
        let config = AppConfig::default();
        let gate = SessionGate::new(&session, &config);

        gate.login("admin123").unwrap();
        assert!(gate.is_logged_in());

        let err = gate.login("Admin123").unwrap_err();
        assert_eq!(err.to_string(), "Incorrect password.");
        assert!(!gate.is_logged_in());
        assert_eq!(session.get_item("isAdminLoggedIn").unwrap(), None);
    }

    #[test]
    fn test_flag_must_be_exactly_true() {
        let session = MemoryStorage::new();
        let config = AppConfig::default();
        let gate = SessionGate::new(&session, &config);
        session.set_item("isAdminLoggedIn", "yes").unwrap();
        assert!(!gate.is_logged_in());
        session.set_item("isAdminLoggedIn", "true").unwrap();
        assert!(gate.is_logged_in());
        gate.logout();
        assert!(!gate.is_logged_in());
    }
}
