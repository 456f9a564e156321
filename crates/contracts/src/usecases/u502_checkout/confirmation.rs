use super::order::CheckoutSession;

pub const PLACEHOLDER_NAME: &str = "[Customer Name]";
pub const PLACEHOLDER_EMAIL: &str = "[Customer Email]";
pub const PLACEHOLDER_ADDRESS: &str = "[Shipping Address]";
pub const PLACEHOLDER_PAYMENT: &str = "[Payment Method]";

/// Values for the confirmation page; `None` keeps the placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmationDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub payment_method: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Address, then city on a new line, then zip after ", " when a city is
/// present or on its own line otherwise.
pub fn format_address(address: &str, city: &str, zip: &str) -> String {
    let mut full = String::new();
    if !address.is_empty() {
        full.push_str(address);
    }
    if !city.is_empty() {
        if !full.is_empty() {
            full.push('\n');
        }
        full.push_str(city);
    }
    if !zip.is_empty() {
        if !full.is_empty() {
            full.push_str(if city.is_empty() { "\n" } else { ", " });
        }
        full.push_str(zip);
    }
    full
}

impl ConfirmationDetails {
    pub fn from_session(session: Option<&CheckoutSession>) -> Self {
        let Some(session) = session else {
            log::warn!("No checkout session for confirmation page");
            return Self::default();
        };
        let customer = &session.customer;
        Self {
            name: non_empty(&customer.name),
            email: non_empty(&customer.email),
            address: non_empty(&format_address(
                customer.address.trim(),
                customer.city.trim(),
                customer.zip.trim(),
            )),
            payment_method: session.payment_method.as_deref().and_then(non_empty),
        }
    }

    /// Whether the generic "details will appear here" note can be hidden.
    pub fn populated(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.payment_method.is_some()
    }

    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER_NAME)
    }

    pub fn email_or_placeholder(&self) -> &str {
        self.email.as_deref().unwrap_or(PLACEHOLDER_EMAIL)
    }

    pub fn address_or_placeholder(&self) -> &str {
        self.address.as_deref().unwrap_or(PLACEHOLDER_ADDRESS)
    }

    pub fn payment_or_placeholder(&self) -> &str {
        self.payment_method.as_deref().unwrap_or(PLACEHOLDER_PAYMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_checkout::order::CustomerDetails;

    #[test]
    fn test_address_joining() {
        assert_eq!(format_address("Bole Rd", "Addis", "1000"), "Bole Rd\nAddis, 1000");
        assert_eq!(format_address("Bole Rd", "", "1000"), "Bole Rd\n1000");
        assert_eq!(format_address("", "Addis", "1000"), "Addis, 1000");
        assert_eq!(format_address("", "", "1000"), "1000");
        assert_eq!(format_address("", "", ""), "");
    }

    #[test]
    fn test_missing_session_keeps_placeholders() {
        let details = ConfirmationDetails::from_session(None);
        assert!(!details.populated());
        assert_eq!(details.name_or_placeholder(), PLACEHOLDER_NAME);
        assert_eq!(details.payment_or_placeholder(), PLACEHOLDER_PAYMENT);
    }

    #[test]
    fn test_partial_session() {
        let session = CheckoutSession {
            customer: CustomerDetails {
                name: "Abebe".to_string(),
                city: "Addis".to_string(),
                ..CustomerDetails::default()
            },
            cart: vec![],
            payment_method: Some("TeleBirr".to_string()),
        };
        let details = ConfirmationDetails::from_session(Some(&session));
        assert!(details.populated());
        assert_eq!(details.name_or_placeholder(), "Abebe");
        assert_eq!(details.email_or_placeholder(), PLACEHOLDER_EMAIL);
        assert_eq!(details.address_or_placeholder(), "Addis");
        assert_eq!(details.payment_or_placeholder(), "TeleBirr");
    }
}
