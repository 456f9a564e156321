use serde::{Deserialize, Serialize};

use crate::domain::a004_product::aggregate::{catalogue, find_product};
use crate::shared::validation::{is_present, is_valid_email, parse_quantity, FieldErrors, PatternRule};

const REQUIRED: &str = "This field is required.";

/// One selected catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartLine {
    /// e.g. "Fresh Milk (1L) (x2)"
    pub fn summary_label(&self) -> String {
        format!("{} (x{})", self.name, self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// Everything the order page hands to the payment and confirmation pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub customer: CustomerDetails,
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl CheckoutSession {
    pub fn has_items(&self) -> bool {
        !self.cart.is_empty()
    }
}

/// Customer order form. Quantities are keyed by product id and kept as
/// typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub quantities: Vec<(String, String)>,
}

impl OrderForm {
    /// Empty form with one quantity slot per catalogue product.
    pub fn new() -> Self {
        Self {
            quantities: catalogue()
                .iter()
                .map(|p| (p.id.to_string(), "0".to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn quantity_of(&self, product_id: &str) -> &str {
        self.quantities
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, qty)| qty.as_str())
            .unwrap_or("")
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: &str) {
        match self.quantities.iter_mut().find(|(id, _)| id == product_id) {
            Some((_, qty)) => *qty = quantity.to_string(),
            None => self
                .quantities
                .push((product_id.to_string(), quantity.to_string())),
        }
    }

    /// Catalogue products with a positive quantity, in form order.
    /// Unknown product ids are ignored.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.quantities
            .iter()
            .filter_map(|(id, qty)| {
                let quantity = parse_quantity(qty).filter(|q| *q > 0)?;
                let product = find_product(id)?;
                Some(CartLine {
                    product_id: product.id.to_string(),
                    name: product.name.to_string(),
                    quantity: u32::try_from(quantity).ok()?,
                    unit_price: product.price,
                })
            })
            .collect()
    }

    pub fn validate(&self, zip_rule: &PatternRule) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = [
            ("customer_name", &self.customer_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("zip", &self.zip),
        ];
        for (field, value) in required {
            errors.check(is_present(value), field, REQUIRED);
        }

        let email = self.email.trim();
        if !email.is_empty() {
            errors.check(is_valid_email(email), "email", "Please enter a valid email address.");
        }
        if is_present(&self.zip) {
            errors.check(zip_rule.matches(&self.zip), "zip", zip_rule.message());
        }

        if self.cart_lines().is_empty() {
            errors.set_banner("Please select at least one product.");
        }
        if !errors.is_empty() {
            errors.default_banner("Please fix the errors above.");
        }
        errors.into_result()
    }

    /// Validate and build the hand-off for the payment page.
    pub fn submit(&self, zip_rule: &PatternRule) -> Result<CheckoutSession, FieldErrors> {
        self.validate(zip_rule)?;
        let session = CheckoutSession {
            customer: CustomerDetails {
                name: self.customer_name.trim().to_string(),
                email: self.email.trim().to_string(),
                address: self.address.trim().to_string(),
                city: self.city.trim().to_string(),
                zip: self.zip.trim().to_string(),
            },
            cart: self.cart_lines(),
            payment_method: None,
        };
        log::info!("Order form is valid, proceeding to payment ({} line(s))", session.cart.len());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn zip_rule() -> PatternRule {
        let config = AppConfig::default();
        PatternRule::new(&config.checkout.zip_pattern, config.checkout.zip_message).unwrap()
    }

    fn filled() -> OrderForm {
        let mut form = OrderForm::new();
        form.customer_name = "Abebe Kebede".to_string();
        form.email = "abebe@example.com".to_string();
        form.address = "Bole Road 12".to_string();
        form.city = "Addis Ababa".to_string();
        form.zip = "1000".to_string();
        form
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = OrderForm::new().validate(&zip_rule()).unwrap_err();
        for field in ["customer_name", "email", "address", "city", "zip"] {
            assert_eq!(errors.get(field), Some("This field is required."));
        }
        assert_eq!(errors.banner(), Some("Please select at least one product."));
    }

    #[test]
    fn test_format_errors_and_generic_banner() {
        let mut form = filled();
        form.set_quantity("prod002", "2");
        form.email = "abebe@example".to_string();
        form.zip = "12".to_string();
        let errors = form.validate(&zip_rule()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address."));
        assert_eq!(errors.get("zip"), Some("Please enter a valid ZIP code."));
        assert_eq!(errors.banner(), Some("Please fix the errors above."));
    }

    #[test]
    fn test_only_missing_products() {
        let mut form = filled();
        form.set_quantity("prod001", "-1");
        let errors = form.validate(&zip_rule()).unwrap_err();
        assert_eq!(errors.fields().count(), 0);
        assert_eq!(errors.banner(), Some("Please select at least one product."));
    }

    #[test]
    fn test_submit_builds_session() {
        let mut form = filled();
        form.set_quantity("prod002", "2");
        form.set_quantity("prod007", "1");
        form.set_quantity("prod999", "4");
        let session = form.submit(&zip_rule()).unwrap();
        let labels: Vec<String> = session.cart.iter().map(CartLine::summary_label).collect();
        assert_eq!(labels, vec!["Fresh Milk (1L) (x2)", "Potato Chips (150g) (x1)"]);
        assert_eq!(session.customer.city, "Addis Ababa");
        assert!(session.payment_method.is_none());
        assert_eq!(form.quantity_of("prod003"), "0");
    }
}
