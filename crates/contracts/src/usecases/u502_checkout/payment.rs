use super::order::CheckoutSession;
use crate::enums::PaymentMethod;
use crate::shared::validation::{is_present, is_valid_phone, FieldErrors};

pub const EMPTY_CART_INSTRUCTION: &str = "Your cart is empty.";
pub const EMPTY_CART_SUMMARY: &str = "No items in your order. Please go back to the order page.";

/// Phone and name form shown under the selected payment method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentForm {
    pub phone: String,
    pub full_name: String,
}

impl PaymentForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            is_valid_phone(&self.phone),
            "phone",
            "Valid phone number is required (at least 10 digits).",
        );
        errors.check(is_present(&self.full_name), "full_name", "Full name is required.");
        if !errors.is_empty() {
            errors.set_banner("Please correct the errors above.");
        }
        errors.into_result()
    }
}

/// Validate the payment form against the session and record the chosen
/// method. Returns the "processing" message shown before the redirect.
pub fn submit_payment(
    session: &mut CheckoutSession,
    method: PaymentMethod,
    form: &PaymentForm,
) -> Result<String, FieldErrors> {
    form.validate()?;
    if !session.has_items() {
        let mut errors = FieldErrors::new();
        errors.set_banner("Your cart is empty. Cannot proceed.");
        return Err(errors);
    }

    session.payment_method = Some(method.display_name().to_string());
    log::info!("Simulating {} payment...", method.display_name());
    Ok(format!("Processing {} payment... Please wait.", method.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_checkout::order::CartLine;

    fn session_with_item() -> CheckoutSession {
        CheckoutSession {
            cart: vec![CartLine {
                product_id: "prod001".to_string(),
                name: "Fresh Apples (Kg)".to_string(),
                quantity: 3,
                unit_price: 2.99,
            }],
            ..CheckoutSession::default()
        }
    }

    #[test]
    fn test_phone_and_name_rules() {
        let form = PaymentForm { phone: "09123".to_string(), full_name: " ".to_string() };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some("Valid phone number is required (at least 10 digits).")
        );
        assert_eq!(errors.get("full_name"), Some("Full name is required."));
        assert_eq!(errors.banner(), Some("Please correct the errors above."));

        let form = PaymentForm { phone: "0912 345 678".to_string(), full_name: "A".to_string() };
        assert!(form.validate().unwrap_err().is_invalid("phone"));
    }

    #[test]
    fn test_empty_cart_blocks_valid_form() {
        let mut session = CheckoutSession::default();
        let form = PaymentForm { phone: "0912345678".to_string(), full_name: "Abebe".to_string() };
        let errors = submit_payment(&mut session, PaymentMethod::TeleBirr, &form).unwrap_err();
        assert_eq!(errors.banner(), Some("Your cart is empty. Cannot proceed."));
        assert!(session.payment_method.is_none());
    }

    #[test]
    fn test_successful_payment_records_method() {
        let mut session = session_with_item();
        let form = PaymentForm { phone: "0912345678".to_string(), full_name: "Abebe".to_string() };
        let message = submit_payment(&mut session, PaymentMethod::CbeBirr, &form).unwrap();
        assert_eq!(message, "Processing CBEBirr payment... Please wait.");
        assert_eq!(session.payment_method.as_deref(), Some("CBEBirr"));
    }
}
