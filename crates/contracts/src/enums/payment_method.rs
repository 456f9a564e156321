use serde::{Deserialize, Serialize};

/// Mobile-money methods offered on the payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    TeleBirr,
    CbeBirr,
}

impl PaymentMethod {
    /// Code of the method selector button
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::TeleBirr => "telebirr",
            PaymentMethod::CbeBirr => "cbebirr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::TeleBirr => "TeleBirr",
            PaymentMethod::CbeBirr => "CBEBirr",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::TeleBirr, PaymentMethod::CbeBirr]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "telebirr" => Some(PaymentMethod::TeleBirr),
            "cbebirr" => Some(PaymentMethod::CbeBirr),
            _ => None,
        }
    }
}
