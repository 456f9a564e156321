//! Field validators shared by every form.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10,}$").expect("phone pattern compiles"));

/// Non-empty after trimming whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `local@domain.tld`: no whitespace anywhere, one `@`, a dot after it.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// At least ten digits and nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

/// Integer quantity; `None` when the text is not an integer.
pub fn parse_quantity(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn is_non_negative_quantity(value: &str) -> bool {
    matches!(parse_quantity(value), Some(q) if q >= 0)
}

pub fn is_positive_quantity(value: &str) -> bool {
    matches!(parse_quantity(value), Some(q) if q > 0)
}

/// Declarative per-field pattern (e.g. postal codes). The pattern is
/// anchored on both ends before compiling.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    message: String,
}

impl PatternRule {
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{})$", pattern))?,
            message: message.into(),
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value.trim())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Field-local messages plus an optional aggregate banner.
///
/// Only the first message recorded for a field is kept, so a "required"
/// message is not overwritten by a format message for the same field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    fields: Vec<(String, String)>,
    banner: Option<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.fields.push((field.to_string(), message.into()));
        }
    }

    /// Record `message` on `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    /// Sets the banner only if none was set yet.
    pub fn default_banner(&mut self, message: &str) {
        if self.banner.is_none() {
            self.banner = Some(message.to_string());
        }
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.banner, self.fields.first()) {
            (Some(banner), _) => write!(f, "{}", banner),
            (None, Some((field, message))) => write!(f, "{}: {}", field, message),
            (None, None) => write!(f, "no errors"),
        }
    }
}
