use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::modal::{EditContext, FormModel, ModalTexts};
use crate::shared::search::Searchable;
use crate::shared::table::{or_dash, or_na, ColumnDef, Tabular};
use crate::shared::validation::{is_present, is_valid_email, FieldErrors};

pub const ID_PREFIX: &str = "S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-text, comma separated
    #[serde(default)]
    pub products: String,
}

impl Record for Supplier {
    const KIND: &'static str = "supplier";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn normalize(&mut self) {
        if self.phone.as_deref().map(str::trim) == Some("") {
            self.phone = None;
        }
    }
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.products, &self.email]
    }
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "name", title: "Name" },
    ColumnDef { key: "email", title: "Email" },
    ColumnDef { key: "phone", title: "Phone" },
    ColumnDef { key: "products", title: "Products" },
    ColumnDef { key: "actions", title: "Actions" },
];

impl Tabular for Supplier {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn empty_message() -> &'static str {
        "No suppliers found matching your criteria."
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            or_na(&self.name),
            or_dash(&self.email),
            or_dash(self.phone.as_deref().unwrap_or_default()),
            or_dash(&self.products),
        ]
    }
}

/// Names offered by the add-order supplier select, in collection order.
pub fn supplier_names(suppliers: &[Supplier]) -> Vec<String> {
    suppliers.iter().map(|s| s.name.clone()).collect()
}

// ============================================================================
// Modal form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub products: String,
}

static TEXTS: ModalTexts = ModalTexts {
    add_title: "Add New Supplier",
    edit_title: "Edit Supplier",
    added: "Supplier added successfully!",
    updated: "Supplier updated successfully!",
    not_found: "Error: Supplier not found for update.",
    invalid: "Please correct the supplier details.",
};

impl SupplierForm {
    fn phone_value(&self) -> Option<String> {
        let phone = self.phone.trim();
        if phone.is_empty() {
            None
        } else {
            Some(phone.to_string())
        }
    }
}

impl FormModel for SupplierForm {
    type Record = Supplier;

    fn texts() -> &'static ModalTexts {
        &TEXTS
    }

    fn from_record(record: &Supplier) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            products: record.products.clone(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_present(&self.name), "name", "Name is required.");
        errors.check(is_present(&self.email), "email", "Email is required.");
        if !errors.is_empty() {
            errors.set_banner("Supplier Name and Email are required.");
            return errors.into_result();
        }
        errors.check(
            is_valid_email(self.email.trim()),
            "email",
            "Please enter a valid email address.",
        );
        if !errors.is_empty() {
            errors.set_banner("Please enter a valid email address.");
        }
        errors.into_result()
    }

    fn create(&self, ctx: &mut EditContext<'_>) -> Option<Supplier> {
        Some(Supplier {
            id: ctx.ids.next_id(ID_PREFIX),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone_value(),
            products: self.products.trim().to_string(),
        })
    }

    fn apply(&self, record: &mut Supplier, _ctx: &mut EditContext<'_>) {
        record.name = self.name.trim().to_string();
        record.email = self.email.trim().to_string();
        record.phone = self.phone_value();
        record.products = self.products.trim().to_string();
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn sample_suppliers() -> Vec<Supplier> {
    let supplier = |id: &str, name: &str, email: &str, phone: &str, products: &str| Supplier {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        products: products.to_string(),
    };
    vec![
        supplier("S01", "FreshFarm Co.", "sales@freshfarm.com", "111-222-3333", "Apples, Bananas, Vegetables"),
        supplier("S02", "DairyBest Ltd.", "orders@dairybest.net", "444-555-6666", "Milk, Cheese, Yogurt"),
        supplier("S03", "GrainCorp", "info@graincorp.org", "777-888-9999", "Rice, Flour, Oats"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{RecordCollection, SaveOutcome};
    use crate::shared::id::ClockIds;
    use crate::shared::modal::{Feedback, ModalEditor, ModalMode, SubmitError};
    use crate::shared::search::search;
    use crate::shared::storage::MemoryStorage;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn collection(storage: &MemoryStorage) -> RecordCollection<Supplier> {
        RecordCollection::load(storage, "swiftGoodsSuppliers", "swiftGoodsSuppliers.rev", sample_suppliers())
    }

    #[test]
    fn test_search_fields() {
        let suppliers = sample_suppliers();
        assert_eq!(search(&suppliers, "yogurt")[0].id, "S02");
        assert_eq!(search(&suppliers, "GRAINCORP.ORG")[0].id, "S03");
        assert!(search(&suppliers, "777").is_empty());
    }

    #[test]
    fn test_add_flow() {
        let storage = MemoryStorage::new();
        let mut suppliers = collection(&storage);
        let mut ids = ClockIds::new(1_716_200_123_456, 5);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<SupplierForm>::new();

        modal.open_add();
        assert_eq!(modal.mode(), &ModalMode::Add);
        assert_eq!(modal.title(), "Add New Supplier");

        modal.form.name = "Oasis Water".to_string();
        let err = modal.submit(&mut suppliers, &storage, &mut ctx).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(
            modal.feedback(),
            Some(&Feedback::error("Supplier Name and Email are required."))
        );
        assert!(modal.is_open());

        modal.form.email = "water@oasis".to_string();
        modal.submit(&mut suppliers, &storage, &mut ctx).unwrap_err();
        assert_eq!(
            modal.feedback().map(|f| f.message.as_str()),
            Some("Please enter a valid email address.")
        );

        modal.form.email = "water@oasis.et".to_string();
        let done = modal.submit(&mut suppliers, &storage, &mut ctx).unwrap();
        assert!(done.created);
        assert_eq!(done.id, "S1234565");
        assert_eq!(done.outcome, SaveOutcome::Saved { revision: 1 });
        assert_eq!(modal.feedback(), Some(&Feedback::success("Supplier added successfully!")));
        assert_eq!(suppliers.get("S1234565").unwrap().phone, None);

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_edit_merges_by_id_and_persists() {
        let storage = MemoryStorage::new();
        let mut suppliers = collection(&storage);
        let mut ids = ClockIds::new(0, 0);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<SupplierForm>::new();

        let record = suppliers.get("S02").unwrap().clone();
        modal.open_edit(&record);
        assert_eq!(modal.title(), "Edit Supplier");
        assert_eq!(modal.form.phone, "444-555-6666");

        modal.form.phone = "   ".to_string();
        modal.form.products = "Milk".to_string();
        let done = modal.submit(&mut suppliers, &storage, &mut ctx).unwrap();
        assert!(!done.created);

        let reloaded = collection(&storage);
        let s02 = reloaded.get("S02").unwrap();
        assert_eq!(s02.products, "Milk");
        assert_eq!(s02.phone, None);
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_edit_of_vanished_record() {
        let storage = MemoryStorage::new();
        let mut suppliers = collection(&storage);
        let mut ids = ClockIds::new(0, 0);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<SupplierForm>::new();

        let record = suppliers.get("S01").unwrap().clone();
        modal.open_edit(&record);
        suppliers.remove("S01").unwrap();
        let err = modal.submit(&mut suppliers, &storage, &mut ctx).unwrap_err();
        assert_eq!(err, SubmitError::NotFound { id: "S01".to_string() });
        assert_eq!(
            modal.feedback().map(|f| f.message.as_str()),
            Some("Error: Supplier not found for update.")
        );
    }

    #[test]
    fn test_reopen_clears_previous_messages() {
        let storage = MemoryStorage::new();
        let mut suppliers = collection(&storage);
        let mut ids = ClockIds::new(0, 0);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<SupplierForm>::new();

        modal.open_add();
        modal.submit(&mut suppliers, &storage, &mut ctx).unwrap_err();
        assert!(modal.errors().is_invalid("name"));

        modal.open_add();
        assert!(modal.errors().is_empty());
        assert!(modal.feedback().is_none());
        assert_eq!(modal.form, SupplierForm::default());
    }

    #[test]
    fn test_blank_phone_stored_as_absent() {
        let mut supplier: Supplier =
            serde_json::from_str(r#"{"id":"S9","name":"X","email":"x@y.z","phone":"","products":""}"#).unwrap();
        supplier.normalize();
        assert_eq!(supplier.phone, None);
        assert_eq!(supplier.cells()[2], "-");
        let json = serde_json::to_value(&supplier).unwrap();
        assert!(json.get("phone").is_none());
    }
}
