use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::enums::{OrderStatus, StatusFilter};
use crate::shared::search::{filter_records, Searchable};
use crate::shared::table::{or_na, ColumnDef, Tabular};
use crate::shared::validation::{is_positive_quantity, is_present, parse_quantity, FieldErrors};

pub const ID_PREFIX: &str = "PO";

// ============================================================================
// Record
// ============================================================================

/// Procurement order. `supplier` is a free-text name, not a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    #[serde(default)]
    pub supplier: String,
    /// ISO date (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub quantity: u32,
    pub status: OrderStatus,
}

impl PurchaseOrder {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Record for PurchaseOrder {
    const KIND: &'static str = "order";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Searchable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.id, &self.supplier, &self.item]
    }
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "id", title: "Order ID" },
    ColumnDef { key: "supplier", title: "Supplier" },
    ColumnDef { key: "date", title: "Date" },
    ColumnDef { key: "item", title: "Item" },
    ColumnDef { key: "quantity", title: "Quantity" },
    ColumnDef { key: "status", title: "Status" },
    ColumnDef { key: "actions", title: "Actions" },
];

impl Tabular for PurchaseOrder {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn empty_message() -> &'static str {
        "No orders found matching your criteria."
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            or_na(&self.supplier),
            or_na(&self.date),
            or_na(&self.item),
            self.quantity.to_string(),
            self.status.code().to_string(),
        ]
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Search box plus status select of the orders table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub term: String,
    pub status: StatusFilter,
}

impl OrderFilter {
    pub fn apply(&self, orders: &[PurchaseOrder]) -> Vec<PurchaseOrder> {
        filter_records(orders, &self.term, |o| self.status.accepts(o.status))
    }
}

// ============================================================================
// Add-order form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrderForm {
    pub supplier: String,
    pub item: String,
    pub quantity: String,
    pub date: String,
}

impl NewOrderForm {
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_present(&self.supplier), "supplier", "Select a supplier.");
        errors.check(is_present(&self.item), "item", "Item is required.");
        let in_range = parse_quantity(&self.quantity)
            .map(|q| u32::try_from(q).is_ok())
            .unwrap_or(false);
        errors.check(
            is_positive_quantity(&self.quantity) && in_range,
            "quantity",
            "Quantity must be greater than zero.",
        );
        errors.check(
            NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_ok(),
            "date",
            "Date is required.",
        );
        if !errors.is_empty() {
            errors.set_banner("Please fill all fields correctly.");
        }
        errors.into_result()
    }

    /// Pending order built from a validated form.
    pub fn into_order(self, id: String) -> Result<PurchaseOrder, FieldErrors> {
        self.validate()?;
        let quantity = parse_quantity(&self.quantity)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or_default();
        Ok(PurchaseOrder {
            id,
            supplier: self.supplier.trim().to_string(),
            date: self.date.trim().to_string(),
            item: self.item.trim().to_string(),
            quantity,
            status: OrderStatus::Pending,
        })
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn sample_orders() -> Vec<PurchaseOrder> {
    let order = |id: &str, supplier: &str, date: &str, item: &str, quantity, status| PurchaseOrder {
        id: id.to_string(),
        supplier: supplier.to_string(),
        date: date.to_string(),
        item: item.to_string(),
        quantity,
        status,
    };
    vec![
        order("PO001", "FreshFarm Co.", "2024-05-20", "Apples", 100, OrderStatus::Delivered),
        order("PO002", "DairyBest Ltd.", "2024-05-22", "Milk", 50, OrderStatus::Approved),
        order("PO003", "GrainCorp", "2024-05-25", "Rice", 200, OrderStatus::Pending),
    ]
}
