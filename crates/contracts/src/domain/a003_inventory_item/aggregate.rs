use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::common::Record;
use crate::shared::modal::{EditContext, FormModel, ModalTexts};
use crate::shared::search::Searchable;
use crate::shared::table::{or_dash, or_na, ColumnDef, Tabular};
use crate::shared::validation::{is_non_negative_quantity, parse_quantity, FieldErrors};

/// Stock line keyed by item name (case-insensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default, deserialize_with = "clamped_stock")]
    pub stock: u32,
    /// ISO date (YYYY-MM-DD)
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
}

/// Negative or oversized stored stock is clamped into `u32`.
fn clamped_stock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() || raw <= 0.0 {
        Ok(0)
    } else if raw >= u32::MAX as f64 {
        Ok(u32::MAX)
    } else {
        Ok(raw.trunc() as u32)
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl InventoryItem {
    pub fn new(name: &str, stock: u32, today: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            stock,
            last_updated: iso(today),
        }
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }

    pub fn add_stock(&mut self, quantity: u32, today: NaiveDate) {
        self.stock = self.stock.saturating_add(quantity);
        self.last_updated = iso(today);
    }

    /// Clamped at zero.
    pub fn remove_stock(&mut self, quantity: u32, today: NaiveDate) {
        self.stock = self.stock.saturating_sub(quantity);
        self.last_updated = iso(today);
    }

    pub fn set_stock(&mut self, stock: u32, today: NaiveDate) {
        self.stock = stock;
        self.last_updated = iso(today);
    }
}

impl Record for InventoryItem {
    const KIND: &'static str = "inventory item";

    fn record_id(&self) -> &str {
        &self.name
    }

    fn has_id(&self, id: &str) -> bool {
        self.name.to_lowercase() == id.to_lowercase()
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "name", title: "Item Name" },
    ColumnDef { key: "stock", title: "Current Stock" },
    ColumnDef { key: "last_updated", title: "Last Updated" },
    ColumnDef { key: "actions", title: "Actions" },
];

impl Tabular for InventoryItem {
    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn empty_message() -> &'static str {
        "No inventory items found matching your criteria."
    }

    fn row_key(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            or_na(&self.name),
            self.stock.to_string(),
            or_dash(&self.last_updated),
        ]
    }

    /// Name ascending, ignoring case; exact name breaks ties.
    fn sort_for_display(records: &mut Vec<&Self>) {
        records.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}

// ============================================================================
// Stock modal (edit only)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockForm {
    /// Item shown in the dialog header; not editable
    pub item_name: String,
    pub stock: String,
}

static TEXTS: ModalTexts = ModalTexts {
    add_title: "Update Stock",
    edit_title: "Update Stock",
    added: "Stock updated successfully!",
    updated: "Stock updated successfully!",
    not_found: "Error: Item not found.",
    invalid: "Please enter a valid non-negative stock quantity.",
};

impl StockForm {
    fn stock_value(&self) -> u32 {
        parse_quantity(&self.stock)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or_default()
    }
}

impl FormModel for StockForm {
    type Record = InventoryItem;

    fn texts() -> &'static ModalTexts {
        &TEXTS
    }

    fn from_record(record: &InventoryItem) -> Self {
        Self {
            item_name: record.name.clone(),
            stock: record.stock.to_string(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let in_range = parse_quantity(&self.stock)
            .map(|q| u32::try_from(q).is_ok())
            .unwrap_or(false);
        errors.check(
            is_non_negative_quantity(&self.stock) && in_range,
            "stock",
            "Please enter a valid non-negative stock quantity.",
        );
        errors.into_result()
    }

    fn create(&self, _ctx: &mut EditContext<'_>) -> Option<InventoryItem> {
        None
    }

    fn apply(&self, record: &mut InventoryItem, ctx: &mut EditContext<'_>) {
        record.set_stock(self.stock_value(), ctx.today);
    }
}

// ============================================================================
// Seed data
// ============================================================================

pub fn sample_inventory() -> Vec<InventoryItem> {
    let item = |name: &str, stock, last_updated: &str| InventoryItem {
        name: name.to_string(),
        stock,
        last_updated: last_updated.to_string(),
    };
    vec![
        item("Apples", 150, "2024-05-21"),
        item("Milk", 75, "2024-05-20"),
        item("Rice", 500, "2024-05-18"),
        item("Potato Chips", 120, "2024-05-15"),
        item("Bananas", 45, "2024-05-21"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordCollection;
    use crate::shared::id::ClockIds;
    use crate::shared::modal::{ModalEditor, SubmitError};
    use crate::shared::search::search;
    use crate::shared::storage::MemoryStorage;
    use crate::shared::table::{render_rows, TableRow};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let mut items = sample_inventory();
        items.push(InventoryItem::new("apricots", 3, today()));
        let keys: Vec<String> = render_rows(&items)
            .iter()
            .filter_map(|row| row.key().map(str::to_string))
            .collect();
        assert_eq!(keys, vec!["Apples", "apricots", "Bananas", "Milk", "Potato Chips", "Rice"]);
    }

    #[test]
    fn test_empty_search_renders_placeholder() {
        let rows = render_rows(&search(&sample_inventory(), "caviar"));
        assert_eq!(
            rows,
            vec![TableRow::Placeholder {
                colspan: 4,
                message: "No inventory items found matching your criteria.".to_string()
            }]
        );
    }

    #[test]
    fn test_negative_stored_stock_is_clamped() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"name":"Oats","stock":-20,"lastUpdated":"2024-01-01"}"#).unwrap();
        assert_eq!(item.stock, 0);
        let item: InventoryItem = serde_json::from_str(r#"{"name":"Oats","stock":12}"#).unwrap();
        assert_eq!(item.stock, 12);
        assert_eq!(item.last_updated, "");
    }

    #[test]
    fn test_name_matches_case_insensitively() {
        let items = RecordCollection::in_memory("inv", sample_inventory());
        assert!(items.contains("APPLES"));
        assert!(items.get("potato chips").is_some());
        assert!(!items.contains("Pears"));
    }

    #[test]
    fn test_stock_modal_updates_stock_and_date() {
        let storage = MemoryStorage::new();
        let mut items =
            RecordCollection::load(&storage, "swiftGoodsInventory", "swiftGoodsInventory.rev", sample_inventory());
        let mut ids = ClockIds::new(0, 0);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<StockForm>::new();

        let bananas = items.get("Bananas").unwrap().clone();
        assert!(bananas.is_low_stock(50));
        modal.open_edit(&bananas);
        assert_eq!(modal.form.stock, "45");

        modal.form.stock = "-3".to_string();
        assert!(matches!(
            modal.submit(&mut items, &storage, &mut ctx),
            Err(SubmitError::Invalid(_))
        ));
        assert_eq!(
            modal.feedback().map(|f| f.message.as_str()),
            Some("Please enter a valid non-negative stock quantity.")
        );

        modal.form.stock = "80".to_string();
        modal.submit(&mut items, &storage, &mut ctx).unwrap();
        let bananas = items.get("Bananas").unwrap();
        assert_eq!(bananas.stock, 80);
        assert_eq!(bananas.last_updated, "2024-06-01");
        assert!(!bananas.is_low_stock(50));
    }

    #[test]
    fn test_stock_modal_cannot_add() {
        let storage = MemoryStorage::new();
        let mut items = RecordCollection::in_memory("inv", sample_inventory());
        let mut ids = ClockIds::new(0, 0);
        let mut ctx = EditContext { today: today(), ids: &mut ids };
        let mut modal = ModalEditor::<StockForm>::new();
        modal.open_add();
        modal.form.stock = "4".to_string();
        assert_eq!(
            modal.submit(&mut items, &storage, &mut ctx),
            Err(SubmitError::AddUnsupported)
        );
    }

    #[test]
    fn test_remove_stock_clamps() {
        let mut item = InventoryItem::new("Rice", 10, today());
        item.remove_stock(15, today());
        assert_eq!(item.stock, 0);
        item.add_stock(7, today());
        assert_eq!(item.stock, 7);
    }
}
