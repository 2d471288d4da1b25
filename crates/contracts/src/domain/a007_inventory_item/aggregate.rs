use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, SortSpec, Sortable};
use crate::shared::validation::{FieldError, Validator};

/// Category filter options, `(value, label)`. Values compare
/// case-insensitively with the stored category.
pub const INVENTORY_CATEGORIES: &[(&str, &str)] = &[
    ("medications", "Medications"),
    ("supplies", "Supplies"),
    ("vaccines", "Vaccines"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn all() -> &'static [StockStatus] {
        &[StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Used when a new item arrives without an explicit status.
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Veterinary stock item (medication, vaccine, consumable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    /// `YYYY-MM-DD`
    pub expiry_date: String,
    pub supplier: String,
    pub location: String,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: String,
    pub supplier: String,
    pub location: String,
    #[serde(default)]
    pub status: Option<StockStatus>,
}

impl InventoryItemDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("name", &self.name, "Name")
            .required("category", &self.category, "Category")
            .required("unit", &self.unit, "Unit")
            .check(
                NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d").is_ok(),
                "expiryDate",
                "An expiry date is required.",
            )
            .required("supplier", &self.supplier, "Supplier")
            .required("location", &self.location, "Location");
        v.finish()
    }
}

impl InventoryItem {
    pub fn new_for_insert(dto: InventoryItemDto) -> Self {
        let status = dto.status.unwrap_or_else(|| StockStatus::for_quantity(dto.quantity));
        Self {
            id: String::new(),
            name: dto.name,
            category: dto.category,
            quantity: dto.quantity,
            unit: dto.unit,
            expiry_date: dto.expiry_date,
            supplier: dto.supplier,
            location: dto.location,
            status,
        }
    }

    pub fn update(&mut self, dto: InventoryItemDto) {
        let id = std::mem::take(&mut self.id);
        *self = Self::new_for_insert(dto);
        self.id = id;
    }

    /// "50 tablets"
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.quantity, self.unit)
    }
}

impl Record for InventoryItem {
    const ENTITY: &'static str = "inventory";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = format!("MED{sequence:03}");
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str(), self.supplier.as_str()]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "status" => Some(self.status.as_str().to_string()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }
}

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "expiryDate" => self.expiry_date.cmp(&other.expiry_date),
            _ => Ordering::Equal,
        }
    }

    fn sort_preset(key: &str) -> Option<SortSpec> {
        match key {
            "expiring" => Some(SortSpec::asc("expiryDate")),
            "scarce" => Some(SortSpec::asc("quantity")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{run_query, ListQuery};

    fn item(id: &str, name: &str, category: &str, quantity: u32, supplier: &str) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: "units".into(),
            expiry_date: "2025-01-01".into(),
            supplier: supplier.into(),
            location: "Storage Room A".into(),
            status: StockStatus::for_quantity(quantity),
        }
    }

    fn stock() -> Vec<InventoryItem> {
        vec![
            item("MED001", "Antibiotics", "Medications", 50, "PharmaCorp"),
            item("MED003", "Bandages", "Supplies", 200, "FirstAid Inc"),
            item("MED004", "Vaccines", "Vaccines", 30, "VaxPharm"),
            item("MED005", "Surgical Gloves", "Supplies", 500, "SafetyFirst"),
        ]
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let page = run_query(&stock(), &ListQuery::new().with_filter("category", "supplies"));
        let ids: Vec<_> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["MED003", "MED005"]);
    }

    #[test]
    fn test_all_category_turns_filter_off() {
        let page = run_query(&stock(), &ListQuery::new().with_filter("category", "all"));
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_search_covers_name_id_and_supplier() {
        let data = stock();
        assert_eq!(run_query(&data, &ListQuery::new().with_search("pharm")).total_count, 2);
        assert_eq!(run_query(&data, &ListQuery::new().with_search("med005")).items[0].name, "Surgical Gloves");
        // location is not searched
        assert_eq!(run_query(&data, &ListQuery::new().with_search("storage")).total_count, 0);

        let page = run_query(
            &data,
            &ListQuery::new().with_search("vax").with_filter("category", "medications"),
        );
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_scarce_first() {
        let sort = crate::shared::list_query::resolve_sort::<InventoryItem>("scarce", None).unwrap();
        let page = run_query(&stock(), &ListQuery::new().sorted_by(sort));
        assert_eq!(page.items[0].id, "MED004");
    }

    #[test]
    fn test_insert_defaults_status_from_quantity() {
        let mut empty = InventoryItem::new_for_insert(InventoryItemDto {
            name: "Syringes".into(),
            category: "Supplies".into(),
            quantity: 0,
            unit: "boxes".into(),
            expiry_date: "2026-02-01".into(),
            supplier: "MediSupply".into(),
            location: "Storage Room B".into(),
            status: None,
        });
        empty.assign_id(6);
        assert_eq!(empty.id, "MED006");
        assert_eq!(empty.status, StockStatus::OutOfStock);
        assert_eq!(empty.quantity_label(), "0 boxes");

        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["status"], "out-of-stock");
        assert_eq!(json["expiryDate"], "2026-02-01");
    }

    #[test]
    fn test_validation() {
        let errors = InventoryItemDto {
            name: "Antibiotics".into(),
            category: "Medications".into(),
            expiry_date: "31/12/2024".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["unit", "expiryDate", "supplier", "location"]);
    }
}
