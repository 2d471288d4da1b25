use contracts::domain::a007_inventory_item::aggregate::{InventoryItem, StockStatus, INVENTORY_CATEGORIES};
use contracts::shared::list_query::run_query;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, SearchBox, SortSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::format::status_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListControls, Records};

const PAGE_SIZE: usize = 10;

fn category_options() -> Vec<(String, String)> {
    INVENTORY_CATEGORIES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}

fn stock_options() -> Vec<(String, String)> {
    StockStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

/// Veterinary stock table shown on the health tracking page.
#[component]
pub fn InventoryPanel() -> impl IntoView {
    let records = Records::<InventoryItem>::load("/api/inventory");
    let controls = RwSignal::new(ListControls::new("id", true, PAGE_SIZE));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<InventoryItem>())))
    });

    view! {
        <Card attr:class="inventory-panel">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">{icon("clipboard-list")} " Inventory"</h2>
                    <span class="page__subtitle">"Medications, vaccines and supplies"</span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="inventory" controls=controls />
                </div>
            </div>

            <div class="list-toolbar">
                <SearchBox controls=controls placeholder="Search inventory..." />
                <FilterSelect controls=controls field="category" all_label="All Categories" options=category_options() />
                <FilterSelect controls=controls field="status" all_label="All Stock Levels" options=stock_options() />
                <SortSelect
                    controls=controls
                    options=vec![("id", "ID"), ("expiring", "Expiring first"), ("scarce", "Lowest quantity")]
                />
            </div>

            {move || records.error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="ID" sort_field="id" controls=controls min_width=80.0 />
                            <SortableHeaderCell label="Name" sort_field="name" controls=controls min_width=160.0 />
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <SortableHeaderCell label="Quantity" sort_field="quantity" controls=controls />
                            <SortableHeaderCell label="Expiry Date" sort_field="expiryDate" controls=controls />
                            <TableHeaderCell>"Supplier"</TableHeaderCell>
                            <TableHeaderCell>"Location"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().items
                            key=|item| item.id.clone()
                            children=move |item: InventoryItem| {
                                let status = item.status.label();
                                let quantity = item.quantity_label();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{item.id.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{item.name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{item.category.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{item.expiry_date.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{item.supplier.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{item.location.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_badge_class(status)>{status}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                    <div class="table__empty">"No inventory items found with the selected filters."</div>
                </Show>
            </div>

            <div class="list-footer">
                <span class="list-footer__label">{move || page.with(|p| p.showing_label("items"))}</span>
                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    on_page_change=Callback::new(move |p| controls.update(|c| c.page = p))
                />
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> InventoryItem {
        InventoryItem {
            id: id.into(),
            name: "Antibiotics".into(),
            category: category.into(),
            quantity: 50,
            unit: "tablets".into(),
            expiry_date: "2024-12-31".into(),
            supplier: "PharmaCorp".into(),
            location: "Storage Room A".into(),
            status: StockStatus::InStock,
        }
    }

    #[test]
    fn test_category_select_drives_the_query() {
        let items = vec![item("MED001", "Medications"), item("MED003", "Supplies")];
        let mut controls = ListControls::new("id", true, PAGE_SIZE);

        let (value, _) = &category_options()[1];
        controls.set_filter("category", value);
        let page = run_query(&items, &controls.to_query::<InventoryItem>());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "MED003");

        controls.set_filter("category", "all");
        let page = run_query(&items, &controls.to_query::<InventoryItem>());
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_stock_options() {
        let values: Vec<String> = stock_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["in-stock", "low-stock", "out-of-stock"]);
    }
}
