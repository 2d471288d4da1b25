use contracts::domain::a002_health_check::aggregate::{HealthCheck, HealthCheckStatus};
use contracts::shared::list_query::run_query;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_inventory_item::ui::list::InventoryPanel;
use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, SearchBox, SortSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::format::status_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{distinct_options, ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PAGE_SIZE: usize = 10;

#[component]
pub fn HealthCheckList() -> impl IntoView {
    let records = Records::<HealthCheck>::load("/api/health-checks");
    let controls = RwSignal::new(ListControls::new("upcoming", true, PAGE_SIZE));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<HealthCheck>())))
    });
    let check_types = Memo::new(move |_| records.items.with(|items| distinct_options(items, |h| h.check_type.clone())));
    let statuses: Vec<(String, String)> = HealthCheckStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let show_inventory = RwSignal::new(false);

    view! {
        <PageFrame entity="a002_health_check" category=PAGE_CAT_LIST title="Health Tracking">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Health Tracking"</h1>
                    <span class="page__subtitle">"Scheduled and completed veterinary checks"</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| show_inventory.update(|open| *open = !*open)
                    >
                        {icon("clipboard-list")}
                        {move || if show_inventory.get() { " Hide inventory" } else { " Inventory" }}
                    </Button>
                    <ExportButtons entity="health-checks" controls=controls />
                </div>
            </div>

            <div class="page__content">
                <Show when=move || show_inventory.get()>
                    <InventoryPanel />
                </Show>

                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search by animal, vet or type..." />
                    <FilterSelect controls=controls field="status" all_label="All Statuses" options=statuses />
                    <FilterSelect controls=controls field="type" all_label="All Types" options=check_types />
                    <SortSelect
                        controls=controls
                        options=vec![("upcoming", "Upcoming first"), ("recent", "Most recent first"), ("animalName", "Animal name")]
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
                                <SortableHeaderCell label="Animal" sort_field="animalName" controls=controls min_width=160.0 />
                                <SortableHeaderCell label="Date" sort_field="date" controls=controls />
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <SortableHeaderCell label="Veterinarian" sort_field="veterinarian" controls=controls min_width=160.0 />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|check| check.id.clone()
                                children=move |check: HealthCheck| {
                                    let status = check.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{check.id.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {format!("{} ({})", check.animal_name, check.animal_id)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} {}", check.date, check.time)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{check.check_type.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{check.veterinarian.clone()}</TableCellLayout></TableCell>
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
                        <div class="table__empty">"No health checks found."</div>
                    </Show>
                </div>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("health checks"))}</span>
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        on_page_change=Callback::new(move |p| controls.update(|c| c.page = p))
                    />
                </div>
            </div>
        </PageFrame>
    }
}
