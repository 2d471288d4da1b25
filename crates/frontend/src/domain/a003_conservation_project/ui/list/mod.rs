use contracts::domain::a003_conservation_project::aggregate::{ConservationProject, ProjectStatus};
use contracts::shared::list_query::run_query;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, SearchBox};
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::format::{format_budget, status_badge_class};
use crate::shared::list_utils::{distinct_options, ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Sum of the budgets shown, for the header line.
fn total_budget(projects: &[ConservationProject]) -> f64 {
    projects.iter().map(|p| p.budget).sum()
}

#[component]
pub fn ConservationProjectList() -> impl IntoView {
    let records = Records::<ConservationProject>::load("/api/conservation-projects");
    // Few projects: one page, sorted by start date.
    let controls = RwSignal::new(ListControls::new("startDate", true, 0));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<ConservationProject>())))
    });
    let species = Memo::new(move |_| records.items.with(|items| distinct_options(items, |p| p.species.clone())));
    let statuses: Vec<(String, String)> = ProjectStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <PageFrame entity="a003_conservation_project" category=PAGE_CAT_LIST title="Conservation">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Conservation"</h1>
                    <span class="page__subtitle">
                        {move || page.with(|p| format!("Total budget: {}", format_budget(total_budget(&p.items))))}
                    </span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="conservation-projects" controls=controls />
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search projects..." />
                    <FilterSelect controls=controls field="status" all_label="All Statuses" options=statuses />
                    <FilterSelect controls=controls field="species" all_label="All Species" options=species />
                </div>

                {move || records.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Project" sort_field="name" controls=controls min_width=200.0 />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Start" sort_field="startDate" controls=controls />
                                <SortableHeaderCell label="End" sort_field="endDate" controls=controls />
                                <SortableHeaderCell label="Budget" sort_field="budget" controls=controls />
                                <TableHeaderCell>"Lead"</TableHeaderCell>
                                <TableHeaderCell>"Species"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|project| project.id.clone()
                                children=move |project: ConservationProject| {
                                    let status = project.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div>
                                                        <div>{project.name.clone()}</div>
                                                        <div class="text-muted">{project.location.clone()}</div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{project.start_date.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{project.end_date.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_budget(project.budget)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{project.lead.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{project.species.clone()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                        <div class="table__empty">"No conservation projects found."</div>
                    </Show>
                </div>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("projects"))}</span>
                </div>
            </div>
        </PageFrame>
    }
}
