use contracts::domain::a001_animal::aggregate::{Animal, AnimalStatus, ANIMALS_PAGE_SIZE, ENDANGERED_VIEW};
use contracts::shared::list_query::{run_query, SENTINEL_ALL};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, FilterTabs, SearchBox};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::format::status_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{distinct_options, ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_tabs() -> Vec<(String, String)> {
    let mut tabs = vec![
        (SENTINEL_ALL.to_string(), "All Animals".to_string()),
        (ENDANGERED_VIEW.to_string(), "Endangered".to_string()),
    ];
    tabs.extend(
        AnimalStatus::all()
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string())),
    );
    tabs
}

#[component]
pub fn AnimalList() -> impl IntoView {
    let records = Records::<Animal>::load("/api/animals");
    let controls = RwSignal::new(ListControls::new("", true, ANIMALS_PAGE_SIZE));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<Animal>())))
    });
    let species = Memo::new(move |_| records.items.with(|items| distinct_options(items, |a| a.species.clone())));

    view! {
        <PageFrame entity="a001_animal" category=PAGE_CAT_LIST title="Animals">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Animals"</h1>
                    <span class="page__subtitle">"Registry of animals in the park"</span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="animals" controls=controls />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| records.reload()
                        disabled=Signal::derive(move || records.loading.get())
                    >
                        {icon("refresh")}
                        {move || if records.loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search animals..." />
                    <FilterSelect controls=controls field="species" all_label="All Species" options=species />
                </div>

                <FilterTabs controls=controls field="status" tabs=status_tabs() />

                {move || records.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id" controls=controls min_width=80.0 />
                                <SortableHeaderCell label="Name" sort_field="name" controls=controls />
                                <SortableHeaderCell label="Species" sort_field="species" controls=controls min_width=140.0 />
                                <TableHeaderCell>"Age"</TableHeaderCell>
                                <TableHeaderCell>"Gender"</TableHeaderCell>
                                <SortableHeaderCell label="Location" sort_field="location" controls=controls min_width=140.0 />
                                <SortableHeaderCell label="Status" sort_field="status" controls=controls />
                                <SortableHeaderCell label="Joined" sort_field="joinDate" controls=controls />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|animal| animal.id.clone()
                                children=move |animal: Animal| {
                                    let status = animal.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{animal.id.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {animal.name.clone()}
                                                    {animal.endangered.then(|| view! {
                                                        <span class="badge badge--error" title="Endangered">"E"</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{animal.species.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{animal.age.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{animal.gender.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{animal.location.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{animal.join_date.clone()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                        <div class="table__empty">"No animals match the current filters."</div>
                    </Show>
                </div>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("animals"))}</span>
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
