use contracts::domain::a006_report::aggregate::{
    report_type_label, Report, ReportDto, ReportStatus, ReportTemplate, REPORT_TYPES,
};
use contracts::shared::list_query::run_query;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::{get_json, post_json};
use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, SearchBox, SortSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::export::alert;
use crate::shared::format::status_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PAGE_SIZE: usize = 10;

fn type_options() -> Vec<(String, String)> {
    REPORT_TYPES
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    [ReportStatus::Draft, ReportStatus::Published, ReportStatus::Scheduled]
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

/// Newly generated reports go to the top of the list.
fn add_report(items: &mut Vec<Report>, created: Report) {
    items.retain(|r| r.id != created.id);
    items.insert(0, created);
}

/// Swaps the stored copy of a report for the server's updated one.
fn replace_report(items: &mut [Report], updated: Report) {
    if let Some(slot) = items.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated;
    }
}

/// Template cards; "Use" files a draft report prefilled from the template.
#[component]
fn TemplateStrip(on_created: Callback<Report>) -> impl IntoView {
    let templates = RwSignal::new(Vec::<ReportTemplate>::new());
    let busy = RwSignal::new(false);
    spawn_local(async move {
        match get_json::<Vec<ReportTemplate>>("/api/report-templates").await {
            Ok(list) => templates.set(list),
            Err(e) => log::warn!("Failed to load report templates: {}", e),
        }
    });

    let generate = move |template: ReportTemplate| {
        let dto = ReportDto::from_template(&template, chrono::Local::now().date_naive());
        busy.set(true);
        spawn_local(async move {
            match post_json::<ReportDto, Report>("/api/reports", &dto).await {
                Ok(report) => {
                    log::info!("Generated {} from {}", report.id, template.id);
                    on_created.run(report);
                }
                Err(e) => {
                    log::error!("Report generation failed: {}", e);
                    alert(&e);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || templates.with(|t| !t.is_empty())>
            <div class="template-strip">
                <For
                    each=move || templates.get()
                    key=|t| t.id.clone()
                    children=move |t: ReportTemplate| {
                        let template = t.clone();
                        view! {
                            <Card attr:class="template-card">
                                <div class="template-card__name">
                                    {icon("file-text")} " " {t.name.clone()}
                                    {t.is_default.then(|| view! { <span class="badge badge--primary">"Default"</span> })}
                                </div>
                                <div class="text-muted">{report_type_label(&t.template_type).to_string()}</div>
                                <div class="template-card__description">{t.description.clone()}</div>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    disabled=Signal::derive(move || busy.get())
                                    on_click=move |_| generate(template.clone())
                                >
                                    "Use template"
                                </Button>
                            </Card>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ReportList() -> impl IntoView {
    let records = Records::<Report>::load("/api/reports");
    let controls = RwSignal::new(ListControls::new("latest", true, PAGE_SIZE));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<Report>())))
    });

    let download = move |id: String| {
        spawn_local(async move {
            let path = format!("/api/reports/{}/download", id);
            match post_json::<serde_json::Value, Report>(&path, &serde_json::Value::Null).await {
                Ok(updated) => records.items.update(|items| replace_report(items, updated)),
                Err(e) => {
                    log::error!("Report download failed: {}", e);
                    alert(&e);
                }
            }
        });
    };

    view! {
        <PageFrame entity="a006_report" category=PAGE_CAT_LIST title="Reports">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reports"</h1>
                    <span class="page__subtitle">"Published, draft and scheduled park reports"</span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="reports" controls=controls />
                </div>
            </div>

            <div class="page__content">
                <TemplateStrip on_created=Callback::new(move |report: Report| {
                    records.items.update(|items| add_report(items, report))
                }) />

                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search reports..." />
                    <FilterSelect controls=controls field="type" all_label="All Types" options=type_options() />
                    <FilterSelect controls=controls field="status" all_label="All Statuses" options=status_options() />
                    <SortSelect
                        controls=controls
                        options=vec![("latest", "Latest"), ("popular", "Most viewed"), ("title", "Title")]
                    />
                </div>

                {move || records.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Title" sort_field="title" controls=controls min_width=220.0 />
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <SortableHeaderCell label="Date" sort_field="date" controls=controls />
                                <TableHeaderCell>"Author"</TableHeaderCell>
                                <SortableHeaderCell label="Views" sort_field="views" controls=controls min_width=80.0 />
                                <SortableHeaderCell label="Downloads" sort_field="downloads" controls=controls min_width=80.0 />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                // Keyed on the counter too so a download re-renders the row.
                                key=|report| (report.id.clone(), report.downloads)
                                children=move |report: Report| {
                                    let status = report.status.label();
                                    let id = report.id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div>
                                                        <div>{report.title.clone()}</div>
                                                        <div class="text-muted">{report.id.clone()}</div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{report_type_label(&report.report_type).to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{report.date.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{report.author.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{report.views}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{report.downloads}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| download(id.clone())
                                                >
                                                    {icon("download")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                        <div class="table__empty">"No reports found."</div>
                    </Show>
                </div>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("reports"))}</span>
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

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, downloads: u32) -> Report {
        Report {
            id: id.into(),
            title: "Quarterly Health".into(),
            description: String::new(),
            report_type: "health".into(),
            date: "2025-03-01".into(),
            author: "Dr. Sarah Johnson".into(),
            views: 10,
            downloads,
            status: ReportStatus::Published,
        }
    }

    #[test]
    fn test_replace_report_updates_matching_id_only() {
        let mut items = vec![report("R-2025-001", 1), report("R-2025-002", 4)];
        replace_report(&mut items, report("R-2025-002", 5));
        assert_eq!(items[0].downloads, 1);
        assert_eq!(items[1].downloads, 5);

        replace_report(&mut items, report("R-2025-999", 9));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_generated_report_goes_first() {
        let mut items = vec![report("RPT-2025-001", 1), report("RPT-2025-002", 4)];
        add_report(&mut items, report("RPT-2025-010", 0));
        let ids: Vec<_> = items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT-2025-010", "RPT-2025-001", "RPT-2025-002"]);

        add_report(&mut items, report("RPT-2025-010", 0));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_filter_options_cover_all_codes() {
        assert_eq!(type_options().len(), REPORT_TYPES.len());
        let statuses: Vec<String> = status_options().into_iter().map(|(v, _)| v).collect();
        assert_eq!(statuses, vec!["draft", "published", "scheduled"]);
    }
}
