use contracts::domain::a005_staff_member::aggregate::{Department, StaffMember, StaffStatus, ON_LEAVE_HOURS};
use contracts::shared::list_query::{run_query, SENTINEL_ALL};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, FilterTabs, SearchBox, SortSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::status_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PAGE_SIZE: usize = 6;

/// Days of the weekly schedule with working hours.
fn working_days(member: &StaffMember) -> usize {
    member
        .schedule
        .iter()
        .filter(|e| e.hours != ON_LEAVE_HOURS && !e.hours.eq_ignore_ascii_case("off"))
        .count()
}

#[component]
fn StaffCard(member: StaffMember) -> impl IntoView {
    let status = member.status.label();
    let days = working_days(&member);
    view! {
        <Card attr:class="staff-card">
            <div class="staff-card__header">
                <div class="staff-card__avatar">{member.initials()}</div>
                <div>
                    <div class="staff-card__name">{member.name.clone()}</div>
                    <div class="text-muted">{member.role.clone()}</div>
                </div>
                <span class=status_badge_class(status)>{status}</span>
            </div>
            <div class="staff-card__body">
                <div>{icon("users")} " " {member.department.label()}</div>
                <div>{icon("map")} " " {member.location.clone()}</div>
                <div>{icon("calendar")} " " {format!("Since {} · {} working day(s) a week", member.start_date, days)}</div>
                <div class="text-muted">{member.contact_email.clone()} " · " {member.contact_phone.clone()}</div>
            </div>
        </Card>
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let records = Records::<StaffMember>::load("/api/staff");
    let controls = RwSignal::new(ListControls::new("name", true, PAGE_SIZE));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<StaffMember>())))
    });

    let departments: Vec<(String, String)> = Department::all()
        .iter()
        .map(|d| (d.as_str().to_string(), d.label().to_string()))
        .collect();
    let status_tabs: Vec<(String, String)> = std::iter::once((SENTINEL_ALL.to_string(), "All Staff".to_string()))
        .chain(
            [StaffStatus::Active, StaffStatus::Leave]
                .iter()
                .map(|s| (s.as_str().to_string(), s.label().to_string())),
        )
        .collect();

    view! {
        <PageFrame entity="a005_staff_member" category=PAGE_CAT_LIST title="Staff">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Staff"</h1>
                    <span class="page__subtitle">
                        {move || {
                            let shown = page.with(|p| p.total_count);
                            let all = records.items.with(|items| items.len());
                            format!("Showing {} of {} staff members", shown, all)
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="staff" controls=controls />
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search staff..." />
                    <FilterSelect controls=controls field="department" all_label="All Departments" options=departments />
                    <SortSelect
                        controls=controls
                        options=vec![("name", "Name"), ("role", "Role"), ("department", "Department")]
                    />
                </div>

                <FilterTabs controls=controls field="status" tabs=status_tabs />

                {move || records.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="card-grid">
                    <For
                        each=move || page.get().items
                        key=|member| member.id
                        children=move |member: StaffMember| view! { <StaffCard member=member /> }
                    />
                </div>
                <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                    <div class="table__empty">"No staff members match the current filters."</div>
                </Show>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("staff members"))}</span>
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
