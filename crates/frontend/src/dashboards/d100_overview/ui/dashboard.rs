use contracts::domain::a001_animal::aggregate::{Animal, ENDANGERED_VIEW};
use contracts::domain::a002_health_check::aggregate::HealthCheck;
use contracts::domain::a003_conservation_project::aggregate::ConservationProject;
use contracts::domain::a004_ticket::aggregate::Ticket;
use contracts::domain::a005_staff_member::aggregate::StaffMember;
use contracts::domain::a006_report::aggregate::{report_type_label, Report};
use contracts::shared::list_query::ListPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

use crate::dashboards::d100_overview::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::get_json;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

const RECENT_REPORTS: &str = "/api/reports?sort=latest&page_size=3";

/// Count fetched once on mount. Stays `None` on failure so the card keeps
/// its placeholder.
fn load_count<T: DeserializeOwned + 'static>(path: &'static str, filter: Option<(&'static str, &'static str)>) -> RwSignal<Option<usize>> {
    let value = RwSignal::new(None);
    spawn_local(async move {
        match api::count::<T>(path, filter).await {
            Ok(n) => value.set(Some(n)),
            Err(e) => log::error!("Failed to load count for {}: {}", path, e),
        }
    });
    value
}

/// Landing page: headline counts and the latest reports.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (session, _) = use_auth();
    let is_admin = move || session.with(|s| s.is_admin());
    let greeting = move || {
        session.with(|s| {
            s.user()
                .map(|u| format!("Welcome back, {}", u.display_name))
                .unwrap_or_else(|| "Welcome".to_string())
        })
    };

    let animals = load_count::<Animal>("/api/animals", None);
    let endangered = load_count::<Animal>("/api/animals", Some(("status", ENDANGERED_VIEW)));
    let upcoming_checks = load_count::<HealthCheck>("/api/health-checks", Some(("status", "scheduled")));
    let active_projects = load_count::<ConservationProject>("/api/conservation-projects", Some(("status", "active")));
    let active_tickets = load_count::<Ticket>("/api/tickets", Some(("status", "active")));
    let staff_on_duty = load_count::<StaffMember>("/api/staff", Some(("status", "active")));

    let recent = RwSignal::new(Vec::<Report>::new());
    spawn_local(async move {
        match get_json::<ListPage<Report>>(RECENT_REPORTS).await {
            Ok(page) => recent.set(page.items),
            Err(e) => log::error!("Failed to load recent reports: {}", e),
        }
    });

    let endangered_subtitle = Signal::derive(move || {
        match (endangered.get(), animals.get()) {
            (Some(e), Some(total)) if total > 0 => Some(format!("{}% of the registry", e * 100 / total)),
            _ => None,
        }
    });

    view! {
        <PageFrame entity="d100_overview" category=PAGE_CAT_DASHBOARD title="Dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">{greeting}</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Animals" icon_name="paw" value=animals />
                    <StatCard label="Endangered" icon_name="alert-triangle" value=endangered subtitle=endangered_subtitle />
                    <StatCard label="Upcoming Health Checks" icon_name="heart-pulse" value=upcoming_checks />
                    <StatCard label="Active Projects" icon_name="globe" value=active_projects />
                    <StatCard label="Active Tickets" icon_name="ticket" value=active_tickets />
                    <Show when=is_admin>
                        <StatCard label="Staff On Duty" icon_name="users" value=staff_on_duty />
                    </Show>
                </div>

                <Card attr:class="dashboard-panel">
                    <div class="dashboard-panel__header">
                        <span>{icon("file-text")} " Recent Reports"</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| ctx.navigate("/reports")
                        >
                            "View all"
                        </Button>
                    </div>
                    <Show
                        when=move || recent.with(|r| !r.is_empty())
                        fallback=|| view! { <div class="text-muted">"No reports yet."</div> }
                    >
                        <ul class="dashboard-panel__list">
                            <For
                                each=move || recent.get()
                                key=|r| r.id.clone()
                                children=move |r: Report| view! {
                                    <li>
                                        <span>{r.title.clone()}</span>
                                        <span class="text-muted">
                                            {format!(" · {} · {}", report_type_label(&r.report_type), r.date)}
                                        </span>
                                    </li>
                                }
                            />
                        </ul>
                    </Show>
                </Card>
            </div>
        </PageFrame>
    }
}
