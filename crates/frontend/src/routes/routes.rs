use contracts::system::routes::{resolve, Page, RouteDecision};
use leptos::prelude::*;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_animal::ui::list::AnimalList;
use crate::domain::a002_health_check::ui::list::HealthCheckList;
use crate::domain::a003_conservation_project::ui::list::ConservationProjectList;
use crate::domain::a004_ticket::ui::list::TicketList;
use crate::domain::a005_staff_member::ui::list::StaffList;
use crate::domain::a006_report::ui::list::ReportList;
use crate::layout::global_context::{redirect_location, AppGlobalContext};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::status::{ForbiddenPage, NotFoundPage, PendingPage, PlaceholderPage, SignupPage};

/// Which top-level surface is on screen. Changes far less often than the
/// page itself, so the shell survives moving between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Login,
    Signup,
    NotFound,
    Pending,
    Shell,
}

fn surface_for(decision: &RouteDecision) -> Surface {
    match decision {
        RouteDecision::Render(Page::Login) => Surface::Login,
        RouteDecision::Render(Page::Signup) => Surface::Signup,
        RouteDecision::Render(Page::NotFound) => Surface::NotFound,
        RouteDecision::Render(_) | RouteDecision::Forbidden(_) => Surface::Shell,
        RouteDecision::Pending | RouteDecision::Redirect { .. } => Surface::Pending,
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (session, _) = use_auth();

    let decision = Memo::new(move |_| {
        let path = ctx.path();
        session.with(|s| resolve(&path, s))
    });

    Effect::new(move |_| {
        if let RouteDecision::Redirect { to, from } = decision.get() {
            ctx.replace(&redirect_location(&to, from.as_deref()));
        }
    });

    let surface = Memo::new(move |_| decision.with(surface_for));

    move || match surface.get() {
        Surface::Login => view! { <LoginPage /> }.into_any(),
        Surface::Signup => view! { <SignupPage /> }.into_any(),
        Surface::NotFound => view! { <NotFoundPage /> }.into_any(),
        Surface::Pending => view! { <PendingPage /> }.into_any(),
        Surface::Shell => view! {
            <Shell>
                {move || match decision.get() {
                    RouteDecision::Forbidden(page) => view! { <ForbiddenPage page=page /> }.into_any(),
                    RouteDecision::Render(page) => page_view(page),
                    _ => ().into_any(),
                }}
            </Shell>
        }
        .into_any(),
    }
}

/// Content of a page inside the shell.
fn page_view(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Animals => view! { <AnimalList /> }.into_any(),
        Page::Health => view! { <HealthCheckList /> }.into_any(),
        Page::Conservation => view! { <ConservationProjectList /> }.into_any(),
        Page::Tickets => view! { <TicketList /> }.into_any(),
        Page::Staff => view! { <StaffList /> }.into_any(),
        Page::Reports => view! { <ReportList /> }.into_any(),
        other => view! { <PlaceholderPage page=other /> }.into_any(),
    }
}
