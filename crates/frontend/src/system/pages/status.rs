//! Small full-page and in-shell views that carry no data.

use contracts::system::routes::{Page, HOME_PATH, LOGIN_PATH};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STATUS;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    view! {
        <div class="status-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(HOME_PATH)>
                "Back to dashboard"
            </Button>
        </div>
    }
}

/// Shown while a login attempt is in flight or a redirect is pending.
#[component]
pub fn PendingPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <Spinner />
            <span class="text-muted">"Loading..."</span>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Wildlife Park"</h1>
                <h2>"Request access"</h2>
                <p>
                    "Accounts are issued by park administration. Ask your department head to \
                     register a @kws.go.ke address for you."
                </p>
                <button class="btn-primary" on:click=move |_| ctx.navigate(LOGIN_PATH)>
                    "Back to sign in"
                </button>
            </div>
        </div>
    }
}

/// Signed in, but the role does not include this page.
#[component]
pub fn ForbiddenPage(page: Page) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    view! {
        <PageFrame entity="forbidden" category=PAGE_CAT_STATUS title=page.title()>
            <div class="status-page">
                {icon("lock")}
                <h2>"Access restricted"</h2>
                <p>{format!("{} is available to administrators only.", page.title())}</p>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(HOME_PATH)>
                    "Back to dashboard"
                </Button>
            </div>
        </PageFrame>
    }
}

/// Menu pages that do not list any records yet.
#[component]
pub fn PlaceholderPage(page: Page) -> impl IntoView {
    view! {
        <PageFrame entity=page.path().trim_start_matches('/').to_string() category=PAGE_CAT_STATUS title=page.title()>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{page.title()}</h1>
                </div>
            </div>
            <Card>
                <p class="text-muted">{format!("{} will appear here.", page.title())}</p>
            </Card>
        </PageFrame>
    }
}
