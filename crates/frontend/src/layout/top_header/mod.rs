//! Top bar: sidebar toggle, today's date, alerts shortcut, the signed-in
//! user and logout.

use contracts::system::routes::LOGIN_PATH;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// "Saturday, October 18, 2026" in the browser's locale.
fn today_label() -> String {
    let options = js_sys::Object::new();
    for (key, value) in [("weekday", "long"), ("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    js_sys::Date::new_0()
        .to_locale_date_string("en-US", &options)
        .into()
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (session, set_session) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        ctx.navigate(LOGIN_PATH);
        do_logout(set_session);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let display_name = move || {
        session.with(|s| s.user().map(|u| u.display_name.clone()).unwrap_or_default())
    };
    let role_label = move || {
        session.with(|s| s.role().map(|r| r.as_str().to_string()).unwrap_or_default())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__date">
                    {icon("calendar")}
                    {today_label()}
                </span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Alerts"
                    on:click=move |_| ctx.navigate("/alerts")
                >
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{display_name}</span>
                    <span class="top-header__role">{role_label}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
