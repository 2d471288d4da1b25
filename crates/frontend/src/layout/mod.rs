pub mod global_context;
pub mod left;
pub mod top_header;

use contracts::system::navigation::breadcrumb;
use contracts::system::routes::normalize;
use leptos::prelude::*;

use global_context::AppGlobalContext;
use top_header::TopHeader;

/// Signed-in frame: header on top, sidebar on the left, the routed page
/// under a "Section / Page" crumb.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let crumb = move || {
        let path = ctx.path();
        breadcrumb(normalize(&path)).map(|(section, label)| {
            view! {
                <div class="app-main__crumb">
                    <span class="text-muted">{section}</span>
                    " / "
                    <span>{label}</span>
                </div>
            }
        })
    };

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body" class:app-body--wide=move || !ctx.left_open.get()>
                <left::Left>
                    <left::sidebar::Sidebar />
                </left::Left>
                <main class="app-main">
                    {crumb}
                    <div class="app-main__content">{children()}</div>
                </main>
            </div>
        </div>
    }
}
