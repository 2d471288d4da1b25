//! Sidebar built from the role-filtered navigation table.

use contracts::system::navigation::{visible_sections, VisibleSection};
use contracts::system::routes::normalize;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (session, _) = use_auth();

    // Sections open by default; a click on the heading folds one away.
    let collapsed = RwSignal::new(Vec::<String>::new());

    let sections = Memo::new(move |_| visible_sections(session.with(|s| s.role())));

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("paw")}
                <span>"Wildlife Park"</span>
            </div>
            <For
                each=move || sections.get()
                key=|section| section.title.clone()
                children=move |section: VisibleSection| {
                    let title = section.title.clone();
                    let title_for_click = title.clone();
                    let title_for_show = title.clone();
                    let is_open = move || !collapsed.get().contains(&title_for_show);

                    view! {
                        <div class="app-sidebar__section">
                            <div
                                class="app-sidebar__section-title"
                                on:click=move |_| {
                                    let t = title_for_click.clone();
                                    collapsed.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &t) {
                                            items.remove(pos);
                                        } else {
                                            items.push(t);
                                        }
                                    });
                                }
                            >
                                {title}
                            </div>
                            <Show when=is_open>
                                <div class="app-sidebar__children">
                                    {section.items.clone().into_iter().map(|item| {
                                        let href = StoredValue::new(item.href.clone());
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    href.with_value(|h| normalize(&ctx.path()) == h.as_str())
                                                }
                                                on:click=move |_| ctx.navigate(&href.get_value())
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(&item.icon)}
                                                    <span>{item.label.clone()}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
