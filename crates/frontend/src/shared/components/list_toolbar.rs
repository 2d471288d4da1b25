//! Controls above a registry table. All of them write into the page's
//! [`ListControls`] signal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::export::{alert, download_export, ExportFormat};
use crate::shared::icons::icon;
use crate::shared::list_utils::ListControls;

#[component]
pub fn SearchBox(controls: RwSignal<ListControls>, placeholder: &'static str) -> impl IntoView {
    let query = RwSignal::new(controls.with_untracked(|c| c.search.clone()));
    Effect::new(move |_| {
        let value = query.get();
        controls.update(|c| c.set_search(&value));
    });

    view! {
        <div class="list-toolbar__search">
            {icon("search")}
            <Input value=query placeholder=placeholder />
        </div>
    }
}

/// Select over one categorical field. The first option is the "all"
/// sentinel.
#[component]
pub fn FilterSelect(
    controls: RwSignal<ListControls>,
    field: &'static str,
    all_label: &'static str,
    /// `(value, label)`
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <select
            class="form-select list-toolbar__select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                controls.update(|c| c.set_filter(field, &value));
            }
            prop:value=move || controls.with(|c| c.filter(field).to_string())
        >
            <option value="all">{all_label}</option>
            {move || options.get().into_iter().map(|(value, label)| {
                let selected_value = value.clone();
                view! {
                    <option
                        value=value
                        selected=move || controls.with(|c| c.filter(field) == selected_value)
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Tab strip over one categorical field; the first tab is usually the
/// `all` sentinel.
#[component]
pub fn FilterTabs(
    controls: RwSignal<ListControls>,
    field: &'static str,
    /// `(value, label)`
    #[prop(into)]
    tabs: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs">
            {move || tabs.get().into_iter().map(|(value, label)| {
                let value_for_class = value.clone();
                view! {
                    <button
                        class="filter-tabs__tab"
                        class:filter-tabs__tab--active=move || {
                            controls.with(|c| c.filter(field) == value_for_class)
                        }
                        on:click=move |_| controls.update(|c| c.set_filter(field, &value))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Select over named sort presets or fields.
#[component]
pub fn SortSelect(
    controls: RwSignal<ListControls>,
    /// `(key, label)`
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <select
            class="form-select list-toolbar__select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                controls.update(|c| c.set_sort(&value));
            }
            prop:value=move || controls.with(|c| c.sort.clone())
        >
            {options.into_iter().map(|(key, label)| {
                view! { <option value=key>{label}</option> }
            }).collect_view()}
        </select>
    }
}

/// CSV and JSON export of what the table currently selects.
#[component]
pub fn ExportButtons(entity: &'static str, controls: RwSignal<ListControls>) -> impl IntoView {
    let busy = RwSignal::new(false);

    let run = move |format: ExportFormat| {
        let snapshot = controls.get_untracked();
        busy.set(true);
        spawn_local(async move {
            if let Err(e) = download_export(entity, &snapshot, format).await {
                log::warn!("export of {} failed: {}", entity, e);
                alert(&e);
            }
            busy.set(false);
        });
    };

    view! {
        <div class="list-toolbar__export">
            {[ExportFormat::Csv, ExportFormat::Json].into_iter().map(|format| {
                view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| run(format)
                        disabled=Signal::derive(move || busy.get())
                    >
                        {icon("download")}
                        {format!(" {}", format.label())}
                    </Button>
                }
            }).collect_view()}
        </div>
    }
}
