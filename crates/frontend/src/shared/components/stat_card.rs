use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// One headline number on the dashboard. `None` while loading.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<usize>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Card attr:class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__icon">{icon(icon_name)}</span>
            </div>
            <div class="stat-card__value">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "…".to_string())}
            </div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </Card>
    }
}
