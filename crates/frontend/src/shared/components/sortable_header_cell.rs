use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::ListControls;

/// Table header that sorts by `sort_field` on click and shows ▲ / ▼ / ⇅.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    sort_field: &'static str,

    controls: RwSignal<ListControls>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| controls.update(|c| c.toggle_sort(sort_field))
            >
                {label}
                <span class="table__sort-indicator">
                    {move || controls.with(|c| c.sort_indicator(sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
