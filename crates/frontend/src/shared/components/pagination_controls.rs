use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page buttons shown around the current page.
const WINDOW: usize = 5;

/// Up to `span` consecutive page numbers containing `current`, kept inside
/// `1..=total`.
fn page_window(current: usize, total: usize, span: usize) -> Vec<usize> {
    let total = total.max(1);
    let span = span.clamp(1, total);
    let current = current.clamp(1, total);
    let start = current
        .saturating_sub(span / 2)
        .max(1)
        .min(total + 1 - span);
    (start..start + span).collect()
}

/// Numbered page strip with previous / next arrows. Pages are 1-based;
/// nothing is rendered for a single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        let total = total_pages.get_untracked().max(1);
        if (1..=total).contains(&page) && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__arrow"
                    title="Previous page"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let current = current_page.get();
                    page_window(current, total_pages.get(), WINDOW)
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=page == current
                                on:click=move |_| go(page)
                            >
                                {page}
                            </button>
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__arrow"
                    title="Next page"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| go(current_page.get_untracked() + 1)
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_centred_when_possible() {
        assert_eq!(page_window(6, 20, 5), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_window_sticks_to_the_edges() {
        assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_short_and_out_of_range() {
        assert_eq!(page_window(2, 2, 5), vec![1, 2]);
        assert_eq!(page_window(0, 0, 5), vec![1]);
        assert_eq!(page_window(9, 3, 5), vec![1, 2, 3]);
    }
}
