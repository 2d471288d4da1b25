//! Root wrapper of every page inside the shell. Gives the page a stable
//! `id` (`"{entity}--{category}"`), a category class and the browser tab
//! title.

use super::page_standard::*;
use leptos::prelude::*;

const APP_TITLE: &str = "Wildlife Park";

fn document_title(title: &str) -> String {
    if title.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{title} · {APP_TITLE}")
    }
}

fn frame_class(category: &str, extra: &str) -> String {
    let modifier = match category {
        PAGE_CAT_DASHBOARD => Some("page--dashboard"),
        PAGE_CAT_STATUS => Some("page--status"),
        _ => None,
    };
    ["page", modifier.unwrap_or(""), extra]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PageFrame(
    /// Entity part of the id, e.g. `"a004_ticket"`.
    #[prop(into)]
    entity: String,
    category: &'static str,
    /// Shown in the browser tab.
    #[prop(optional)]
    title: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(title));
    }

    view! {
        <div id=page_id(&entity, category) class=frame_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_DASHBOARD, ""), "page page--dashboard");
        assert_eq!(frame_class(PAGE_CAT_STATUS, "login"), "page page--status login");
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("Tickets"), "Tickets · Wildlife Park");
        assert_eq!(document_title(""), "Wildlife Park");
    }
}
