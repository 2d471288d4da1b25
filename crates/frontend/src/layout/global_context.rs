use leptos::ev;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::window;

/// App-wide UI state: the current address and panel visibility.
///
/// Navigation is kept in `path` and mirrored into the browser history by
/// hand; there is no router component.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Pathname plus query string, e.g. `/login?from=/reports`.
    pub location: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

fn current_location() -> String {
    window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            location: RwSignal::new(current_location()),
            left_open: RwSignal::new(true),
        }
    }

    /// Follow back/forward buttons.
    pub fn init_router_integration(&self) {
        let this = *self;
        // The shell lives as long as the page, so the listener is never removed.
        let _ = window_event_listener(ev::popstate, move |_| {
            this.location.set(current_location());
        });
    }

    /// Path part of the current location.
    pub fn path(&self) -> String {
        self.location.with(|l| split_location(l).0.to_string())
    }

    /// One query parameter of the current location.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.location.with(|l| {
            let params: HashMap<String, String> =
                serde_qs::from_str(split_location(l).1).unwrap_or_default();
            params.get(name).cloned()
        })
    }

    /// Push a new history entry and switch to it.
    pub fn navigate(&self, to: &str) {
        if self.location.get_untracked() == to {
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
        log::debug!("navigate: {}", to);
        self.location.set(to.to_string());
    }

    /// Like [`navigate`](Self::navigate) but without a new history entry,
    /// used for guard redirects.
    pub fn replace(&self, to: &str) {
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
        log::debug!("redirect: {}", to);
        self.location.set(to.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `("/login", "from=/reports")` for `/login?from=/reports`.
pub fn split_location(location: &str) -> (&str, &str) {
    match location.split_once('?') {
        Some((path, query)) => (path, query.split('#').next().unwrap_or("")),
        None => (location.split('#').next().unwrap_or(location), ""),
    }
}

/// Redirect target carrying the address the visitor was heading to, as in
/// `/login?from=/reports`.
pub fn redirect_location(to: &str, from: Option<&str>) -> String {
    match from {
        Some(from) => {
            let params = HashMap::from([("from".to_string(), from.to_string())]);
            match serde_qs::to_string(&params) {
                Ok(qs) => format!("{}?{}", to, qs),
                Err(_) => to.to_string(),
            }
        }
        None => to.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("/login?from=/reports"), ("/login", "from=/reports"));
        assert_eq!(split_location("/animals"), ("/animals", ""));
        assert_eq!(split_location("/animals#top"), ("/animals", ""));
    }

    #[test]
    fn test_redirect_location_round_trips_from() {
        let location = redirect_location("/login", Some("/reports"));
        let (path, query) = split_location(&location);
        assert_eq!(path, "/login");
        let params: HashMap<String, String> = serde_qs::from_str(query).unwrap();
        assert_eq!(params.get("from").map(String::as_str), Some("/reports"));
        assert_eq!(redirect_location("/dashboard", None), "/dashboard");
    }
}
