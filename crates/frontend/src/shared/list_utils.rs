//! State of a registry page (search box, filter selects, sort, page) and
//! the loader that fills it.
//!
//! Pages fetch the whole collection once and run the shared query engine
//! in the browser; the same controls are sent to the export endpoint.

use std::collections::BTreeMap;

use contracts::shared::list_query::{is_sentinel, resolve_sort, ListPage, ListQuery, Sortable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::api_utils::get_json;

/// Everything the toolbar and table header can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListControls {
    pub search: String,
    /// `(field, value)`; sentinel values mean "no filter".
    pub filters: Vec<(String, String)>,
    /// Field name or a named preset of the record type.
    pub sort: String,
    pub ascending: bool,
    /// 1-based.
    pub page: usize,
    /// 0 shows everything on one page.
    pub page_size: usize,
}

impl ListControls {
    pub fn new(sort: &str, ascending: bool, page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: sort.to_string(),
            ascending,
            page: 1,
            page_size,
        }
    }

    pub fn set_search(&mut self, search: &str) {
        if self.search != search {
            self.search = search.to_string();
            self.page = 1;
        }
    }

    pub fn set_filter(&mut self, field: &str, value: &str) {
        if self.filter(field) == value {
            return;
        }
        self.filters.retain(|(f, _)| f != field);
        self.filters.push((field.to_string(), value.to_string()));
        self.page = 1;
    }

    /// Current value of a filter select, `all` when untouched.
    pub fn filter(&self, field: &str) -> &str {
        self.filters
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("all")
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.iter().filter(|(_, v)| !is_sentinel(v)).count()
    }

    /// Sort picked from a select: presets carry their own direction.
    pub fn set_sort(&mut self, key: &str) {
        self.sort = key.to_string();
        self.ascending = true;
    }

    /// Column header click: the same column flips direction, a new one
    /// starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort == field {
            self.ascending = !self.ascending;
        } else {
            self.sort = field.to_string();
            self.ascending = true;
        }
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        if self.sort == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }

    pub fn to_query<T: Sortable>(&self) -> ListQuery {
        let mut query = ListQuery::new()
            .with_search(self.search.clone())
            .paged(self.page, self.page_size);
        for (field, value) in &self.filters {
            query = query.with_filter(field, value.clone());
        }
        if let Some(sort) = resolve_sort::<T>(&self.sort, Some(self.ascending)) {
            query = query.sorted_by(sort);
        }
        query
    }

    /// Search, active filters and sort as query-string pairs; paging is
    /// never included.
    pub fn request_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if !self.search.trim().is_empty() {
            params.insert("search".to_string(), self.search.trim().to_string());
        }
        for (field, value) in &self.filters {
            if !is_sentinel(value) {
                params.insert(field.clone(), value.clone());
            }
        }
        if !self.sort.is_empty() {
            params.insert("sort".to_string(), self.sort.clone());
            params.insert("ascending".to_string(), self.ascending.to_string());
        }
        params
    }
}

/// Distinct values of one field as `(value, label)` select options, sorted.
pub fn distinct_options<T, F>(items: &[T], value: F) -> Vec<(String, String)>
where
    F: Fn(&T) -> String,
{
    let mut values: Vec<String> = items.iter().map(value).filter(|v| !v.is_empty()).collect();
    values.sort();
    values.dedup();
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// A collection loaded from the backend.
pub struct Records<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    path: &'static str,
}

impl<T: Send + Sync + 'static> Clone for Records<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Records<T> {}

impl<T> Records<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Start loading `path` (a list endpoint answering with a [`ListPage`]).
    pub fn load(path: &'static str) -> Self {
        let records = Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            path,
        };
        records.reload();
        records
    }

    pub fn reload(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match get_json::<ListPage<T>>(this.path).await {
                Ok(page) => {
                    log::debug!("{}: {} record(s)", this.path, page.total_count);
                    this.items.set(page.items);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("{}: {}", this.path, e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_ticket::aggregate::Ticket;
    use contracts::shared::list_query::SortSpec;

    #[test]
    fn test_changes_reset_to_first_page() {
        let mut controls = ListControls::new("", true, 5);
        controls.page = 2;
        controls.set_search("lion");
        assert_eq!(controls.page, 1);

        controls.page = 2;
        controls.set_search("lion");
        assert_eq!(controls.page, 2, "unchanged search keeps the page");

        controls.set_filter("species", "Lion");
        assert_eq!(controls.page, 1);
        assert_eq!(controls.filter("species"), "Lion");
        assert_eq!(controls.filter("status"), "all");
    }

    #[test]
    fn test_toggle_sort() {
        let mut controls = ListControls::new("name", true, 0);
        controls.toggle_sort("name");
        assert!(!controls.ascending);
        assert_eq!(controls.sort_indicator("name"), " ▼");
        controls.toggle_sort("species");
        assert_eq!(controls.sort, "species");
        assert!(controls.ascending);
        assert_eq!(controls.sort_indicator("name"), " ⇅");
    }

    #[test]
    fn test_query_uses_presets() {
        let mut controls = ListControls::new("newest", true, 10);
        controls.set_filter("status", "active");
        controls.set_filter("type", "all");
        let query = controls.to_query::<Ticket>();
        assert_eq!(query.sort, Some(SortSpec::desc("date")));
        assert_eq!(query.page_size, 10);
        assert_eq!(query.filters.len(), 1, "an untouched select adds nothing");
        assert_eq!(controls.active_filter_count(), 1);
    }

    #[test]
    fn test_distinct_options() {
        let species = vec!["Lion", "Elephant", "Lion", ""];
        let options = distinct_options(&species, |s| s.to_string());
        assert_eq!(
            options,
            vec![
                ("Elephant".to_string(), "Elephant".to_string()),
                ("Lion".to_string(), "Lion".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_params_skip_blank_and_sentinels() {
        let mut controls = ListControls::new("", true, 5);
        controls.set_search("   ");
        controls.set_filter("species", "all-species");
        assert!(controls.request_params().is_empty());
    }
}
