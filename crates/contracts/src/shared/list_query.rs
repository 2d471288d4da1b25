//! List query engine shared by every registry page: free-text search,
//! categorical filters, stable sort and page slicing.
//!
//! All functions take the source collection by shared reference and return
//! new vectors, so the same inputs always yield the same output and the
//! source is never reordered.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filter value meaning "do not filter on this axis".
pub const SENTINEL_ALL: &str = "all";

/// `""`, `"all"` and any `"all-…"` value (`all-species`, `all-status`).
pub fn is_sentinel(value: &str) -> bool {
    let value = value.to_lowercase();
    value.is_empty() || value == SENTINEL_ALL || value.starts_with("all-")
}

/// Types that can be matched by the search box and the filter selects.
pub trait Searchable {
    /// Fields the free-text search looks into.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field, `None` if the record has no such field.
    fn category_value(&self, field: &str) -> Option<String>;

    /// Case-insensitive substring match against any search field. A blank
    /// query matches everything.
    fn matches_search(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Exact case-insensitive match on one field.
    fn matches_category(&self, field: &str, value: &str) -> bool {
        self.category_value(field)
            .map(|v| v.to_lowercase() == value.to_lowercase())
            .unwrap_or(false)
    }
}

/// Types that can be ordered by a named field.
pub trait Sortable {
    /// Compare two records by a field. Unknown fields compare equal, which
    /// keeps insertion order.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;

    /// Named sort presets offered by a page (`newest`, `price`, ...).
    fn sort_preset(_key: &str) -> Option<SortSpec> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub field: String,
    pub value: String,
}

impl CategoryFilter {
    pub fn is_active(&self) -> bool {
        !is_sentinel(&self.value)
    }
}

/// Full state of a list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub filters: Vec<CategoryFilter>,
    pub sort: Option<SortSpec>,
    /// 1-based page index.
    pub page: usize,
    /// 0 disables paging.
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: None,
            page: 1,
            page_size: 0,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Adds a categorical filter; a later filter on the same field replaces
    /// the earlier one.
    pub fn with_filter(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.retain(|f| f.field != field);
        self.filters.push(CategoryFilter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paged(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// One page of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Number of records that passed the filters, across all pages.
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> ListPage<T> {
    /// "Showing 5 of 7 animals"
    pub fn showing_label(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.items.len(), self.total_count, noun)
    }
}

/// Search and categorical filters, ANDed. Keeps input order.
pub fn filter_records<'a, T: Searchable>(items: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    let active: Vec<&CategoryFilter> = query.filters.iter().filter(|f| f.is_active()).collect();
    items
        .iter()
        .filter(|item| item.matches_search(&query.search))
        .filter(|item| {
            active
                .iter()
                .all(|f| item.matches_category(&f.field, &f.value))
        })
        .collect()
}

/// Stable sort: records that compare equal keep their relative order.
pub fn sort_records<T: Sortable>(items: &mut [&T], sort: &SortSpec) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &sort.field);
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Number of pages for a filtered count, never less than 1.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 || total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Slice one page out of an already filtered and sorted list. Page 0 is
/// read as page 1; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[&T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return items.iter().map(|item| (*item).clone()).collect();
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].iter().map(|item| (*item).clone()).collect()
}

/// search -> categorical filters -> sort -> page slice.
pub fn run_query<T>(items: &[T], query: &ListQuery) -> ListPage<T>
where
    T: Searchable + Sortable + Clone,
{
    let mut filtered = filter_records(items, query);
    if let Some(sort) = &query.sort {
        sort_records(&mut filtered, sort);
    }
    let total_count = filtered.len();
    let page = query.page.max(1);
    ListPage {
        items: paginate(&filtered, page, query.page_size),
        total_count,
        page,
        page_size: query.page_size,
        total_pages: total_pages(total_count, query.page_size),
    }
}

/// Resolve a sort key coming from a select or a query string: a named
/// preset of `T` wins, otherwise the key is taken as a field name.
pub fn resolve_sort<T: Sortable>(key: &str, ascending: Option<bool>) -> Option<SortSpec> {
    if key.is_empty() {
        return None;
    }
    T::sort_preset(key).or_else(|| {
        Some(SortSpec {
            field: key.to_string(),
            ascending: ascending.unwrap_or(true),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        kind: &'static str,
        score: i32,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.id, self.name]
        }

        fn category_value(&self, field: &str) -> Option<String> {
            match field {
                "kind" => Some(self.kind.to_string()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "score" => self.score.cmp(&other.score),
                "name" => self.name.cmp(other.name),
                _ => Ordering::Equal,
            }
        }

        fn sort_preset(key: &str) -> Option<SortSpec> {
            match key {
                "best" => Some(SortSpec::desc("score")),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "R1", name: "Black Rhino", kind: "Mammal", score: 3 },
            Row { id: "R2", name: "Eagle", kind: "Bird", score: 5 },
            Row { id: "R3", name: "White rhino", kind: "mammal", score: 3 },
            Row { id: "R4", name: "Owl", kind: "Bird", score: 1 },
            Row { id: "R5", name: "Hippo", kind: "Mammal", score: 3 },
            Row { id: "R6", name: "Ostrich", kind: "Bird", score: 5 },
            Row { id: "R7", name: "Zebra", kind: "Mammal", score: 2 },
        ]
    }

    fn ids(items: &[Row]) -> Vec<&'static str> {
        items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sentinels() {
        assert!(is_sentinel(""));
        assert!(is_sentinel("all"));
        assert!(is_sentinel("ALL"));
        assert!(is_sentinel("all-species"));
        assert!(is_sentinel("all-status"));
        assert!(!is_sentinel("allosaurus"));
        assert!(!is_sentinel("Lion"));
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().with_search("RHINO"));
        assert_eq!(ids(&page.items), vec!["R1", "R3"]);

        for row in &data {
            let included = page.items.contains(row);
            let matches = row.search_fields().iter().any(|f| f.to_lowercase().contains("rhino"));
            assert_eq!(included, matches, "row {}", row.id);
        }

        let page = run_query(&data, &ListQuery::new().with_search("r5"));
        assert_eq!(ids(&page.items), vec!["R5"]);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().with_search(""));
        assert_eq!(page.items, data);
        assert_eq!(page.total_count, data.len());

        let page = run_query(&data, &ListQuery::new().with_search("   "));
        assert_eq!(page.total_count, data.len());
    }

    #[test]
    fn test_category_filter_and_sentinel() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().with_filter("kind", "MAMMAL"));
        assert_eq!(ids(&page.items), vec!["R1", "R3", "R5", "R7"]);
        assert!(page.items.iter().all(|r| r.kind.eq_ignore_ascii_case("mammal")));

        let page = run_query(&data, &ListQuery::new().with_filter("kind", "all"));
        assert_eq!(page.items, data);
    }

    #[test]
    fn test_unknown_category_field_matches_nothing() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().with_filter("colour", "red"));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_filters_are_anded() {
        let data = rows();
        let query = ListQuery::new().with_search("o").with_filter("kind", "bird");
        let page = run_query(&data, &query);
        assert_eq!(ids(&page.items), vec!["R4", "R6"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let data = rows();
        let query = ListQuery::new().with_search("h").with_filter("kind", "mammal");
        let once = run_query(&data, &query);
        let twice = run_query(&once.items, &query);
        assert_eq!(once.items, twice.items);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().sorted_by(SortSpec::asc("score")));
        assert_eq!(ids(&page.items), vec!["R4", "R7", "R1", "R3", "R5", "R2", "R6"]);

        let page = run_query(&data, &ListQuery::new().sorted_by(SortSpec::desc("score")));
        assert_eq!(ids(&page.items), vec!["R2", "R6", "R1", "R3", "R5", "R7", "R4"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_insertion_order() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().sorted_by(SortSpec::asc("nope")));
        assert_eq!(page.items, data);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let data = rows();
        let before = data.clone();
        let _ = run_query(&data, &ListQuery::new().sorted_by(SortSpec::desc("name")));
        assert_eq!(data, before);
    }

    #[test]
    fn test_pages_reconstruct_the_full_result() {
        let data = rows();
        let base = ListQuery::new().sorted_by(SortSpec::asc("name"));
        let full = run_query(&data, &base);

        let first = run_query(&data, &base.clone().paged(1, 3));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 7);

        let mut joined = Vec::new();
        for page in 1..=first.total_pages {
            joined.extend(run_query(&data, &base.clone().paged(page, 3)).items);
        }
        assert_eq!(joined, full.items);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().paged(9, 5));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let data = rows();
        let page = run_query(&data, &ListQuery::new().paged(0, 5));
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page.items), vec!["R1", "R2", "R3", "R4", "R5"]);
        assert_eq!(page.showing_label("rows"), "Showing 5 of 7 rows");
    }

    #[test]
    fn test_resolve_sort_prefers_presets() {
        assert_eq!(resolve_sort::<Row>("best", None), Some(SortSpec::desc("score")));
        assert_eq!(resolve_sort::<Row>("name", Some(false)), Some(SortSpec::desc("name")));
        assert_eq!(resolve_sort::<Row>("", Some(true)), None);
    }

    #[test]
    fn test_later_filter_replaces_same_field() {
        let query = ListQuery::new()
            .with_filter("kind", "bird")
            .with_filter("kind", "mammal");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].value, "mammal");
    }
}
