//! Page category constants.
//!
//! Every page inside the shell declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_animal--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and it leads to `domain/a001_animal/`.

/// Registry of records: search, filters, sort, pages, export.
pub const PAGE_CAT_LIST: &str = "list";

/// Summary cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Forbidden and placeholder views.
pub const PAGE_CAT_STATUS: &str = "status";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_STATUS];

/// `a001_animal--list`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert_eq!(page_id("a004_ticket", PAGE_CAT_LIST), "a004_ticket--list");
        assert!(is_valid_page_id("a004_ticket--list"));
        assert!(is_valid_page_id("tracking--status"));
        assert!(!is_valid_page_id("a004_ticket"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_ticket--detail"));
    }
}
