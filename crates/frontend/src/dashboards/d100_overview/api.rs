use std::collections::BTreeMap;

use contracts::shared::list_query::ListPage;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{get_json, with_query};

fn count_params(filter: Option<(&str, &str)>) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("page_size".to_string(), "1".to_string());
    if let Some((field, value)) = filter {
        params.insert(field.to_string(), value.to_string());
    }
    params
}

/// Records matching a single categorical filter, or all records when
/// `filter` is `None`. Only the count is read from the page.
pub async fn count<T: DeserializeOwned>(path: &str, filter: Option<(&str, &str)>) -> Result<usize, String> {
    let url = with_query(path, &count_params(filter));
    let page: ListPage<T> = get_json(&url).await?;
    Ok(page.total_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_url() {
        assert_eq!(
            with_query("/api/animals", &count_params(Some(("status", "endangered")))),
            "/api/animals?page_size=1&status=endangered"
        );
        assert_eq!(with_query("/api/staff", &count_params(None)), "/api/staff?page_size=1");
    }
}
