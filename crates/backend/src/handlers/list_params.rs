use serde::Deserialize;

use contracts::shared::list_query::{resolve_sort, ListQuery, Sortable};

/// Query string accepted by every list endpoint.
///
/// `GET /api/tickets?search=smith&status=active&sort=newest&page=1&page_size=10`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    #[serde(default)]
    pub sort: String,
    pub ascending: Option<bool>,
    #[serde(flatten)]
    pub filters: FilterParams,
}

/// Categorical filters. A filter on a field the record type lacks matches
/// nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub species: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
    pub location: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl FilterParams {
    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("species", &self.species),
            ("status", &self.status),
            ("department", &self.department),
            ("type", &self.kind),
            ("paymentMethod", &self.payment_method),
            ("location", &self.location),
            ("author", &self.author),
            ("category", &self.category),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }

    /// Search, filters and sort, without paging.
    pub fn to_query<T: Sortable>(&self, search: &str, sort: &str, ascending: Option<bool>) -> ListQuery {
        let mut query = ListQuery::new().with_search(search);
        for (field, value) in self.pairs() {
            query = query.with_filter(field, value);
        }
        if let Some(spec) = resolve_sort::<T>(sort, ascending) {
            query = query.sorted_by(spec);
        }
        query
    }
}

impl ListParams {
    pub fn to_query<T: Sortable>(&self) -> ListQuery {
        let query = self
            .filters
            .to_query::<T>(&self.search, &self.sort, self.ascending);
        match self.page_size {
            Some(size) => query.paged(self.page.unwrap_or(1), size),
            None => query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_ticket::aggregate::Ticket;
    use contracts::domain::a007_inventory_item::aggregate::InventoryItem;
    use contracts::shared::list_query::SortSpec;

    #[test]
    fn test_preset_sort_and_filters() {
        let params = ListParams {
            search: "smith".into(),
            sort: "newest".into(),
            filters: FilterParams {
                status: Some("active".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = params.to_query::<Ticket>();
        assert_eq!(query.search, "smith");
        assert_eq!(query.sort, Some(SortSpec::desc("date")));
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].field, "status");
        assert_eq!(query.page_size, 0);
    }

    #[test]
    fn test_plain_field_sort_and_paging() {
        let params = ListParams {
            sort: "visitor".into(),
            ascending: Some(false),
            page: Some(2),
            page_size: Some(5),
            ..Default::default()
        };
        let query = params.to_query::<Ticket>();
        assert_eq!(query.sort, Some(SortSpec::desc("visitor")));
        assert_eq!((query.page, query.page_size), (2, 5));
    }

    #[test]
    fn test_category_filter_reaches_the_query() {
        let params = ListParams {
            sort: "expiring".into(),
            filters: FilterParams {
                category: Some("vaccines".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = params.to_query::<InventoryItem>();
        assert_eq!(query.filters[0].field, "category");
        assert_eq!(query.filters[0].value, "vaccines");
        assert_eq!(query.sort, Some(SortSpec::asc("expiryDate")));
    }

    #[test]
    fn test_page_defaults_to_first() {
        let params = ListParams {
            page_size: Some(10),
            ..Default::default()
        };
        assert_eq!(params.to_query::<Ticket>().page, 1);
    }
}
