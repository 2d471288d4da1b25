use contracts::domain::a007_inventory_item::aggregate::{InventoryItem, InventoryItemDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

pub fn list(repo: &Repository<InventoryItem>, query: &ListQuery) -> ListPage<InventoryItem> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<InventoryItem>, id: &str) -> anyhow::Result<InventoryItem> {
    common::get(repo, id)
}

pub fn create(repo: &Repository<InventoryItem>, dto: InventoryItemDto) -> anyhow::Result<InventoryItem> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, InventoryItem::new_for_insert(dto)))
}

pub fn update(repo: &Repository<InventoryItem>, id: &str, dto: InventoryItemDto) -> anyhow::Result<InventoryItem> {
    common::validated(dto.validate())?;
    common::update(repo, id, |item| item.update(dto))
}

pub fn delete(repo: &Repository<InventoryItem>, id: &str) -> anyhow::Result<InventoryItem> {
    common::delete(repo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::error::{ApiError, ServiceError};
    use axum::http::StatusCode;
    use contracts::domain::a007_inventory_item::aggregate::StockStatus;

    fn repo() -> Repository<InventoryItem> {
        Repository::with_items(seed::inventory(), seed::first_sequence::INVENTORY)
    }

    #[test]
    fn test_category_filter_over_seed() {
        let page = list(&repo(), &ListQuery::new().with_filter("category", "medications"));
        let ids: Vec<_> = page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["MED001", "MED002"]);

        let page = list(&repo(), &ListQuery::new().with_filter("category", "all"));
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_search_with_category() {
        let query = ListQuery::new()
            .with_search("GLOVES")
            .with_filter("category", "Supplies");
        let page = list(&repo(), &query);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "MED005");
    }

    #[test]
    fn test_create_restock_and_delete() {
        let repo = repo();
        let dto = InventoryItemDto {
            name: "Syringes".into(),
            category: "Supplies".into(),
            quantity: 0,
            unit: "boxes".into(),
            expiry_date: "2026-02-01".into(),
            supplier: "MediSupply".into(),
            location: "Storage Room B".into(),
            status: None,
        };
        let item = create(&repo, dto.clone()).unwrap();
        assert_eq!(item.id, "MED006");
        assert_eq!(item.status, StockStatus::OutOfStock);

        let restocked = update(
            &repo,
            "MED006",
            InventoryItemDto {
                quantity: 40,
                ..dto
            },
        )
        .unwrap();
        assert_eq!(restocked.id, "MED006");
        assert_eq!(restocked.status, StockStatus::InStock);

        delete(&repo, "MED006").unwrap();
        let err = get_by_id(&repo, "MED006").unwrap_err();
        assert_eq!(ApiError::from(err).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_item_is_rejected() {
        let repo = repo();
        let err = create(&repo, InventoryItemDto::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ServiceError>(),
            Some(ServiceError::Validation(errors)) if errors[0].field == "name"
        ));
        assert_eq!(repo.len(), 5);
    }
}
