use chrono::NaiveDate;
use contracts::domain::a001_animal::aggregate::{Animal, AnimalDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

pub fn list(repo: &Repository<Animal>, query: &ListQuery) -> ListPage<Animal> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<Animal>, id: &str) -> anyhow::Result<Animal> {
    common::get(repo, id)
}

/// Register a new animal; join and medical dates are `today`.
pub fn create(repo: &Repository<Animal>, dto: AnimalDto, today: NaiveDate) -> anyhow::Result<Animal> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, Animal::new_for_insert(dto, today)))
}

pub fn update(repo: &Repository<Animal>, id: &str, dto: AnimalDto) -> anyhow::Result<Animal> {
    common::validated(dto.validate())?;
    common::update(repo, id, |animal| animal.update(dto))
}

pub fn delete(repo: &Repository<Animal>, id: &str) -> anyhow::Result<Animal> {
    common::delete(repo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::error::ServiceError;
    use contracts::domain::a001_animal::aggregate::ANIMALS_PAGE_SIZE;

    fn repo() -> Repository<Animal> {
        Repository::with_items(seed::animals(), seed::first_sequence::ANIMALS)
    }

    fn dto(name: &str) -> AnimalDto {
        AnimalDto {
            name: name.into(),
            species: "Zebra".into(),
            age: "2 years".into(),
            gender: "Female".into(),
            location: "Northern Plains".into(),
            status: "Healthy".into(),
            weight: "300 kg".into(),
            diet: "Herbivore".into(),
            endangered: false,
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    #[test]
    fn test_first_page_of_seed() {
        let page = list(&repo(), &ListQuery::new().paged(1, ANIMALS_PAGE_SIZE));
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.showing_label("animals"), "Showing 5 of 7 animals");

        let page = list(&repo(), &ListQuery::new().paged(2, ANIMALS_PAGE_SIZE));
        let ids: Vec<_> = page.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1006", "A1007"]);
    }

    #[test]
    fn test_search_rhino_then_clear() {
        let repo = repo();
        let page = list(&repo, &ListQuery::new().with_search("RHINO"));
        let ids: Vec<_> = page.items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1003"]);

        let page = list(&repo, &ListQuery::new().with_search(""));
        assert_eq!(page.total_count, 7);
    }

    #[test]
    fn test_endangered_view_over_seed() {
        let page = list(&repo(), &ListQuery::new().with_filter("status", "endangered"));
        let names: Vec<_> = page.items.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Kifaru", "Duma"]);
    }

    #[test]
    fn test_create_assigns_next_id() {
        let repo = repo();
        let zebra = create(&repo, dto("Punda"), today()).unwrap();
        assert_eq!(zebra.id, "A1008");
        assert_eq!(zebra.join_date, "04/15/2025");
        assert_eq!(repo.len(), 8);
        assert_eq!(get_by_id(&repo, "A1008").unwrap().name, "Punda");
    }

    #[test]
    fn test_create_rejects_invalid_form() {
        let repo = repo();
        let err = create(&repo, dto("P"), today()).unwrap_err();
        match err.downcast_ref::<ServiceError>() {
            Some(ServiceError::Validation(errors)) => {
                assert_eq!(errors[0].field, "name");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(repo.len(), 7);
    }

    #[test]
    fn test_update_and_delete() {
        let repo = repo();
        let mut edit = dto("Simba");
        edit.species = "Lion".into();
        edit.status = "critical".into();
        let simba = update(&repo, "A1001", edit).unwrap();
        assert_eq!(simba.status.label(), "Critical");
        assert_eq!(simba.chip_id, "KWS-CH-5643");

        delete(&repo, "A1001").unwrap();
        assert!(get_by_id(&repo, "A1001").is_err());
        assert!(delete(&repo, "A1001").is_err());
    }
}
