use contracts::domain::a002_health_check::aggregate::{HealthCheck, HealthCheckDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

pub fn list(repo: &Repository<HealthCheck>, query: &ListQuery) -> ListPage<HealthCheck> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<HealthCheck>, id: &str) -> anyhow::Result<HealthCheck> {
    common::get(repo, id)
}

pub fn create(repo: &Repository<HealthCheck>, dto: HealthCheckDto) -> anyhow::Result<HealthCheck> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, HealthCheck::new_for_insert(dto)))
}

pub fn update(repo: &Repository<HealthCheck>, id: &str, dto: HealthCheckDto) -> anyhow::Result<HealthCheck> {
    common::validated(dto.validate())?;
    common::update(repo, id, |check| check.update(dto))
}

pub fn delete(repo: &Repository<HealthCheck>, id: &str) -> anyhow::Result<HealthCheck> {
    common::delete(repo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use contracts::domain::a002_health_check::aggregate::HealthCheckStatus;
    use contracts::shared::list_query::resolve_sort;

    fn repo() -> Repository<HealthCheck> {
        Repository::with_items(seed::health_checks(), seed::first_sequence::HEALTH_CHECKS)
    }

    #[test]
    fn test_status_filter_over_seed() {
        let page = list(&repo(), &ListQuery::new().with_filter("status", "scheduled"));
        assert_eq!(page.total_count, 4);
        let page = list(&repo(), &ListQuery::new().with_filter("status", "all"));
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_upcoming_order() {
        let sort = resolve_sort::<HealthCheck>("upcoming", None).unwrap();
        let page = list(&repo(), &ListQuery::new().sorted_by(sort));
        let ids: Vec<_> = page.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["HC003", "HC001", "HC002", "HC004", "HC005"]);
    }

    #[test]
    fn test_create_and_complete() {
        let repo = repo();
        let check = create(
            &repo,
            HealthCheckDto {
                animal_id: "A1002".into(),
                animal_name: "Tembo".into(),
                date: "2024-03-20".into(),
                time: "08:00".into(),
                check_type: "Routine Check-up".into(),
                veterinarian: "Dr. Smith".into(),
                status: None,
                notes: None,
            },
        )
        .unwrap();
        assert_eq!(check.id, "HC006");
        assert_eq!(check.status, HealthCheckStatus::Scheduled);

        let done = update(
            &repo,
            "HC006",
            HealthCheckDto {
                status: Some(HealthCheckStatus::Completed),
                notes: Some("All clear".into()),
                animal_id: check.animal_id.clone(),
                animal_name: check.animal_name.clone(),
                date: check.date.clone(),
                time: check.time.clone(),
                check_type: check.check_type.clone(),
                veterinarian: check.veterinarian.clone(),
            },
        )
        .unwrap();
        assert_eq!(done.status, HealthCheckStatus::Completed);
        assert_eq!(done.notes, "All clear");
    }
}
