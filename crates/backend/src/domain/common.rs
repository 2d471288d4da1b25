//! Steps shared by every registry service.

use contracts::domain::common::Record;
use contracts::shared::list_query::{run_query, ListPage, ListQuery, Searchable, Sortable};
use contracts::shared::validation::FieldError;

use crate::shared::data::store::Repository;
use crate::shared::error::ServiceError;

pub fn list<T>(repo: &Repository<T>, query: &ListQuery) -> ListPage<T>
where
    T: Record + Searchable + Sortable,
{
    run_query(&repo.list(), query)
}

pub fn get<T: Record>(repo: &Repository<T>, id: &str) -> anyhow::Result<T> {
    repo.get(id)
        .ok_or_else(|| ServiceError::not_found(T::ENTITY, id).into())
}

pub fn validated(result: Result<(), Vec<FieldError>>) -> anyhow::Result<()> {
    result.map_err(|errors| ServiceError::Validation(errors).into())
}

pub fn insert<T: Record>(repo: &Repository<T>, record: T) -> T {
    let stored = repo.insert(record);
    tracing::info!("Created {} {} ({})", T::ENTITY, stored.id(), stored.title());
    stored
}

/// Apply an edit to the stored record under the store lock.
pub fn update<T, F>(repo: &Repository<T>, id: &str, apply: F) -> anyhow::Result<T>
where
    T: Record,
    F: FnOnce(&mut T),
{
    let updated = repo
        .update_with(id, apply)
        .ok_or_else(|| ServiceError::not_found(T::ENTITY, id))?;
    tracing::info!("Updated {} {}", T::ENTITY, id);
    Ok(updated)
}

pub fn delete<T: Record>(repo: &Repository<T>, id: &str) -> anyhow::Result<T> {
    let removed = repo
        .remove(id)
        .ok_or_else(|| ServiceError::not_found(T::ENTITY, id))?;
    tracing::info!("Deleted {} {} ({})", T::ENTITY, id, removed.title());
    Ok(removed)
}
