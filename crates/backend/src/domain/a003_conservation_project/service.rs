use contracts::domain::a003_conservation_project::aggregate::{ConservationProject, ConservationProjectDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

type Repo = Repository<ConservationProject>;

pub fn list(repo: &Repo, query: &ListQuery) -> ListPage<ConservationProject> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repo, id: &str) -> anyhow::Result<ConservationProject> {
    common::get(repo, id)
}

pub fn create(repo: &Repo, dto: ConservationProjectDto) -> anyhow::Result<ConservationProject> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, ConservationProject::new_for_insert(dto)))
}

pub fn update(repo: &Repo, id: &str, dto: ConservationProjectDto) -> anyhow::Result<ConservationProject> {
    common::validated(dto.validate())?;
    common::update(repo, id, |project| project.update(dto))
}

pub fn delete(repo: &Repo, id: &str) -> anyhow::Result<ConservationProject> {
    common::delete(repo, id)
}
