use contracts::domain::a006_report::aggregate::{Report, ReportDto, ReportTemplate};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::seed::REPORT_TEMPLATES;
use crate::shared::data::store::Repository;
use crate::shared::error::ServiceError;

pub fn list(repo: &Repository<Report>, query: &ListQuery) -> ListPage<Report> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<Report>, id: &str) -> anyhow::Result<Report> {
    common::get(repo, id)
}

pub fn create(repo: &Repository<Report>, dto: ReportDto) -> anyhow::Result<Report> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, Report::new_for_insert(dto)))
}

pub fn update(repo: &Repository<Report>, id: &str, dto: ReportDto) -> anyhow::Result<Report> {
    common::validated(dto.validate())?;
    common::update(repo, id, |report| report.update(dto))
}

pub fn delete(repo: &Repository<Report>, id: &str) -> anyhow::Result<Report> {
    common::delete(repo, id)
}

/// Count a download; returns the updated report.
pub fn record_download(repo: &Repository<Report>, id: &str) -> anyhow::Result<Report> {
    repo.update_with(id, |report| report.downloads += 1)
        .ok_or_else(|| ServiceError::not_found("reports", id).into())
}

pub fn templates() -> Vec<ReportTemplate> {
    REPORT_TEMPLATES.clone()
}
