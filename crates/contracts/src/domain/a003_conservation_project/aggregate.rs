use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::validation::{FieldError, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn all() -> &'static [ProjectStatus] {
        &[
            ProjectStatus::Planning,
            ProjectStatus::Active,
            ProjectStatus::OnHold,
            ProjectStatus::Completed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConservationProject {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    pub budget: f64,
    pub lead: String,
    pub location: String,
    pub species: String,
    pub description: String,
    #[serde(default)]
    pub partners: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConservationProjectDto {
    pub name: String,
    pub status: Option<ProjectStatus>,
    pub start_date: String,
    pub end_date: String,
    /// Raw form input, parsed on validation.
    pub budget: String,
    pub lead: String,
    pub location: String,
    pub species: String,
    pub description: String,
    #[serde(default)]
    pub partners: Option<String>,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

impl ConservationProjectDto {
    pub fn budget_value(&self) -> Option<f64> {
        self.budget
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite() && *b >= 0.0)
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);
        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "Project name must be at least 2 characters.")
            .check(self.status.is_some(), "status", "Please select a project status.")
            .check(start.is_some(), "startDate", "Please select a start date.")
            .check(end.is_some(), "endDate", "Please select an end date.")
            .check(
                match (start, end) {
                    (Some(s), Some(e)) => e >= s,
                    _ => true,
                },
                "endDate",
                "End date cannot be before the start date.",
            )
            .min_len("budget", &self.budget, 1, "Budget is required.")
            .check(self.budget_value().is_some(), "budget", "Budget must be a number.")
            .min_len("lead", &self.lead, 2, "Project lead must be at least 2 characters.")
            .min_len("location", &self.location, 2, "Location must be at least 2 characters.")
            .min_len("species", &self.species, 2, "Species must be at least 2 characters.")
            .min_len(
                "description",
                &self.description,
                10,
                "Description must be at least 10 characters.",
            );
        v.finish()
    }
}

impl ConservationProject {
    pub fn new_for_insert(dto: ConservationProjectDto) -> Self {
        let budget = dto.budget_value().unwrap_or_default();
        Self {
            id: String::new(),
            name: dto.name,
            status: dto.status.unwrap_or(ProjectStatus::Planning),
            start_date: dto.start_date,
            end_date: dto.end_date,
            budget,
            lead: dto.lead,
            location: dto.location,
            species: dto.species,
            description: dto.description,
            partners: dto.partners.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn update(&mut self, dto: ConservationProjectDto) {
        let id = std::mem::take(&mut self.id);
        *self = Self::new_for_insert(dto);
        self.id = id;
    }
}

impl Record for ConservationProject {
    const ENTITY: &'static str = "conservation_projects";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = format!("CP{sequence:03}");
    }
}

impl Searchable for ConservationProject {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.species.as_str(),
            self.lead.as_str(),
            self.location.as_str(),
        ]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "species" => Some(self.species.clone()),
            _ => None,
        }
    }
}

impl Sortable for ConservationProject {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "startDate" => self.start_date.cmp(&other.start_date),
            "endDate" => self.end_date.cmp(&other.end_date),
            "budget" => self.budget.total_cmp(&other.budget),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ConservationProjectDto {
        ConservationProjectDto {
            name: "Rhino Sanctuary".into(),
            status: Some(ProjectStatus::Active),
            start_date: "2025-01-01".into(),
            end_date: "2025-12-31".into(),
            budget: "250,000".into(),
            lead: "Dr. Amina".into(),
            location: "Nakuru".into(),
            species: "Black Rhino".into(),
            description: "Expand the protected breeding area.".into(),
            partners: Some(" ".into()),
        }
    }

    #[test]
    fn test_valid_project() {
        assert!(dto().validate().is_ok());
        let project = ConservationProject::new_for_insert(dto());
        assert_eq!(project.budget, 250_000.0);
        assert_eq!(project.partners, None);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let mut d = dto();
        d.end_date = "2024-12-31".into();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "endDate");
        assert_eq!(errors[0].message, "End date cannot be before the start date.");
    }

    #[test]
    fn test_short_description() {
        let mut d = dto();
        d.description = "Short".into();
        d.budget = "lots".into();
        let errors = d.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["budget", "description"]);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut project = ConservationProject::new_for_insert(dto());
        project.assign_id(4);
        let mut d = dto();
        d.name = "Rhino Sanctuary II".into();
        project.update(d);
        assert_eq!(project.id, "CP004");
        assert_eq!(project.name, "Rhino Sanctuary II");
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::OnHold).unwrap(),
            serde_json::json!("on-hold")
        );
    }
}
