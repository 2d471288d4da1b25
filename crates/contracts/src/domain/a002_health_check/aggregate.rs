use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, SortSpec, Sortable};
use crate::shared::validation::{FieldError, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthCheckStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl HealthCheckStatus {
    pub fn all() -> &'static [HealthCheckStatus] {
        &[
            HealthCheckStatus::Scheduled,
            HealthCheckStatus::Completed,
            HealthCheckStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCheckStatus::Scheduled => "scheduled",
            HealthCheckStatus::Completed => "completed",
            HealthCheckStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthCheckStatus::Scheduled => "Scheduled",
            HealthCheckStatus::Completed => "Completed",
            HealthCheckStatus::Cancelled => "Cancelled",
        }
    }
}

/// A scheduled or past veterinary visit. The animal is referenced by an
/// id/name pair that is not checked against the animal registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub id: String,
    pub animal_id: String,
    pub animal_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub check_type: String,
    pub veterinarian: String,
    pub status: HealthCheckStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckDto {
    pub animal_id: String,
    pub animal_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub check_type: String,
    pub veterinarian: String,
    #[serde(default)]
    pub status: Option<HealthCheckStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl HealthCheckDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("animalId", &self.animal_id, "Animal ID")
            .required("animalName", &self.animal_name, "Animal name")
            .required("date", &self.date, "Date")
            .check(
                NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok(),
                "date",
                "A date of check-up is required.",
            )
            .required("time", &self.time, "Time")
            .required("type", &self.check_type, "Type")
            .required("veterinarian", &self.veterinarian, "Veterinarian");
        v.finish()
    }
}

impl HealthCheck {
    pub fn new_for_insert(dto: HealthCheckDto) -> Self {
        Self {
            id: String::new(),
            animal_id: dto.animal_id,
            animal_name: dto.animal_name,
            date: dto.date,
            time: dto.time,
            check_type: dto.check_type,
            veterinarian: dto.veterinarian,
            status: dto.status.unwrap_or(HealthCheckStatus::Scheduled),
            notes: dto.notes.unwrap_or_default(),
        }
    }

    pub fn update(&mut self, dto: HealthCheckDto) {
        self.animal_id = dto.animal_id;
        self.animal_name = dto.animal_name;
        self.date = dto.date;
        self.time = dto.time;
        self.check_type = dto.check_type;
        self.veterinarian = dto.veterinarian;
        if let Some(status) = dto.status {
            self.status = status;
        }
        if let Some(notes) = dto.notes {
            self.notes = notes;
        }
    }
}

impl Record for HealthCheck {
    const ENTITY: &'static str = "health_checks";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.animal_name
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = format!("HC{sequence:03}");
    }
}

impl Searchable for HealthCheck {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.animal_name.as_str(),
            self.veterinarian.as_str(),
        ]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "type" => Some(self.check_type.clone()),
            "veterinarian" => Some(self.veterinarian.clone()),
            _ => None,
        }
    }
}

impl Sortable for HealthCheck {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // ISO dates order correctly as text; time breaks ties
            "date" => (&self.date, &self.time).cmp(&(&other.date, &other.time)),
            "animalName" => self.animal_name.to_lowercase().cmp(&other.animal_name.to_lowercase()),
            "veterinarian" => self.veterinarian.cmp(&other.veterinarian),
            "id" => self.id.cmp(&other.id),
            _ => Ordering::Equal,
        }
    }

    fn sort_preset(key: &str) -> Option<SortSpec> {
        match key {
            "upcoming" => Some(SortSpec::asc("date")),
            "recent" => Some(SortSpec::desc("date")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{run_query, ListQuery};

    fn check(id: &str, animal: &str, vet: &str, date: &str, status: HealthCheckStatus) -> HealthCheck {
        HealthCheck {
            id: id.into(),
            animal_id: "A001".into(),
            animal_name: animal.into(),
            date: date.into(),
            time: "09:00".into(),
            check_type: "Routine Check-up".into(),
            veterinarian: vet.into(),
            status,
            notes: String::new(),
        }
    }

    #[test]
    fn test_search_and_status_filter() {
        let data = vec![
            check("HC001", "Simba", "Dr. Smith", "2024-03-15", HealthCheckStatus::Scheduled),
            check("HC002", "Nala", "Dr. Johnson", "2024-03-16", HealthCheckStatus::Scheduled),
            check("HC003", "Mufasa", "Dr. Williams", "2024-03-14", HealthCheckStatus::Completed),
        ];
        let page = run_query(&data, &ListQuery::new().with_search("dr. s"));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].animal_name, "Simba");

        let page = run_query(&data, &ListQuery::new().with_filter("status", "completed"));
        assert_eq!(page.items[0].id, "HC003");

        let page = run_query(&data, &ListQuery::new().sorted_by(SortSpec::asc("date")));
        let ids: Vec<_> = page.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["HC003", "HC001", "HC002"]);
    }

    #[test]
    fn test_validation() {
        let errors = HealthCheckDto {
            animal_id: "A001".into(),
            animal_name: "Simba".into(),
            date: "15/03/2024".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["date", "time", "type", "veterinarian"]);
    }

    #[test]
    fn test_assign_id_and_type_field() {
        let mut c = HealthCheck::new_for_insert(HealthCheckDto {
            animal_id: "A1".into(),
            animal_name: "Simba".into(),
            date: "2024-03-15".into(),
            time: "09:00".into(),
            check_type: "Vaccination".into(),
            veterinarian: "Dr. Smith".into(),
            status: None,
            notes: None,
        });
        c.assign_id(6);
        assert_eq!(c.id, "HC006");
        assert_eq!(c.status, HealthCheckStatus::Scheduled);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["type"], "Vaccination");
        assert_eq!(json["status"], "scheduled");
    }
}
