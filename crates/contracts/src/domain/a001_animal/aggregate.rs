use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::validation::{FieldError, Validator};

/// Dates on animal cards are kept the way the registry prints them.
pub const ANIMAL_DATE_FORMAT: &str = "%m/%d/%Y";

/// Page size of the animal registry table.
pub const ANIMALS_PAGE_SIZE: usize = 5;

/// Status filter value that selects endangered animals instead of a status.
pub const ENDANGERED_VIEW: &str = "endangered";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalStatus {
    Healthy,
    Monitoring,
    #[serde(rename = "Under Treatment")]
    UnderTreatment,
    Critical,
}

impl AnimalStatus {
    pub fn all() -> &'static [AnimalStatus] {
        &[
            AnimalStatus::Healthy,
            AnimalStatus::Monitoring,
            AnimalStatus::UnderTreatment,
            AnimalStatus::Critical,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimalStatus::Healthy => "Healthy",
            AnimalStatus::Monitoring => "Monitoring",
            AnimalStatus::UnderTreatment => "Under Treatment",
            AnimalStatus::Critical => "Critical",
        }
    }

    /// Value used by filter selects and query strings.
    pub fn code(&self) -> &'static str {
        match self {
            AnimalStatus::Healthy => "healthy",
            AnimalStatus::Monitoring => "monitoring",
            AnimalStatus::UnderTreatment => "under-treatment",
            AnimalStatus::Critical => "critical",
        }
    }

    /// Accepts either the label or the code, any case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.code() == value || s.label().to_lowercase() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub status: AnimalStatus,
    pub join_date: String,
    pub chip_id: String,
    pub endangered: bool,
    pub weight: String,
    pub diet: String,
    pub last_medical: String,
    pub next_vaccination: String,
    pub territory: String,
    pub subspecies: String,
    pub conservation_status: String,
    pub family: String,
    pub behavior: String,
    pub medical_history: String,
    pub notes: String,
}

/// Form payload for adding or editing an animal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDto {
    pub name: String,
    pub species: String,
    pub age: String,
    pub gender: String,
    pub location: String,
    pub status: String,
    pub weight: String,
    pub diet: String,
    #[serde(default)]
    pub endangered: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AnimalDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "Name must be at least 2 characters")
            .required("species", &self.species, "Species")
            .required("age", &self.age, "Age")
            .required("gender", &self.gender, "Gender")
            .required("location", &self.location, "Location")
            .required("status", &self.status, "Status")
            .check(
                AnimalStatus::parse(&self.status).is_some(),
                "status",
                "Unknown status",
            )
            .required("weight", &self.weight, "Weight")
            .required("diet", &self.diet, "Diet");
        v.finish()
    }
}

const NOT_SPECIFIED: &str = "Not specified";

impl Animal {
    /// Build a new registry entry from the add form. The id is a
    /// placeholder until the store assigns one.
    pub fn new_for_insert(dto: AnimalDto, today: NaiveDate) -> Self {
        let today_str = today.format(ANIMAL_DATE_FORMAT).to_string();
        let next_vaccination = (today + chrono::Duration::days(30))
            .format(ANIMAL_DATE_FORMAT)
            .to_string();
        Self {
            id: String::new(),
            status: AnimalStatus::parse(&dto.status).unwrap_or(AnimalStatus::Healthy),
            subspecies: dto.species.clone(),
            name: dto.name,
            species: dto.species,
            age: dto.age,
            gender: dto.gender,
            location: dto.location,
            join_date: today_str.clone(),
            chip_id: String::new(),
            endangered: dto.endangered,
            weight: dto.weight,
            diet: dto.diet,
            last_medical: today_str,
            next_vaccination,
            territory: NOT_SPECIFIED.into(),
            conservation_status: NOT_SPECIFIED.into(),
            family: NOT_SPECIFIED.into(),
            behavior: NOT_SPECIFIED.into(),
            medical_history: "Initial checkup completed".into(),
            notes: dto.notes.unwrap_or_default(),
        }
    }

    /// Apply the edit form; registry-only fields are left untouched.
    pub fn update(&mut self, dto: AnimalDto) {
        if let Some(status) = AnimalStatus::parse(&dto.status) {
            self.status = status;
        }
        self.name = dto.name;
        self.species = dto.species;
        self.age = dto.age;
        self.gender = dto.gender;
        self.location = dto.location;
        self.weight = dto.weight;
        self.diet = dto.diet;
        self.endangered = dto.endangered;
        if let Some(notes) = dto.notes {
            self.notes = notes;
        }
    }

    pub fn join_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.join_date, ANIMAL_DATE_FORMAT).ok()
    }
}

impl Record for Animal {
    const ENTITY: &'static str = "animals";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = format!("A{sequence:04}");
        if self.chip_id.is_empty() {
            self.chip_id = format!("KWS-CH-{:04}", sequence % 10_000);
        }
    }
}

impl Searchable for Animal {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.species.as_str(),
            self.location.as_str(),
        ]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "species" => Some(self.species.clone()),
            "status" => Some(self.status.label().to_string()),
            "gender" => Some(self.gender.clone()),
            "diet" => Some(self.diet.clone()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn matches_category(&self, field: &str, value: &str) -> bool {
        if field == "status" {
            if value.eq_ignore_ascii_case(ENDANGERED_VIEW) {
                return self.endangered;
            }
            return AnimalStatus::parse(value) == Some(self.status);
        }
        self.category_value(field)
            .map(|v| v.to_lowercase() == value.to_lowercase())
            .unwrap_or(false)
    }
}

impl Sortable for Animal {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "species" => self.species.to_lowercase().cmp(&other.species.to_lowercase()),
            "location" => self.location.to_lowercase().cmp(&other.location.to_lowercase()),
            "status" => self.status.label().cmp(other.status.label()),
            "joinDate" | "join_date" => self.join_date_parsed().cmp(&other.join_date_parsed()),
            _ => Ordering::Equal,
        }
    }
}
