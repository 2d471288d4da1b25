use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, Sortable};
use crate::shared::validation::{FieldError, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Veterinary,
    Security,
    Conservation,
    Research,
    Operations,
}

impl Department {
    pub fn all() -> &'static [Department] {
        &[
            Department::Veterinary,
            Department::Security,
            Department::Conservation,
            Department::Research,
            Department::Operations,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Veterinary => "veterinary",
            Department::Security => "security",
            Department::Conservation => "conservation",
            Department::Research => "research",
            Department::Operations => "operations",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Veterinary => "Veterinary",
            Department::Security => "Security",
            Department::Conservation => "Conservation",
            Department::Research => "Research",
            Department::Operations => "Operations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Leave,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Leave => "leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::Leave => "On Leave",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: String,
    pub hours: String,
}

impl ScheduleEntry {
    pub fn new(day: &str, hours: &str) -> Self {
        Self {
            day: day.to_string(),
            hours: hours.to_string(),
        }
    }
}

pub const ON_LEAVE_HOURS: &str = "On Leave";

const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub department: Department,
    pub contact_email: String,
    pub contact_phone: String,
    pub location: String,
    /// Month and year, e.g. `Apr 2018`.
    pub start_date: String,
    pub status: StaffStatus,
    pub bio: String,
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberDto {
    pub name: String,
    pub role: String,
    pub department: Option<Department>,
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub status: Option<StaffStatus>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
}

/// Loose shape check: one `@`, something before it, a dotted domain after.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !value.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

impl StaffMemberDto {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.min_len("name", &self.name, 2, "Name must be at least 2 characters")
            .required("role", &self.role, "Role")
            .check(self.department.is_some(), "department", "Please select a department")
            .check(
                is_valid_email(&self.contact_email),
                "contactEmail",
                "Please enter a valid email address",
            );
        v.finish()
    }
}

/// Office hours given to new staff until a schedule is entered.
pub fn default_schedule(status: StaffStatus) -> Vec<ScheduleEntry> {
    let hours = match status {
        StaffStatus::Active => "8:00 AM - 5:00 PM",
        StaffStatus::Leave => ON_LEAVE_HOURS,
    };
    WEEKDAYS.iter().map(|day| ScheduleEntry::new(day, hours)).collect()
}

impl StaffMember {
    pub fn new_for_insert(dto: StaffMemberDto) -> Self {
        let status = dto.status.unwrap_or(StaffStatus::Active);
        Self {
            id: 0,
            name: dto.name,
            role: dto.role,
            department: dto.department.unwrap_or(Department::Operations),
            contact_email: dto.contact_email.trim().to_string(),
            contact_phone: dto.contact_phone,
            location: dto.location,
            start_date: dto.start_date,
            status,
            bio: dto.bio,
            schedule: dto.schedule.unwrap_or_else(|| default_schedule(status)),
        }
    }

    pub fn update(&mut self, dto: StaffMemberDto) {
        let id = self.id;
        let schedule = std::mem::take(&mut self.schedule);
        let keep_schedule = dto.schedule.is_none();
        *self = Self::new_for_insert(dto);
        self.id = id;
        if keep_schedule {
            self.schedule = schedule;
        }
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|w| !w.ends_with('.'))
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }
}

impl Record for StaffMember {
    const ENTITY: &'static str = "staff";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = u32::try_from(sequence).unwrap_or(u32::MAX);
    }

    fn sequence(&self) -> Option<u64> {
        Some(u64::from(self.id))
    }
}

impl Searchable for StaffMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.contact_email.as_str(),
        ]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "department" => Some(self.department.as_str().to_string()),
            "status" => Some(self.status.as_str().to_string()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }
}

impl Sortable for StaffMember {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "role" => self.role.to_lowercase().cmp(&other.role.to_lowercase()),
            "department" => self.department.as_str().cmp(other.department.as_str()),
            _ => Ordering::Equal,
        }
    }
}
