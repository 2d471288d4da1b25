use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, SortSpec, Sortable};
use crate::shared::validation::{FieldError, Validator};

/// Report categories offered by the type filter, with display labels.
pub const REPORT_TYPES: &[(&str, &str)] = &[
    ("health", "Health"),
    ("conservation", "Conservation"),
    ("visitors", "Visitors"),
    ("wildlife", "Wildlife"),
    ("security", "Security"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("staff", "Staff"),
    ("infrastructure", "Infrastructure"),
];

pub fn report_type_label(code: &str) -> &str {
    REPORT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Published,
    Scheduled,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Published => "published",
            ReportStatus::Scheduled => "scheduled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Published => "Published",
            ReportStatus::Scheduled => "Scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub author: String,
    pub views: u32,
    pub downloads: u32,
    pub status: ReportStatus,
}

/// Starting point for a new report; read-only in this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub description: String,
    pub fields: Vec<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub status: Option<ReportStatus>,
}

pub const DEFAULT_AUTHOR: &str = "Current User";

impl ReportDto {
    /// Blank form for "Generate report".
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            report_type: "health".into(),
            date: today.format("%Y-%m-%d").to_string(),
            author: DEFAULT_AUTHOR.into(),
            status: Some(ReportStatus::Draft),
        }
    }

    /// Form prefilled from a template.
    pub fn from_template(template: &ReportTemplate, today: NaiveDate) -> Self {
        Self {
            title: format!("New {}", template.name),
            description: template.description.clone(),
            report_type: template.template_type.clone(),
            ..Self::blank(today)
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.required("title", &self.title, "Title")
            .required("type", &self.report_type, "Type")
            .check(
                NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_ok(),
                "date",
                "Please select a date",
            );
        v.finish()
    }
}

impl Report {
    pub fn new_for_insert(dto: ReportDto) -> Self {
        let author = if dto.author.trim().is_empty() {
            DEFAULT_AUTHOR.to_string()
        } else {
            dto.author
        };
        Self {
            id: String::new(),
            title: dto.title,
            description: dto.description,
            report_type: dto.report_type,
            date: dto.date,
            author,
            views: 0,
            downloads: 0,
            status: dto.status.unwrap_or(ReportStatus::Draft),
        }
    }

    /// Counters survive an edit.
    pub fn update(&mut self, dto: ReportDto) {
        let (id, views, downloads) = (std::mem::take(&mut self.id), self.views, self.downloads);
        *self = Self::new_for_insert(dto);
        self.id = id;
        self.views = views;
        self.downloads = downloads;
    }

    pub fn year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

impl Record for Report {
    const ENTITY: &'static str = "reports";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = match self.year() {
            Some(year) => format!("RPT-{year}-{sequence:03}"),
            None => format!("RPT-{sequence:03}"),
        };
    }
}

impl Searchable for Report {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "type" => Some(self.report_type.clone()),
            "status" => Some(self.status.as_str().to_string()),
            "author" => Some(self.author.clone()),
            _ => None,
        }
    }
}

impl Sortable for Report {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "title" => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            "views" => self.views.cmp(&other.views),
            "downloads" => self.downloads.cmp(&other.downloads),
            _ => Ordering::Equal,
        }
    }

    fn sort_preset(key: &str) -> Option<SortSpec> {
        match key {
            "latest" => Some(SortSpec::desc("date")),
            "popular" => Some(SortSpec::desc("views")),
            _ => None,
        }
    }
}
