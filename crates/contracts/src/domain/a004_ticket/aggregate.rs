use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::Record;
use crate::shared::list_query::{Searchable, SortSpec, Sortable};
use crate::shared::validation::{FieldError, Validator};

pub const TICKET_TYPES: &[&str] = &[
    "Adult Day Pass",
    "Child Day Pass",
    "Family Package",
    "Safari Experience",
    "Group Tour",
];

pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "Mobile Money", "Bank Transfer", "Cash"];

/// Default order of the ticket table.
pub const DEFAULT_TICKET_SORT: &str = "newest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Expired,
    Refunded,
}

impl TicketStatus {
    pub fn all() -> &'static [TicketStatus] {
        &[
            TicketStatus::Active,
            TicketStatus::Used,
            TicketStatus::Expired,
            TicketStatus::Refunded,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Active => "active",
            TicketStatus::Used => "used",
            TicketStatus::Expired => "expired",
            TicketStatus::Refunded => "refunded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Active => "Active",
            TicketStatus::Used => "Used",
            TicketStatus::Expired => "Expired",
            TicketStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub visitor: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub status: TicketStatus,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub visitor: String,
    pub date: String,
    pub time: String,
    /// Raw form input.
    pub amount: String,
    pub payment_method: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
}

impl TicketDto {
    pub fn amount_value(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Validator::new();
        v.check(
            !self.ticket_type.trim().is_empty(),
            "type",
            "Please select a ticket type",
        )
        .min_len("visitor", &self.visitor, 2, "Visitor name must be at least 2 characters.")
        .check(
            NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_ok(),
            "date",
            "Please select a date",
        )
        .check(!self.time.trim().is_empty(), "time", "Please select a time")
        .check(
            self.amount_value().is_some(),
            "amount",
            "Amount must be a positive number",
        )
        .check(
            !self.payment_method.trim().is_empty(),
            "paymentMethod",
            "Please select a payment method",
        );
        v.finish()
    }
}

impl Ticket {
    pub fn new_for_insert(dto: TicketDto) -> Self {
        Self {
            id: String::new(),
            amount: dto.amount_value().unwrap_or_default(),
            ticket_type: dto.ticket_type,
            visitor: dto.visitor,
            date: dto.date,
            time: dto.time,
            status: dto.status.unwrap_or(TicketStatus::Active),
            payment_method: dto.payment_method,
        }
    }

    pub fn update(&mut self, dto: TicketDto) {
        let status = dto.status.unwrap_or(self.status);
        let id = std::mem::take(&mut self.id);
        *self = Self::new_for_insert(dto);
        self.id = id;
        self.status = status;
    }
}

/// Count per status, in tab order.
pub fn status_counts(tickets: &[Ticket]) -> Vec<(TicketStatus, usize)> {
    TicketStatus::all()
        .iter()
        .map(|status| (*status, tickets.iter().filter(|t| t.status == *status).count()))
        .collect()
}

impl Record for Ticket {
    const ENTITY: &'static str = "tickets";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.visitor
    }

    fn assign_id(&mut self, sequence: u64) {
        self.id = format!("T-{sequence}");
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.ticket_type.as_str(),
            self.visitor.as_str(),
            self.date.as_str(),
            self.time.as_str(),
            self.payment_method.as_str(),
        ]
    }

    fn category_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "type" => Some(self.ticket_type.clone()),
            "paymentMethod" => Some(self.payment_method.clone()),
            _ => None,
        }
    }
}

impl Sortable for Ticket {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "amount" => self.amount.total_cmp(&other.amount),
            "visitor" => self.visitor.to_lowercase().cmp(&other.visitor.to_lowercase()),
            "id" => self.sequence().cmp(&other.sequence()),
            _ => Ordering::Equal,
        }
    }

    fn sort_preset(key: &str) -> Option<SortSpec> {
        match key {
            "newest" => Some(SortSpec::desc("date")),
            "oldest" => Some(SortSpec::asc("date")),
            "price" => Some(SortSpec::desc("amount")),
            _ => None,
        }
    }
}
