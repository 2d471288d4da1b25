//! Demo records loaded at start when `seed.demo_data` is on.

use once_cell::sync::Lazy;

use contracts::domain::a001_animal::aggregate::{Animal, AnimalStatus};
use contracts::domain::a002_health_check::aggregate::{HealthCheck, HealthCheckStatus};
use contracts::domain::a003_conservation_project::aggregate::{ConservationProject, ProjectStatus};
use contracts::domain::a004_ticket::aggregate::{Ticket, TicketStatus};
use contracts::domain::a005_staff_member::aggregate::{
    Department, ScheduleEntry, StaffMember, StaffStatus, ON_LEAVE_HOURS,
};
use contracts::domain::a006_report::aggregate::{Report, ReportStatus, ReportTemplate};
use contracts::domain::a007_inventory_item::aggregate::{InventoryItem, StockStatus};

/// First id handed out when a collection starts empty.
pub mod first_sequence {
    pub const ANIMALS: u64 = 1001;
    pub const HEALTH_CHECKS: u64 = 1;
    pub const CONSERVATION_PROJECTS: u64 = 1;
    pub const TICKETS: u64 = 4301;
    pub const STAFF: u64 = 1;
    pub const REPORTS: u64 = 1;
    pub const INVENTORY: u64 = 1;
}

pub static REPORT_TEMPLATES: Lazy<Vec<ReportTemplate>> = Lazy::new(|| {
    vec![
        template(
            "template-1",
            "Animal Health Report",
            "health",
            "Comprehensive report on animal health metrics and veterinary care",
            &["Animal ID", "Species", "Health Status", "Treatment History", "Veterinarian Notes"],
        ),
        template(
            "template-2",
            "Visitor Analytics",
            "visitors",
            "Analysis of visitor demographics, preferences, and feedback",
            &["Visitor Count", "Demographics", "Satisfaction Score", "Popular Attractions", "Revenue"],
        ),
        template(
            "template-3",
            "Conservation Status",
            "conservation",
            "Report on conservation efforts and environmental impact",
            &["Species Count", "Habitat Status", "Conservation Projects", "Environmental Impact", "Future Plans"],
        ),
        template(
            "template-4",
            "Security Summary",
            "security",
            "Summary of security incidents and response actions",
            &["Incident Type", "Location", "Severity", "Response Time", "Resolution", "Preventive Measures"],
        ),
        template(
            "template-5",
            "Financial Overview",
            "finance",
            "Overview of financial performance and budget utilization",
            &["Revenue", "Expenses", "Profit Margin", "Budget Allocation", "Financial Projections"],
        ),
    ]
});

fn template(id: &str, name: &str, kind: &str, description: &str, fields: &[&str]) -> ReportTemplate {
    ReportTemplate {
        id: id.into(),
        name: name.into(),
        template_type: kind.into(),
        description: description.into(),
        fields: fields.iter().map(|f| f.to_string()).collect(),
        is_default: true,
    }
}

struct AnimalSeed {
    id: &'static str,
    name: &'static str,
    species: &'static str,
    age: &'static str,
    gender: &'static str,
    location: &'static str,
    status: AnimalStatus,
    join_date: &'static str,
    chip_id: &'static str,
    endangered: bool,
    weight: &'static str,
    diet: &'static str,
    last_medical: &'static str,
    next_vaccination: &'static str,
    territory: &'static str,
    subspecies: &'static str,
    conservation_status: &'static str,
    family: &'static str,
    behavior: &'static str,
    medical_history: &'static str,
    notes: &'static str,
}

impl From<AnimalSeed> for Animal {
    fn from(s: AnimalSeed) -> Self {
        Animal {
            id: s.id.into(),
            name: s.name.into(),
            species: s.species.into(),
            age: s.age.into(),
            gender: s.gender.into(),
            location: s.location.into(),
            status: s.status,
            join_date: s.join_date.into(),
            chip_id: s.chip_id.into(),
            endangered: s.endangered,
            weight: s.weight.into(),
            diet: s.diet.into(),
            last_medical: s.last_medical.into(),
            next_vaccination: s.next_vaccination.into(),
            territory: s.territory.into(),
            subspecies: s.subspecies.into(),
            conservation_status: s.conservation_status.into(),
            family: s.family.into(),
            behavior: s.behavior.into(),
            medical_history: s.medical_history.into(),
            notes: s.notes.into(),
        }
    }
}

pub fn animals() -> Vec<Animal> {
    vec![
        AnimalSeed {
            id: "A1001",
            name: "Simba",
            species: "Lion",
            age: "5 years",
            gender: "Male",
            location: "Eastern Savanna",
            status: AnimalStatus::Healthy,
            join_date: "12/06/2018",
            chip_id: "KWS-CH-5643",
            endangered: false,
            weight: "190 kg",
            diet: "Carnivore",
            last_medical: "03/15/2024",
            next_vaccination: "05/20/2024",
            territory: "25 sq km",
            subspecies: "East African Lion",
            conservation_status: "Vulnerable",
            family: "Pride of 12",
            behavior: "Dominant male, territorial",
            medical_history: "Regular checkups, vaccinated against common feline diseases",
            notes: "Excellent physical condition, showing strong leadership traits in pride",
        },
        AnimalSeed {
            id: "A1002",
            name: "Tembo",
            species: "Elephant",
            age: "12 years",
            gender: "Female",
            location: "Northern Plains",
            status: AnimalStatus::Healthy,
            join_date: "03/15/2011",
            chip_id: "KWS-CH-1287",
            endangered: false,
            weight: "2,800 kg",
            diet: "Herbivore",
            last_medical: "02/28/2024",
            next_vaccination: "08/15/2024",
            territory: "100 sq km",
            subspecies: "African Bush Elephant",
            conservation_status: "Vulnerable",
            family: "Herd of 15",
            behavior: "Matriarch, protective of calves",
            medical_history: "Regular foot care, dental checkups",
            notes: "Recently gave birth to healthy calf, shows excellent maternal behavior",
        },
        AnimalSeed {
            id: "A1003",
            name: "Kifaru",
            species: "Rhino",
            age: "8 years",
            gender: "Male",
            location: "Protected Reserve",
            status: AnimalStatus::UnderTreatment,
            join_date: "06/23/2015",
            chip_id: "KWS-CH-9823",
            endangered: true,
            weight: "1,500 kg",
            diet: "Herbivore",
            last_medical: "04/10/2024",
            next_vaccination: "06/15/2024",
            territory: "10 sq km",
            subspecies: "Black Rhino",
            conservation_status: "Endangered",
            family: "Group of 5",
            behavior: "Aggressive, territorial",
            medical_history: "Regular anti-poaching patrols, vaccinated against common rhino diseases",
            notes: "Recent injury, showing signs of recovery",
        },
        AnimalSeed {
            id: "A1004",
            name: "Twiga",
            species: "Giraffe",
            age: "7 years",
            gender: "Female",
            location: "Acacia Grove",
            status: AnimalStatus::Healthy,
            join_date: "09/10/2016",
            chip_id: "KWS-CH-4561",
            endangered: false,
            weight: "1,200 kg",
            diet: "Herbivore",
            last_medical: "01/15/2024",
            next_vaccination: "03/15/2024",
            territory: "50 sq km",
            subspecies: "Giraffe",
            conservation_status: "Least Concern",
            family: "Family of 3",
            behavior: "Social, playful",
            medical_history: "Regular foot care, dental checkups",
            notes: "Excellent physical condition, showing good social skills",
        },
        AnimalSeed {
            id: "A1005",
            name: "Chui",
            species: "Leopard",
            age: "4 years",
            gender: "Female",
            location: "Southern Ridge",
            status: AnimalStatus::Monitoring,
            join_date: "02/14/2019",
            chip_id: "KWS-CH-7890",
            endangered: false,
            weight: "60 kg",
            diet: "Carnivore",
            last_medical: "05/01/2024",
            next_vaccination: "07/15/2024",
            territory: "10 sq km",
            subspecies: "Leopard",
            conservation_status: "Least Concern",
            family: "Pride of 2",
            behavior: "Territorial, solitary",
            medical_history: "Regular checkups, vaccinated against common feline diseases",
            notes: "Excellent physical condition, showing good hunting skills",
        },
        AnimalSeed {
            id: "A1006",
            name: "Kiboko",
            species: "Hippo",
            age: "10 years",
            gender: "Male",
            location: "Central Lake",
            status: AnimalStatus::Healthy,
            join_date: "07/22/2013",
            chip_id: "KWS-CH-2345",
            endangered: false,
            weight: "1,800 kg",
            diet: "Herbivore",
            last_medical: "03/15/2024",
            next_vaccination: "05/15/2024",
            territory: "20 sq km",
            subspecies: "Hippo",
            conservation_status: "Least Concern",
            family: "Group of 10",
            behavior: "Social, protective",
            medical_history: "Regular foot care, dental checkups",
            notes: "Excellent physical condition, showing good leadership skills",
        },
        AnimalSeed {
            id: "A1007",
            name: "Duma",
            species: "Cheetah",
            age: "3 years",
            gender: "Male",
            location: "Grassland Plains",
            status: AnimalStatus::Monitoring,
            join_date: "11/05/2020",
            chip_id: "KWS-CH-6759",
            endangered: true,
            weight: "50 kg",
            diet: "Carnivore",
            last_medical: "06/10/2024",
            next_vaccination: "08/15/2024",
            territory: "5 sq km",
            subspecies: "Cheetah",
            conservation_status: "Endangered",
            family: "Pride of 3",
            behavior: "Territorial, solitary",
            medical_history: "Regular checkups, vaccinated against common feline diseases",
            notes: "Excellent physical condition, showing good hunting skills",
        },
    ]
    .into_iter()
    .map(Animal::from)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn health_check(
    id: &str,
    animal_id: &str,
    animal_name: &str,
    date: &str,
    time: &str,
    kind: &str,
    veterinarian: &str,
    status: HealthCheckStatus,
    notes: &str,
) -> HealthCheck {
    HealthCheck {
        id: id.into(),
        animal_id: animal_id.into(),
        animal_name: animal_name.into(),
        date: date.into(),
        time: time.into(),
        check_type: kind.into(),
        veterinarian: veterinarian.into(),
        status,
        notes: notes.into(),
    }
}

pub fn health_checks() -> Vec<HealthCheck> {
    use HealthCheckStatus::*;
    vec![
        health_check("HC001", "A001", "Simba", "2024-03-15", "09:00", "Routine Check-up", "Dr. Smith", Scheduled, "Annual health check-up"),
        health_check("HC002", "A002", "Nala", "2024-03-16", "10:30", "Vaccination", "Dr. Johnson", Scheduled, "Annual vaccination"),
        health_check("HC003", "A003", "Mufasa", "2024-03-14", "14:00", "Emergency", "Dr. Williams", Completed, "Follow-up after injury"),
        health_check("HC004", "A004", "Sarabi", "2024-03-17", "11:00", "Dental Check", "Dr. Brown", Scheduled, "Regular dental examination"),
        health_check("HC005", "A005", "Rafiki", "2024-03-18", "15:30", "Blood Test", "Dr. Davis", Scheduled, "Annual blood work"),
    ]
}

pub fn conservation_projects() -> Vec<ConservationProject> {
    vec![
        ConservationProject {
            id: "CP001".into(),
            name: "Black Rhino Recovery".into(),
            status: ProjectStatus::Active,
            start_date: "2024-01-15".into(),
            end_date: "2026-12-31".into(),
            budget: 4_500_000.0,
            lead: "Dr. Jane Wanjiku".into(),
            location: "Protected Reserve".into(),
            species: "Black Rhino".into(),
            description: "Expand the sanctuary fence line and increase ranger patrols around breeding areas.".into(),
            partners: Some("Save the Rhino, WWF Kenya".into()),
        },
        ConservationProject {
            id: "CP002".into(),
            name: "Elephant Corridor Mapping".into(),
            status: ProjectStatus::Planning,
            start_date: "2025-06-01".into(),
            end_date: "2026-05-31".into(),
            budget: 1_200_000.0,
            lead: "Grace Muthoni".into(),
            location: "Northern Plains".into(),
            species: "African Bush Elephant".into(),
            description: "GPS collar study of seasonal migration routes between the plains and the lake.".into(),
            partners: None,
        },
        ConservationProject {
            id: "CP003".into(),
            name: "Cheetah Den Monitoring".into(),
            status: ProjectStatus::Completed,
            start_date: "2023-02-01".into(),
            end_date: "2024-01-31".into(),
            budget: 650_000.0,
            lead: "Sarah Kimani".into(),
            location: "Grassland Plains".into(),
            species: "Cheetah".into(),
            description: "Camera trap survey of cub survival rates across two breeding seasons.".into(),
            partners: Some("Cheetah Conservation Fund".into()),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    kind: &str,
    visitor: &str,
    date: &str,
    time: &str,
    status: TicketStatus,
    amount: f64,
    payment_method: &str,
) -> Ticket {
    Ticket {
        id: id.into(),
        ticket_type: kind.into(),
        visitor: visitor.into(),
        date: date.into(),
        time: time.into(),
        status,
        amount,
        payment_method: payment_method.into(),
    }
}

pub fn tickets() -> Vec<Ticket> {
    use TicketStatus::*;
    vec![
        ticket("T-4392", "Adult Day Pass", "John Smith", "2025-04-15", "10:00 AM", Active, 45.0, "Credit Card"),
        ticket("T-4393", "Child Day Pass", "Emma Smith", "2025-04-15", "10:00 AM", Active, 25.0, "Credit Card"),
        ticket("T-4375", "Family Package", "David Johnson", "2025-04-14", "09:30 AM", Used, 120.0, "Mobile Money"),
        ticket("T-4356", "Safari Experience", "Sarah Williams", "2025-04-12", "08:00 AM", Used, 75.0, "Bank Transfer"),
        ticket("T-4321", "Adult Day Pass", "Michael Brown", "2025-04-10", "11:00 AM", Expired, 45.0, "Cash"),
        ticket("T-4301", "Group Tour", "Tourist Group A", "2025-04-05", "09:00 AM", Refunded, 350.0, "Credit Card"),
    ]
}

/// Weekday rows with the same hours, plus optional extra days.
fn schedule(weekday_hours: &str, friday_hours: &str, extra: &[(&str, &str)]) -> Vec<ScheduleEntry> {
    let mut rows: Vec<ScheduleEntry> = ["Monday", "Tuesday", "Wednesday", "Thursday"]
        .iter()
        .map(|day| ScheduleEntry::new(day, weekday_hours))
        .collect();
    rows.push(ScheduleEntry::new("Friday", friday_hours));
    rows.extend(extra.iter().map(|(day, hours)| ScheduleEntry::new(day, hours)));
    rows
}

struct StaffSeed {
    id: u32,
    name: &'static str,
    role: &'static str,
    department: Department,
    email: &'static str,
    phone: &'static str,
    location: &'static str,
    start_date: &'static str,
    status: StaffStatus,
    bio: &'static str,
    schedule: Vec<ScheduleEntry>,
}

impl From<StaffSeed> for StaffMember {
    fn from(s: StaffSeed) -> Self {
        StaffMember {
            id: s.id,
            name: s.name.into(),
            role: s.role.into(),
            department: s.department,
            contact_email: s.email.into(),
            contact_phone: s.phone.into(),
            location: s.location.into(),
            start_date: s.start_date.into(),
            status: s.status,
            bio: s.bio.into(),
            schedule: s.schedule,
        }
    }
}

pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffSeed {
            id: 1,
            name: "Dr. Jane Wanjiku",
            role: "Chief Veterinarian",
            department: Department::Veterinary,
            email: "jane.wanjiku@kws.org",
            phone: "+254 712 345 678",
            location: "Main Office",
            start_date: "Apr 2018",
            status: StaffStatus::Active,
            bio: "Dr. Jane Wanjiku is a highly experienced veterinarian with over 15 years of experience in wildlife medicine. She specializes in large animal care and has led numerous conservation projects.",
            schedule: schedule("8:00 AM - 5:00 PM", "8:00 AM - 3:00 PM", &[]),
        },
        StaffSeed {
            id: 2,
            name: "David Ochieng",
            role: "Senior Ranger",
            department: Department::Security,
            email: "david.ochieng@kws.org",
            phone: "+254 723 456 789",
            location: "Eastern Section",
            start_date: "Feb 2015",
            status: StaffStatus::Active,
            bio: "David Ochieng has been protecting wildlife for over 8 years. He leads patrols in the Eastern Section and has extensive experience in anti-poaching operations.",
            schedule: schedule("6:00 AM - 2:00 PM", "6:00 AM - 2:00 PM", &[("Saturday", "6:00 AM - 12:00 PM")]),
        },
        StaffSeed {
            id: 3,
            name: "Sarah Kimani",
            role: "Conservation Officer",
            department: Department::Conservation,
            email: "sarah.kimani@kws.org",
            phone: "+254 734 567 890",
            location: "Main Office",
            start_date: "Nov 2019",
            status: StaffStatus::Active,
            bio: "Sarah Kimani is dedicated to wildlife conservation and environmental education. She develops and implements conservation programs for local communities.",
            schedule: schedule("9:00 AM - 5:00 PM", "9:00 AM - 3:00 PM", &[]),
        },
        StaffSeed {
            id: 4,
            name: "Daniel Njoroge",
            role: "Assistant Veterinarian",
            department: Department::Veterinary,
            email: "daniel.njoroge@kws.org",
            phone: "+254 745 678 901",
            location: "Field Hospital",
            start_date: "Jun 2020",
            status: StaffStatus::Active,
            bio: "Daniel Njoroge assists in veterinary procedures and emergency care for wildlife. He has a special interest in avian medicine and rehabilitation.",
            schedule: schedule("8:00 AM - 4:00 PM", "8:00 AM - 2:00 PM", &[]),
        },
        StaffSeed {
            id: 5,
            name: "Grace Muthoni",
            role: "Research Lead",
            department: Department::Research,
            email: "grace.muthoni@kws.org",
            phone: "+254 756 789 012",
            location: "Main Office",
            start_date: "Aug 2017",
            status: StaffStatus::Active,
            bio: "Grace Muthoni leads research initiatives focused on wildlife behavior and habitat preservation. She has published numerous papers on conservation biology.",
            schedule: schedule("9:00 AM - 5:00 PM", "9:00 AM - 3:00 PM", &[]),
        },
        StaffSeed {
            id: 6,
            name: "Paul Kiprono",
            role: "Senior Ranger",
            department: Department::Security,
            email: "paul.kiprono@kws.org",
            phone: "+254 767 890 123",
            location: "Northern Section",
            start_date: "Apr 2016",
            status: StaffStatus::Leave,
            bio: "Paul Kiprono has extensive experience in wildlife protection and anti-poaching operations. He currently leads the Northern Section security team.",
            schedule: schedule(ON_LEAVE_HOURS, ON_LEAVE_HOURS, &[]),
        },
        StaffSeed {
            id: 7,
            name: "Eunice Akinyi",
            role: "Visitor Operations",
            department: Department::Operations,
            email: "eunice.akinyi@kws.org",
            phone: "+254 778 901 234",
            location: "Visitor Center",
            start_date: "Mar 2021",
            status: StaffStatus::Active,
            bio: "Eunice Akinyi manages visitor experiences and educational programs. She ensures visitors have safe and informative experiences while respecting wildlife.",
            schedule: schedule("8:00 AM - 5:00 PM", "8:00 AM - 5:00 PM", &[("Saturday", "9:00 AM - 3:00 PM")]),
        },
        StaffSeed {
            id: 8,
            name: "James Kamau",
            role: "IT Specialist",
            department: Department::Operations,
            email: "james.kamau@kws.org",
            phone: "+254 789 012 345",
            location: "Main Office",
            start_date: "Jan 2022",
            status: StaffStatus::Active,
            bio: "James Kamau manages the park's IT infrastructure and digital systems. He ensures all technology systems run smoothly to support conservation efforts.",
            schedule: schedule("8:00 AM - 5:00 PM", "8:00 AM - 3:00 PM", &[]),
        },
    ]
    .into_iter()
    .map(StaffMember::from)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    title: &str,
    description: &str,
    kind: &str,
    date: &str,
    author: &str,
    views: u32,
    downloads: u32,
    status: ReportStatus,
) -> Report {
    Report {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        report_type: kind.into(),
        date: date.into(),
        author: author.into(),
        views,
        downloads,
        status,
    }
}

pub fn reports() -> Vec<Report> {
    use ReportStatus::*;
    vec![
        report("RPT-2025-001", "Monthly Health Report", "Summary of animal health metrics for March 2025", "health", "2025-04-01", "Dr. Emily Carter", 125, 32, Published),
        report("RPT-2025-002", "Conservation Status Report", "Detailed analysis of conservation efforts in Q1 2025", "conservation", "2025-04-05", "Dr. James Wilson", 98, 26, Draft),
        report("RPT-2025-003", "Visitor Analytics - March 2025", "Report on visitor demographics and engagement for March", "visitors", "2025-04-10", "Sarah Johnson", 187, 54, Published),
        report("RPT-2025-004", "Wildlife Population Report", "Analysis of wildlife population trends in Sector 7", "wildlife", "2025-04-15", "Ranger David Miller", 76, 19, Published),
        report("RPT-2025-005", "Security Incident Log - March 2025", "Summary of security incidents and response actions", "security", "2025-04-20", "Officer Michael Brown", 63, 12, Published),
        report("RPT-2025-006", "Financial Performance - Q1 2025", "Overview of financial performance and budget utilization", "finance", "2025-04-25", "Accountant Lisa Green", 112, 29, Published),
        report("RPT-2025-007", "Education Program Report", "Evaluation of education program effectiveness", "education", "2025-04-30", "Educator John Taylor", 89, 21, Published),
        report("RPT-2025-008", "Staff Training Report", "Summary of staff training activities and outcomes", "staff", "2025-05-05", "HR Manager Susan White", 54, 15, Published),
        report("RPT-2025-009", "Infrastructure Maintenance Report", "Report on infrastructure maintenance and repairs", "infrastructure", "2025-05-10", "Engineer Robert Clark", 78, 18, Published),
    ]
}

#[allow(clippy::too_many_arguments)]
fn inventory_item(
    id: &str,
    name: &str,
    category: &str,
    quantity: u32,
    unit: &str,
    expiry_date: &str,
    supplier: &str,
    location: &str,
    status: StockStatus,
) -> InventoryItem {
    InventoryItem {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        quantity,
        unit: unit.into(),
        expiry_date: expiry_date.into(),
        supplier: supplier.into(),
        location: location.into(),
        status,
    }
}

pub fn inventory() -> Vec<InventoryItem> {
    use StockStatus::*;
    vec![
        inventory_item("MED001", "Antibiotics", "Medications", 50, "tablets", "2024-12-31", "PharmaCorp", "Storage Room A", InStock),
        inventory_item("MED002", "Painkillers", "Medications", 100, "tablets", "2024-10-15", "MediSupply", "Storage Room A", InStock),
        inventory_item("MED003", "Bandages", "Supplies", 200, "rolls", "2025-06-30", "FirstAid Inc", "Storage Room B", InStock),
        inventory_item("MED004", "Vaccines", "Vaccines", 30, "doses", "2024-08-20", "VaxPharm", "Refrigerator 1", LowStock),
        inventory_item("MED005", "Surgical Gloves", "Supplies", 500, "pairs", "2025-03-15", "SafetyFirst", "Storage Room B", InStock),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Record;
    use std::collections::HashSet;

    fn assert_unique<T: Record>(items: &[T]) {
        let ids: HashSet<String> = items.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), items.len(), "{}", T::ENTITY);
    }

    #[test]
    fn test_seed_counts() {
        assert_eq!(animals().len(), 7);
        assert_eq!(health_checks().len(), 5);
        assert_eq!(tickets().len(), 6);
        assert_eq!(staff().len(), 8);
        assert_eq!(reports().len(), 9);
        assert_eq!(inventory().len(), 5);
        assert_eq!(REPORT_TEMPLATES.len(), 5);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        assert_unique(&animals());
        assert_unique(&health_checks());
        assert_unique(&conservation_projects());
        assert_unique(&tickets());
        assert_unique(&staff());
        assert_unique(&reports());
        assert_unique(&inventory());
    }

    #[test]
    fn test_staff_schedules_keep_day_order() {
        let eunice = staff().into_iter().find(|s| s.id == 7).unwrap();
        let days: Vec<_> = eunice.schedule.iter().map(|e| e.day.as_str()).collect();
        assert_eq!(
            days,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
    }
}
