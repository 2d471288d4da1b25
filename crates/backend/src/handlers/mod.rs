pub mod a001_animal;
pub mod a002_health_check;
pub mod a003_conservation_project;
pub mod a004_ticket;
pub mod a005_staff_member;
pub mod a006_report;
pub mod a007_inventory_item;
pub mod export;
pub mod list_params;
