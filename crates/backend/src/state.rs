use std::sync::Arc;

use contracts::domain::a001_animal::aggregate::Animal;
use contracts::domain::a002_health_check::aggregate::HealthCheck;
use contracts::domain::a003_conservation_project::aggregate::ConservationProject;
use contracts::domain::a004_ticket::aggregate::Ticket;
use contracts::domain::a005_staff_member::aggregate::StaffMember;
use contracts::domain::a006_report::aggregate::Report;
use contracts::domain::a007_inventory_item::aggregate::InventoryItem;

use crate::shared::config::Config;
use crate::shared::data::seed::{self, first_sequence};
use crate::shared::data::store::Repository;
use crate::system::auth::{Authenticator, InMemoryAuthenticator};

//=========================================================================================
// AppState (shared by every handler)
//=========================================================================================

/// Built once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub authenticator: Arc<dyn Authenticator>,
    pub animals: Arc<Repository<Animal>>,
    pub health_checks: Arc<Repository<HealthCheck>>,
    pub conservation_projects: Arc<Repository<ConservationProject>>,
    pub tickets: Arc<Repository<Ticket>>,
    pub staff: Arc<Repository<StaffMember>>,
    pub reports: Arc<Repository<Report>>,
    pub inventory: Arc<Repository<InventoryItem>>,
}

fn repository<T, F>(demo_data: bool, seed: F, first: u64) -> Arc<Repository<T>>
where
    T: contracts::domain::common::Record,
    F: FnOnce() -> Vec<T>,
{
    let items = if demo_data { seed() } else { Vec::new() };
    Arc::new(Repository::with_items(items, first))
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let demo = config.seed.demo_data;
        let authenticator = InMemoryAuthenticator::with_demo_accounts(&config.auth.allowed_domain);
        let state = Self {
            authenticator: Arc::new(authenticator),
            animals: repository(demo, seed::animals, first_sequence::ANIMALS),
            health_checks: repository(demo, seed::health_checks, first_sequence::HEALTH_CHECKS),
            conservation_projects: repository(
                demo,
                seed::conservation_projects,
                first_sequence::CONSERVATION_PROJECTS,
            ),
            tickets: repository(demo, seed::tickets, first_sequence::TICKETS),
            staff: repository(demo, seed::staff, first_sequence::STAFF),
            reports: repository(demo, seed::reports, first_sequence::REPORTS),
            inventory: repository(demo, seed::inventory, first_sequence::INVENTORY),
            config: Arc::new(config),
        };
        tracing::info!(
            "Store ready: {} animals, {} health checks, {} projects, {} tickets, {} staff, {} reports, {} inventory items",
            state.animals.len(),
            state.health_checks.len(),
            state.conservation_projects.len(),
            state.tickets.len(),
            state.staff.len(),
            state.reports.len(),
            state.inventory.len()
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state() {
        let state = AppState::new(Config::default());
        assert_eq!(state.animals.len(), 7);
        assert_eq!(state.reports.len(), 9);
        assert_eq!(state.inventory.len(), 5);
    }

    #[test]
    fn test_empty_state_starts_numbering_from_first_sequence() {
        let mut config = Config::default();
        config.seed.demo_data = false;
        let state = AppState::new(config);
        assert!(state.tickets.is_empty());
        assert!(state.staff.is_empty());

        let ticket = crate::domain::a004_ticket::service::create(
            &state.tickets,
            contracts::domain::a004_ticket::aggregate::TicketDto {
                ticket_type: "Adult Day Pass".into(),
                visitor: "Jo Mwangi".into(),
                date: "2025-05-01".into(),
                time: "10:00 AM".into(),
                amount: "45".into(),
                payment_method: "Cash".into(),
                status: None,
            },
        )
        .unwrap();
        assert_eq!(ticket.id, "T-4301");
    }
}
