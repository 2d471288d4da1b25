use contracts::domain::a004_ticket::aggregate::{Ticket, TicketDto};
use contracts::shared::list_query::{ListPage, ListQuery};

use crate::domain::common;
use crate::shared::data::store::Repository;

pub fn list(repo: &Repository<Ticket>, query: &ListQuery) -> ListPage<Ticket> {
    common::list(repo, query)
}

pub fn get_by_id(repo: &Repository<Ticket>, id: &str) -> anyhow::Result<Ticket> {
    common::get(repo, id)
}

pub fn create(repo: &Repository<Ticket>, dto: TicketDto) -> anyhow::Result<Ticket> {
    common::validated(dto.validate())?;
    Ok(common::insert(repo, Ticket::new_for_insert(dto)))
}

pub fn update(repo: &Repository<Ticket>, id: &str, dto: TicketDto) -> anyhow::Result<Ticket> {
    common::validated(dto.validate())?;
    common::update(repo, id, |ticket| ticket.update(dto))
}

pub fn delete(repo: &Repository<Ticket>, id: &str) -> anyhow::Result<Ticket> {
    common::delete(repo, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use contracts::domain::a004_ticket::aggregate::TicketStatus;
    use contracts::shared::list_query::resolve_sort;

    fn repo() -> Repository<Ticket> {
        Repository::with_items(seed::tickets(), seed::first_sequence::TICKETS)
    }

    fn form() -> TicketDto {
        TicketDto {
            ticket_type: "Safari Experience".into(),
            visitor: "Amani Otieno".into(),
            date: "2025-04-16".into(),
            time: "08:00 AM".into(),
            amount: "75".into(),
            payment_method: "Mobile Money".into(),
            status: None,
        }
    }

    #[test]
    fn test_newest_first_by_default_preset() {
        let sort = resolve_sort::<Ticket>("newest", None).unwrap();
        let page = list(&repo(), &ListQuery::new().sorted_by(sort));
        let ids: Vec<_> = page.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T-4392", "T-4393", "T-4375", "T-4356", "T-4321", "T-4301"]);
    }

    #[test]
    fn test_create_takes_next_number() {
        let repo = repo();
        let ticket = create(&repo, form()).unwrap();
        assert_eq!(ticket.id, "T-4394");
        assert_eq!(ticket.status, TicketStatus::Active);
    }

    #[test]
    fn test_update_keeps_status_unless_given() {
        let repo = repo();
        let ticket = update(&repo, "T-4375", form()).unwrap();
        assert_eq!(ticket.status, TicketStatus::Used);
        assert_eq!(ticket.visitor, "Amani Otieno");

        let mut refund = form();
        refund.status = Some(TicketStatus::Refunded);
        let ticket = update(&repo, "T-4375", refund).unwrap();
        assert_eq!(ticket.status, TicketStatus::Refunded);
    }
}
