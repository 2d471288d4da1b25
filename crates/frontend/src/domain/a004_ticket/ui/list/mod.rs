use contracts::domain::a004_ticket::aggregate::{
    status_counts, Ticket, TicketStatus, DEFAULT_TICKET_SORT, PAYMENT_METHODS, TICKET_TYPES,
};
use contracts::shared::list_query::{run_query, SENTINEL_ALL};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_toolbar::{ExportButtons, FilterSelect, FilterTabs, SearchBox, SortSelect};
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::format::{format_money, status_badge_class};
use crate::shared::list_utils::{ListControls, Records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// "All Tickets (6)", "Active (2)", ... in a fixed order.
fn tabs_with_counts(tickets: &[Ticket]) -> Vec<(String, String)> {
    let mut tabs = vec![(SENTINEL_ALL.to_string(), format!("All Tickets ({})", tickets.len()))];
    tabs.extend(
        status_counts(tickets)
            .into_iter()
            .map(|(status, count)| (status.as_str().to_string(), format!("{} ({})", status.label(), count))),
    );
    tabs
}

fn revenue(tickets: &[Ticket]) -> f64 {
    tickets
        .iter()
        .filter(|t| t.status != TicketStatus::Refunded)
        .map(|t| t.amount)
        .sum()
}

fn options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
pub fn TicketList() -> impl IntoView {
    let records = Records::<Ticket>::load("/api/tickets");
    let controls = RwSignal::new(ListControls::new(DEFAULT_TICKET_SORT, true, 0));

    let page = Memo::new(move |_| {
        records
            .items
            .with(|items| controls.with(|c| run_query(items, &c.to_query::<Ticket>())))
    });
    let tabs = Memo::new(move |_| records.items.with(|items| tabs_with_counts(items)));

    view! {
        <PageFrame entity="a004_ticket" category=PAGE_CAT_LIST title="Ticketing">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Ticketing"</h1>
                    <span class="page__subtitle">
                        {move || page.with(|p| format!("Revenue of listed tickets: {}", format_money(revenue(&p.items))))}
                    </span>
                </div>
                <div class="page__header-right">
                    <ExportButtons entity="tickets" controls=controls />
                </div>
            </div>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchBox controls=controls placeholder="Search tickets..." />
                    <FilterSelect controls=controls field="type" all_label="All Ticket Types" options=options(TICKET_TYPES) />
                    <FilterSelect controls=controls field="paymentMethod" all_label="All Payment Methods" options=options(PAYMENT_METHODS) />
                    <SortSelect
                        controls=controls
                        options=vec![("newest", "Newest first"), ("oldest", "Oldest first"), ("price", "Highest price")]
                    />
                </div>

                <FilterTabs controls=controls field="status" tabs=tabs />

                {move || records.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Ticket" sort_field="id" controls=controls min_width=90.0 />
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <SortableHeaderCell label="Visitor" sort_field="visitor" controls=controls min_width=160.0 />
                                <SortableHeaderCell label="Date" sort_field="date" controls=controls />
                                <SortableHeaderCell label="Amount" sort_field="amount" controls=controls />
                                <TableHeaderCell>"Payment"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|ticket| ticket.id.clone()
                                children=move |ticket: Ticket| {
                                    let status = ticket.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{ticket.id.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{ticket.ticket_type.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{ticket.visitor.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} {}", ticket.date, ticket.time)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{format_money(ticket.amount)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{ticket.payment_method.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty()) && !records.loading.get()>
                        <div class="table__empty">
                            {move || controls.with(|c| {
                                if c.search.trim().is_empty() {
                                    "No tickets found.".to_string()
                                } else {
                                    format!("No tickets found matching \"{}\"", c.search.trim())
                                }
                            })}
                        </div>
                    </Show>
                </div>

                <div class="list-footer">
                    <span class="list-footer__label">{move || page.with(|p| p.showing_label("tickets"))}</span>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, status: TicketStatus, amount: f64) -> Ticket {
        Ticket {
            id: id.into(),
            ticket_type: "Adult Day Pass".into(),
            visitor: "John Smith".into(),
            date: "2025-04-15".into(),
            time: "10:00 AM".into(),
            status,
            amount,
            payment_method: "Cash".into(),
        }
    }

    #[test]
    fn test_tabs_with_counts() {
        let tickets = vec![
            ticket("T-1", TicketStatus::Active, 45.0),
            ticket("T-2", TicketStatus::Active, 25.0),
            ticket("T-3", TicketStatus::Refunded, 75.0),
        ];
        let tabs = tabs_with_counts(&tickets);
        assert_eq!(tabs[0], ("all".to_string(), "All Tickets (3)".to_string()));
        assert!(tabs.contains(&("active".to_string(), "Active (2)".to_string())));
        assert!(tabs.contains(&("refunded".to_string(), "Refunded (1)".to_string())));
        assert_eq!(revenue(&tickets), 70.0);
    }
}
