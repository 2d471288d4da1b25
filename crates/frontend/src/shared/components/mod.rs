pub mod list_toolbar;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod stat_card;
