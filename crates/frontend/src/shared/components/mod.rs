pub mod page_header;
pub mod record_table;
pub mod stat_card;
pub mod ui;
