pub mod date_input;
pub mod page_header;
pub mod table_totals_row;
