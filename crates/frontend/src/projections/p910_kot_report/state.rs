use chrono::{Local, NaiveDateTime};
use contracts::projections::p910_kot_report::dto::{KotItemDto, KotItemsResponse};
use contracts::projections::p910_kot_report::range::{format_report_date, ReportDateRange};
use leptos::prelude::*;

use crate::config::config;
use crate::shared::export::{CellValue, ExcelExportable};

pub const EXPORT_FILENAME: &str = "KOT_Report.xlsx";
pub const SHEET_NAME: &str = "KOT_Report";

/// One displayed line of the report, numbered over the visible rows
#[derive(Clone, Debug, PartialEq)]
pub struct KotReportRow {
    pub sr_no: usize,
    pub date: String,
    pub item_name: String,
    pub quantity: f64,
}

impl ExcelExportable for KotReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Menu Name", "Quantity"]
    }

    fn to_excel_row(&self) -> Vec<CellValue> {
        vec![
            self.date.as_str().into(),
            self.item_name.as_str().into(),
            self.quantity.into(),
        ]
    }
}

/// Whole numbers without decimals, everything else with two
pub fn format_quantity(value: f64) -> String {
    if (value.round() - value).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KotReportState {
    pub range: ReportDateRange,
    pub items: Vec<KotItemDto>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the most recently issued fetch
    pub request_seq: u64,
}

impl KotReportState {
    /// Both bounds start on the trading day at `now`
    pub fn new(now: NaiveDateTime, cutoff_hour: u32) -> Self {
        Self {
            range: ReportDateRange::business_day(now, cutoff_hour),
            items: Vec::new(),
            loading: false,
            error: None,
            request_seq: 0,
        }
    }

    pub fn set_start_date(&mut self, value: String) {
        self.range.start = value;
    }

    pub fn set_end_date(&mut self, value: String) {
        self.range.end = value;
    }

    /// Marks a new fetch as in flight and returns its id
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Applies the outcome of fetch `seq`.
    ///
    /// Returns `false` and leaves the state untouched when a newer fetch has
    /// been issued since. A failed fetch keeps the previous items.
    pub fn apply_response(&mut self, seq: u64, result: Result<KotItemsResponse, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(response) => {
                self.items = response.items;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        self.loading = false;
        true
    }

    /// Items inside the selected range, in fetch order
    pub fn visible_items(&self) -> Vec<&KotItemDto> {
        self.range.select(&self.items)
    }

    /// Rows shared by the table, the spreadsheet and the print document
    pub fn rows(&self) -> Vec<KotReportRow> {
        self.visible_items()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| KotReportRow {
                sr_no: idx + 1,
                date: format_report_date(&item.date),
                item_name: item.item_name.clone(),
                quantity: item.total_quantity,
            })
            .collect()
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<KotReportState> {
    let now = Local::now().naive_local();
    RwSignal::new(KotReportState::new(now, config().report.day_cutoff_hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::sheet_rows;

    fn item(date: &str, name: &str, qty: f64) -> KotItemDto {
        KotItemDto {
            date: date.to_string(),
            item_name: name.to_string(),
            total_quantity: qty,
        }
    }

    fn state_on(day: &str) -> KotReportState {
        let now = NaiveDateTime::parse_from_str(&format!("{} 12:00:00", day), "%Y-%m-%d %H:%M:%S")
            .unwrap();
        KotReportState::new(now, 3)
    }

    fn with_range(start: &str, end: &str, items: Vec<KotItemDto>) -> KotReportState {
        let mut state = state_on("2024-01-05");
        state.range = ReportDateRange::new(start, end);
        state.items = items;
        state
    }

    #[test]
    fn test_new_state_uses_business_day() {
        let early = NaiveDateTime::parse_from_str("2024-01-05 02:59:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let state = KotReportState::new(early, 3);
        assert_eq!(state.range, ReportDateRange::new("2024-01-04", "2024-01-04"));
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_successful_fetch_replaces_items() {
        let mut state = state_on("2024-01-05");
        let seq = state.begin_fetch();
        assert!(state.loading);

        let response = KotItemsResponse {
            items: vec![item("2024-01-05", "Tea", 3.0)],
        };
        assert!(state.apply_response(seq, Ok(response)));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut state = with_range("2024-01-01", "2024-01-10", vec![item("2024-01-05", "Tea", 3.0)]);
        let before = state.items.clone();

        let seq = state.begin_fetch();
        assert!(state.apply_response(seq, Err("Request failed: offline".to_string())));

        assert_eq!(state.items, before);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Request failed: offline"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = state_on("2024-01-05");
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        let newer = KotItemsResponse {
            items: vec![item("2024-01-05", "Coffee", 1.0)],
        };
        let older = KotItemsResponse {
            items: vec![item("2024-01-04", "Tea", 9.0)],
        };

        assert!(state.apply_response(second, Ok(newer)));
        assert!(!state.apply_response(first, Ok(older)));
        assert_eq!(state.items[0].item_name, "Coffee");
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut state = state_on("2024-01-05");
        let first = state.begin_fetch();
        let _second = state.begin_fetch();

        assert!(!state.apply_response(first, Err("timeout".to_string())));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_rows_are_numbered_over_visible_items() {
        let state = with_range(
            "2024-01-01",
            "2024-01-10",
            vec![
                item("2023-12-31", "Idli", 2.0),
                item("2024-01-01", "Tea", 3.0),
                item("2024-02-01", "Vada", 1.0),
                item("2024-01-10", "Dosa", 4.0),
            ],
        );

        let rows = state.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].sr_no, rows[0].item_name.as_str()), (1, "Tea"));
        assert_eq!((rows[1].sr_no, rows[1].item_name.as_str()), (2, "Dosa"));
        assert_eq!(rows[1].date, "10/01/2024");
    }

    #[test]
    fn test_cleared_bound_shows_all_items() {
        let items = vec![item("2023-12-31", "Idli", 2.0), item("2024-01-05", "Tea", 3.0)];

        let bounded = with_range("2024-01-01", "2024-01-10", items.clone());
        assert_eq!(bounded.rows().len(), 1);
        assert_eq!(bounded.range.label(), "01/01/2024 - 10/01/2024");

        let mut cleared = bounded.clone();
        cleared.set_end_date(String::new());
        assert_eq!(cleared.rows().len(), 2);
        assert_eq!(cleared.range.label(), "(All Dates)");

        let mut cleared = bounded;
        cleared.set_start_date(String::new());
        assert_eq!(cleared.rows().len(), 2);
    }

    #[test]
    fn test_export_rows_for_single_item() {
        let state = with_range("2024-01-01", "2024-01-10", vec![item("2024-01-05", "Tea", 3.0)]);

        let rows = sheet_rows(&state.rows());
        assert_eq!(
            rows,
            vec![
                vec![
                    CellValue::from("Date"),
                    CellValue::from("Menu Name"),
                    CellValue::from("Quantity"),
                ],
                vec![
                    CellValue::from("05/01/2024"),
                    CellValue::from("Tea"),
                    CellValue::Number(3.0),
                ],
            ]
        );
    }

    #[test]
    fn test_export_of_empty_range_is_header_only() {
        let state = with_range("2024-01-01", "2024-01-10", vec![item("2024-03-01", "Tea", 3.0)]);
        assert_eq!(sheet_rows(&state.rows()).len(), 1);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(2.5), "2.50");
    }
}
