use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use super::dto::KotItemDto;

/// Hour before which the previous calendar day is still the trading day
pub const DEFAULT_DAY_CUTOFF_HOUR: u32 = 3;

/// Label used when at least one bound of the range is cleared
pub const ALL_DATES_LABEL: &str = "(All Dates)";

const ISO_DATE: &str = "%Y-%m-%d";
const REPORT_DATE: &str = "%d/%m/%Y";

/// Calendar date of the trading day at `now`.
///
/// A restaurant closing after midnight keeps booking tickets on the previous
/// day until `cutoff_hour` local time.
pub fn business_date(now: NaiveDateTime, cutoff_hour: u32) -> NaiveDate {
    let today = now.date();
    if now.hour() < cutoff_hour {
        today - Duration::days(1)
    } else {
        today
    }
}

/// Parses an item or bound date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM:SS[.f]` and RFC 3339
/// timestamps; the latter are shifted into `tz` before taking the date.
pub fn parse_report_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    parse_report_date_in(value, &Local)
}

/// Formats a date as DD/MM/YYYY; unparseable input is returned verbatim
pub fn format_report_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> String {
    match parse_report_date_in(value, tz) {
        Some(date) => date.format(REPORT_DATE).to_string(),
        None => value.to_string(),
    }
}

pub fn format_report_date(value: &str) -> String {
    format_report_date_in(value, &Local)
}

/// Selected report period, both bounds in `YYYY-MM-DD` as produced by a
/// native date input. Either bound may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDateRange {
    pub start: String,
    pub end: String,
}

impl ReportDateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Single-day range on the trading day at `now`
    pub fn business_day(now: NaiveDateTime, cutoff_hour: u32) -> Self {
        let day = business_date(now, cutoff_hour).format(ISO_DATE).to_string();
        Self::new(day.clone(), day)
    }

    /// Both bounds set; otherwise every item is shown
    pub fn is_bounded(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    pub fn label(&self) -> String {
        if !self.is_bounded() {
            return ALL_DATES_LABEL.to_string();
        }
        format!(
            "{} - {}",
            format_report_date(&self.start),
            format_report_date(&self.end)
        )
    }

    /// Inclusive calendar comparison of `item_date` against the bounds.
    ///
    /// An unbounded range accepts everything, including unparseable dates.
    /// A bounded range rejects any date it cannot place on the calendar.
    pub fn contains_in<Tz: TimeZone>(&self, item_date: &str, tz: &Tz) -> bool {
        if !self.is_bounded() {
            return true;
        }
        let bounds = (
            parse_report_date_in(&self.start, tz),
            parse_report_date_in(&self.end, tz),
            parse_report_date_in(item_date, tz),
        );
        match bounds {
            (Some(start), Some(end), Some(date)) => start <= date && date <= end,
            _ => false,
        }
    }

    pub fn contains(&self, item_date: &str) -> bool {
        self.contains_in(item_date, &Local)
    }

    /// Items inside the range, in fetch order
    pub fn select_in<'a, Tz: TimeZone>(
        &self,
        items: &'a [KotItemDto],
        tz: &Tz,
    ) -> Vec<&'a KotItemDto> {
        items
            .iter()
            .filter(|item| self.contains_in(&item.date, tz))
            .collect()
    }

    pub fn select<'a>(&self, items: &'a [KotItemDto]) -> Vec<&'a KotItemDto> {
        self.select_in(items, &Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn item(date: &str, name: &str) -> KotItemDto {
        KotItemDto {
            date: date.to_string(),
            item_name: name.to_string(),
            total_quantity: 1.0,
        }
    }

    #[test]
    fn test_business_date_before_cutoff_is_previous_day() {
        let range = ReportDateRange::business_day(at("2024-03-01", "02:59:59"), 3);
        assert_eq!(range, ReportDateRange::new("2024-02-29", "2024-02-29"));
    }

    #[test]
    fn test_business_date_at_cutoff_is_same_day() {
        let range = ReportDateRange::business_day(at("2024-03-01", "03:00:00"), 3);
        assert_eq!(range, ReportDateRange::new("2024-03-01", "2024-03-01"));
    }

    #[test]
    fn test_business_date_crosses_year() {
        assert_eq!(
            business_date(at("2025-01-01", "00:10:00"), DEFAULT_DAY_CUTOFF_HOUR),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = ReportDateRange::new("2024-01-01", "2024-01-10");
        assert!(range.contains_in("2024-01-01", &Utc));
        assert!(range.contains_in("2024-01-10", &Utc));
        assert!(!range.contains_in("2023-12-31", &Utc));
        assert!(!range.contains_in("2024-01-11", &Utc));
    }

    #[test]
    fn test_contains_across_month_boundary() {
        // "31/01/2024" > "01/02/2024" as text, but not on the calendar
        let range = ReportDateRange::new("2024-01-25", "2024-02-05");
        assert!(range.contains_in("2024-01-31", &Utc));
        assert!(range.contains_in("2024-02-01", &Utc));
        assert!(!range.contains_in("2024-02-06", &Utc));
    }

    #[test]
    fn test_contains_across_year_boundary() {
        let range = ReportDateRange::new("2023-12-30", "2024-01-02");
        assert!(range.contains_in("2023-12-31", &Utc));
        assert!(range.contains_in("2024-01-01", &Utc));
        assert!(!range.contains_in("2024-12-31", &Utc));
    }

    #[test]
    fn test_unbounded_range_accepts_everything() {
        for range in [
            ReportDateRange::new("", "2024-01-10"),
            ReportDateRange::new("2024-01-01", ""),
            ReportDateRange::new("", ""),
        ] {
            assert!(!range.is_bounded());
            assert_eq!(range.label(), ALL_DATES_LABEL);
            assert!(range.contains_in("1999-01-01", &Utc));
            assert!(range.contains_in("not a date", &Utc));
        }
    }

    #[test]
    fn test_bounded_range_rejects_unparseable_dates() {
        let range = ReportDateRange::new("2024-01-01", "2024-01-10");
        assert!(range.is_bounded());
        assert!(!range.contains_in("", &Utc));
        assert!(!range.contains_in("05/01/2024", &Utc));

        let broken = ReportDateRange::new("garbage", "2024-01-10");
        assert!(!broken.contains_in("2024-01-05", &Utc));
    }

    #[test]
    fn test_label_formats_both_bounds() {
        let range = ReportDateRange::new("2024-01-01", "2024-01-10");
        assert_eq!(range.label(), "01/01/2024 - 10/01/2024");
    }

    #[test]
    fn test_parse_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_report_date_in("2024-01-05T10:15:00", &Utc), expected);
        assert_eq!(parse_report_date_in("2024-01-05T10:15:00.123", &Utc), expected);
        assert_eq!(parse_report_date_in("2024-01-05T10:15:00Z", &Utc), expected);

        // Midnight in UTC+05:30 stored as UTC the evening before
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(parse_report_date_in("2024-01-04T18:30:00.000Z", &ist), expected);
    }

    #[test]
    fn test_format_report_date() {
        assert_eq!(format_report_date_in("2024-01-05", &Utc), "05/01/2024");
        assert_eq!(format_report_date_in("2024-12-31T23:59:59Z", &Utc), "31/12/2024");
        assert_eq!(format_report_date_in("invalid", &Utc), "invalid");
    }

    #[test]
    fn test_select_keeps_order() {
        let items = vec![
            item("2024-01-03", "Tea"),
            item("2023-12-31", "Coffee"),
            item("2024-01-01", "Dosa"),
            item("2024-01-11", "Idli"),
        ];
        let range = ReportDateRange::new("2024-01-01", "2024-01-10");

        let names: Vec<&str> = range
            .select_in(&items, &Utc)
            .iter()
            .map(|i| i.item_name.as_str())
            .collect();
        assert_eq!(names, vec!["Tea", "Dosa"]);
    }
}
