use contracts::projections::p910_kot_report::range::ReportDateRange;

use super::state::{format_quantity, KotReportRow, KotReportState};
use crate::shared::print::{print_document, PrintOutcome, PrintTarget};

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Standalone document for 80 mm roll printers
pub fn render_print_html(range: &ReportDateRange, rows: &[KotReportRow]) -> String {
    let body_rows: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr class=\"bg-gray-100\"><td class=\"value\">{}</td><td class=\"vertical-line value\">{}</td><td class=\"vertical-line value\">{}</td></tr>",
                esc(&row.date),
                esc(&row.item_name),
                format_quantity(row.quantity)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8"/>
<title>Report</title>
<style>
@page {{ size: 80mm 297mm; margin: 2mm; }}
body {{ font-family: Arial, sans-serif; margin: 0; padding: 0; display: flex; flex-direction: column; align-items: center; }}
.report-header {{ color: black; font-size: 10px; padding: 10px; text-align: center; }}
.date-range {{ font-size: 13px; margin: -4px 0; text-align: left; }}
.report-content {{ margin-top: 10px; width: 100%; overflow-x: auto; }}
.table {{ width: 100%; border-collapse: collapse; }}
.table th, .table td {{ padding: 5px; font-size: 10px; text-align: center; border: 1px solid black; word-wrap: break-word; max-width: 100px; overflow: hidden; }}
.table .vertical-line {{ border-left: 1px solid black; border-right: 1px solid black; }}
.bg-gray-100 {{ border-bottom: 1px solid black; padding: 1px; }}
.label, .value {{ font-weight: normal; }}
</style>
</head>
<body>
<div class="report-header">KOT Report</div>
<div class="date-range">Date Range: {}</div>
<div class="report-content">
<table class="table">
<thead><tr class="bg-gray-100"><th class="label">Date</th><th class="vertical-line label">Menu Name</th><th class="vertical-line label">Quantity</th></tr></thead>
<tbody>{}</tbody>
</table>
</div>
</body>
</html>"#,
        esc(&range.label()),
        body_rows
    )
}

/// Prints the rows currently visible in `state`. Never mutates the state.
pub fn print_report<T: PrintTarget>(
    target: &T,
    state: &KotReportState,
) -> Result<PrintOutcome, String> {
    let html = render_print_html(&state.range, &state.rows());
    print_document(target, &html)
}
