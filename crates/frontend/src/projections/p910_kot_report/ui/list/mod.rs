use contracts::projections::p910_kot_report::range::ReportDateRange;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p910_kot_report::api;
use crate::projections::p910_kot_report::print::print_report;
use crate::projections::p910_kot_report::state::{
    create_state, format_quantity, EXPORT_FILENAME, SHEET_NAME,
};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::export::export_to_excel;
use crate::shared::print::{BrowserPrintTarget, PrintOutcome};

const CELL_STYLE: &str = "border: 1px solid #d1d5db; padding: 4px; text-align: center;";
const NAME_CELL_STYLE: &str = "border: 1px solid #d1d5db; padding: 4px;";
const HEADER_CELL_STYLE: &str = "border: 1px solid #d1d5db; padding: 8px;";

#[component]
pub fn KotReportList() -> impl IntoView {
    let state = create_state();

    // Only the range drives fetching; item updates must not retrigger it
    let range = Memo::new(move |_| state.with(|s| s.range.clone()));
    let rows = Memo::new(move |_| state.with(|s| s.rows()));

    let load_items = move |range: ReportDateRange| {
        let Some(seq) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_kot_items(&range).await;
            if let Err(e) = &result {
                log!("Failed to fetch KOT items: {}", e);
            }
            let applied = state
                .try_update(|s| s.apply_response(seq, result))
                .unwrap_or(false);
            if !applied {
                warn!("Discarded stale KOT response #{}", seq);
            }
        });
    };

    // Fetch on mount and on every range change
    Effect::new(move |_| {
        load_items(range.get());
    });

    let on_export = move |_| {
        let data = rows.get_untracked();
        if let Err(e) = export_to_excel(&data, EXPORT_FILENAME, SHEET_NAME) {
            log!("Failed to export: {}", e);
            state.update(|s| s.error = Some(format!("Export failed: {}", e)));
        }
    };

    let on_print = move |_| {
        let result = BrowserPrintTarget::current()
            .and_then(|target| state.with_untracked(|s| print_report(&target, s)));
        match result {
            Ok(PrintOutcome::Printed) => log!("KOT report sent to printer"),
            Ok(PrintOutcome::PopupBlocked) => {}
            Err(e) => {
                log!("Failed to print: {}", e);
                state.update(|s| s.error = Some(format!("Print failed: {}", e)));
            }
        }
    };

    let start_date = Signal::derive(move || state.with(|s| s.range.start.clone()));
    let end_date = Signal::derive(move || state.with(|s| s.range.end.clone()));
    let range_label = Signal::derive(move || range.with(|r| r.label()));

    view! {
        <div class="kot-report font-sans" style="max-width: 72rem; margin: 0 auto; padding: 0 16px;">
            <PageHeader title="KOT Report" subtitle=range_label>
                <label style="font-weight: 600;">"Start Date:"</label>
                <DateInput
                    value=start_date
                    on_change=move |val| state.update(|s| s.set_start_date(val))
                    label="Start Date"
                />
                <label>"End Date:"</label>
                <DateInput
                    value=end_date
                    on_change=move |val| state.update(|s| s.set_end_date(val))
                    label="End Date"
                />
                <button
                    on:click=move |_| load_items(range.get_untracked())
                    style="padding: 4px 12px; border: none; border-radius: 9999px; font-size: 0.875rem; font-weight: 700; color: #2563eb; background: #dbeafe; cursor: pointer;"
                >
                    "Refresh"
                </button>
                <button
                    on:click=on_export
                    style="padding: 4px 12px; border: none; border-radius: 9999px; font-size: 0.875rem; font-weight: 700; color: #ea580c; background: #ffedd5; cursor: pointer;"
                >
                    "Export to Excel"
                </button>
                <button
                    on:click=on_print
                    style="padding: 4px 16px; border: none; border-radius: 9999px; font-size: 0.875rem; font-weight: 700; color: #16a34a; background: #bbf7d0; cursor: pointer;"
                >
                    "Print"
                </button>
            </PageHeader>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="kot-report__error" role="alert" style="margin-bottom: 12px; padding: 8px 12px; border-radius: 6px; background: #fee2e2; color: #b91c1c; font-size: 0.875rem;">
                    {err}
                </div>
            })}

            {move || state.with(|s| s.loading).then(|| view! {
                <div class="kot-report__loading" style="margin-bottom: 8px; color: #6b7280;">"Loading..."</div>
            })}

            <table class="data-table" style="width: 100%; border-collapse: collapse; border: 1px solid #d1d5db;">
                <thead style="background: #e5e7eb; color: #a16207;">
                    <tr>
                        <th style=HEADER_CELL_STYLE>"SR No"</th>
                        <th style=HEADER_CELL_STYLE>"Date"</th>
                        <th style=HEADER_CELL_STYLE>"Menu Name"</th>
                        <th style=HEADER_CELL_STYLE>"Quantity"</th>
                    </tr>
                </thead>
                <tbody style="font-size: 0.875rem;">
                    {move || rows.get().into_iter().map(|row| {
                        view! {
                            <tr>
                                <td style=CELL_STYLE>{row.sr_no}</td>
                                <td style=CELL_STYLE>{row.date}</td>
                                <td style=NAME_CELL_STYLE>{row.item_name}</td>
                                <td style=CELL_STYLE>{format_quantity(row.quantity)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <TableTotalsRow>
                        <td style=CELL_STYLE colspan="3">
                            {move || format!("Rows: {}", rows.with(|r| r.len()))}
                        </td>
                        <td style=CELL_STYLE>
                            {move || format_quantity(rows.with(|r| r.iter().map(|row| row.quantity).sum::<f64>()))}
                        </td>
                    </TableTotalsRow>
                </tfoot>
            </table>
        </div>
    }
}
