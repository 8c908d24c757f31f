use leptos::prelude::*;

/// Totals row for the bottom of a report table.
///
/// Renders a `<tr>` with the `.table__totals-row` class; cells come from
/// `children`.
///
/// ```rust,ignore
/// <tfoot>
///     <TableTotalsRow>
///         <td colspan="3">{format!("Rows: {}", count)}</td>
///         <td>{total}</td>
///     </TableTotalsRow>
/// </tfoot>
/// ```
#[component]
pub fn TableTotalsRow(
    children: Children,
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class={row_class} style="font-weight: 600; background: #f4f4f5;">
            {children()}
        </tr>
    }
}
