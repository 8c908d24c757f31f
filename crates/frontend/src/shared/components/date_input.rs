use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string.
/// Clearing the input reports an empty string.
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd or "")
    on_change: impl Fn(String) + 'static,
    /// Accessible label, also used as the input title
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let style = "padding: 4px 6px; border: 1px solid #ced4da; border-radius: 6px; font-size: 0.875rem; color: #374151; background: #fff;";
    let label = label.unwrap_or_default();

    view! {
        <input
            type="date"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
            title=label.clone()
            aria-label=label
            style=style
        />
    }
}
