use leptos::prelude::*;

/// Report title bar with an actions slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    /// Line under the title, e.g. the selected period
    #[prop(into)]
    subtitle: Signal<String>,

    /// Buttons and inputs rendered next to the title
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header" style="display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 12px; margin: 48px 0 16px 0;">
            <div class="page-header__text">
                <h2 class="page-header__title" style="margin: 0; color: #f97316; font-weight: 700;">{title}</h2>
                <div class="page-header__subtitle" style="font-size: 0.8rem; color: #6b7280;">{move || subtitle.get()}</div>
            </div>
            <div class="page-header__actions" style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
                {children()}
            </div>
        </div>
    }
}
