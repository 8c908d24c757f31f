use crate::projections::p910_kot_report::ui::list::KotReportList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <KotReportList />
        </main>
    }
}
