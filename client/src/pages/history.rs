use leptos::prelude::*;

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <section class="static-page">
            <h1>"Our History"</h1>
            <p>
                "Gatherly began as a shared spreadsheet kept by a handful of neighbors who kept "
                "answering the same question: where can I find help nearby?"
            </p>
            <p>
                "The list grew into a community directory, then into a calendar of local events "
                "run by volunteers, schools and community centers."
            </p>
            <p>
                "Today Gatherly is maintained by volunteers who verify each listing and keep the "
                "event calendar current."
            </p>
        </section>
    }
}
