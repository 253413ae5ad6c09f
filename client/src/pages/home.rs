//! Marketing home page.

use leptos::prelude::*;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("Find resources", "Food shelves, clinics, classes and more, updated live by our team.", "/resources"),
    ("Join events", "Cleanups, potlucks, workshops and clinics happening near you.", "/events"),
    ("Get involved", "Questions or ideas? We would love to hear from you.", "/contact"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Gatherly"</h1>
            <p class="hero__subtitle">"Your neighborhood, connected. Discover local resources and events in one place."</p>
            <div class="hero__actions">
                <a class="button" href="/resources">"Browse resources"</a>
                <a class="button button--secondary" href="/events">"See upcoming events"</a>
            </div>
        </section>
        <section class="highlights">
            {HIGHLIGHTS
                .iter()
                .map(|(title, body, href)| {
                    view! {
                        <a class="highlight" href=*href>
                            <h2>{*title}</h2>
                            <p>{*body}</p>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}
