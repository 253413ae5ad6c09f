use leptos::prelude::*;

const REFERENCES: &[(&str, &str)] = &[
    ("Leptos", "https://leptos.dev"),
    ("Axum", "https://github.com/tokio-rs/axum"),
    ("SQLx", "https://github.com/launchbadge/sqlx"),
    ("PostgreSQL", "https://www.postgresql.org"),
];

#[component]
pub fn ReferencesPage() -> impl IntoView {
    view! {
        <section class="static-page">
            <h1>"References"</h1>
            <p>"Resource listings are contributed by local organizations and verified by volunteers."</p>
            <h2>"Built with"</h2>
            <ul class="references">
                {REFERENCES
                    .iter()
                    .map(|(name, href)| view! { <li><a href=*href rel="noopener">{*name}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
