//! Site navigation header.

use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/resources", "Resources"),
    ("/events", "Events"),
    ("/history", "History"),
    ("/references", "References"),
    ("/contact", "Contact"),
];

#[component]
pub fn NavHeader() -> impl IntoView {
    view! {
        <header class="nav-header">
            <a class="nav-header__brand" href="/">"Gatherly"</a>
            <nav class="nav-header__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="nav-header__link" href=*href>{*label}</a> })
                    .collect_view()}
                <a class="nav-header__link nav-header__link--admin" href="/admin">"Admin"</a>
            </nav>
        </header>
    }
}
