use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Gatherly connects neighbors with local resources and events."</p>
            <p class="site-footer__links">
                <a href="/history">"Our history"</a>
                " · "
                <a href="/references">"References"</a>
                " · "
                <a href="/contact">"Contact us"</a>
            </p>
        </footer>
    }
}
