use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found."</h1>
            <a class="button" href="/">"Back to home"</a>
        </section>
    }
}
