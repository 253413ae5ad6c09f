//! One-time seeding utility: copies the fixed event list into the `events`
//! collection. The server only accepts it when seeding is enabled.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::events::fixed_events;
use crate::util::auth::install_admin_redirect;

#[component]
pub fn AdminSeedEventsPage() -> impl IntoView {
    install_admin_redirect(use_navigate());

    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<Result<String, String>>);

    let on_seed = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::seed_events(fixed_events())
                .await
                .map(|r| crate::net::api::seed_success_message(&r));
            if let Err(e) = &outcome {
                leptos::logging::warn!("event seeding failed: {e}");
            }
            result.set(Some(outcome));
            busy.set(false);
        });
    };

    view! {
        <section class="admin-page">
            <a class="back-link" href="/admin">"← Dashboard"</a>
            <h1>"Seed Events"</h1>
            <p>{format!("{} events will be written to the events collection.", fixed_events().len())}</p>
            <p class="muted">"Run this once. Each press inserts another copy."</p>
            <button class="button" on:click=on_seed disabled=move || busy.get()>
                {move || if busy.get() { "Seeding..." } else { "Seed events collection" }}
            </button>
            {move || match result.get() {
                Some(Ok(message)) => view! { <p class="success-banner" role="status">{message}</p> }.into_any(),
                Some(Err(e)) => view! { <p class="inline-error" role="alert">{format!("Seeding failed: {e}")}</p> }.into_any(),
                None => ().into_any(),
            }}
        </section>
    }
}
