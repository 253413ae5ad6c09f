//! Admin dashboard with links to the demo forms and a staged logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated by the storage flag. Logout shows "Signing out..." for a short
//! deferred delay before clearing the flag and returning to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::install_admin_redirect;

const ACTIONS: &[(&str, &str, &str)] = &[
    ("/admin/resources/new", "Add a resource", "Draft a new directory listing."),
    ("/admin/events/new", "Add an event", "Draft a new community event."),
    ("/admin/seed-events", "Seed events", "One-time copy of the event list into the events collection."),
];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    install_admin_redirect(navigate.clone());

    let signing_out = RwSignal::new(false);

    let on_logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::auth::{LOGIN_PATH, set_authenticated};
            use crate::util::forms::LOGOUT_DELAY_MS;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(LOGOUT_DELAY_MS)).await;
                set_authenticated(false);
                navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin Dashboard"</h1>
                <button class="button button--secondary" on:click=on_logout disabled=move || signing_out.get()>
                    {move || if signing_out.get() { "Signing out..." } else { "Log out" }}
                </button>
            </header>
            <div class="card-grid">
                {ACTIONS
                    .iter()
                    .map(|(href, title, body)| {
                        view! {
                            <a class="highlight" href=*href>
                                <h2>{*title}</h2>
                                <p>{*body}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
