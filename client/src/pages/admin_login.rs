//! Demo admin login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{DASHBOARD_PATH, is_authenticated, try_login};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    // Already signed in: skip the form.
    let navigate_dashboard = navigate.clone();
    Effect::new(move || {
        if is_authenticated() {
            navigate_dashboard(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match try_login(&username.get(), &password.get()) {
            Ok(()) => {
                error.set(None);
                navigate(DASHBOARD_PATH, NavigateOptions::default());
            }
            Err(msg) => {
                password.set(String::new());
                error.set(Some(msg));
            }
        }
    };

    view! {
        <section class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <p class="login-card__subtitle">"Staff access to the Gatherly dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </section>
    }
}
