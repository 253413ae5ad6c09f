//! Contact page with a simulated message form.

use leptos::prelude::*;

use crate::components::success_banner::SuccessBanner;
use crate::util::forms::{SubmitPhase, check_required, is_valid_email, simulate_submit};

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let phase = RwSignal::new(SubmitPhase::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (n, e, m) = (name.get(), email.get(), message.get());
        if let Err(msg) = check_required(&[("Name", n.as_str()), ("Email", e.as_str()), ("Message", m.as_str())]) {
            error.set(Some(msg));
            return;
        }
        if !is_valid_email(&e) {
            error.set(Some("Enter a valid email address.".to_owned()));
            return;
        }
        error.set(None);
        simulate_submit(phase, move || {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        });
    };

    view! {
        <section class="static-page">
            <h1>"Contact Us"</h1>
            <p>"Email hello@gatherly.example or send us a note below."</p>
            <Show when=move || phase.get() == SubmitPhase::Succeeded>
                <SuccessBanner message="Thanks! Your message has been sent."/>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Message"
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="button" type="submit" disabled=move || phase.get() == SubmitPhase::Submitting>
                    {move || phase.get().button_label("Send message")}
                </button>
            </form>
        </section>
    }
}
