//! Registration flow for one fixed event.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route id is looked up in the in-memory event list only. Unknown ids
//! render the "Event not found" panel. Submission is simulated; the
//! confirmation panel replaces the form.

#[cfg(test)]
#[path = "event_register_test.rs"]
mod event_register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use leptos_router::{ParamSegment, StaticSegment};

use crate::state::events::{Event, find_event};
use crate::util::forms::{SubmitPhase, check_required, is_valid_email, simulate_submit};

/// `/events/register/:id`.
pub fn register_route() -> (StaticSegment<&'static str>, StaticSegment<&'static str>, ParamSegment) {
    (StaticSegment("events"), StaticSegment("register"), ParamSegment("id"))
}

/// `/events/register` with no id, which renders the not-found panel.
pub fn register_root_route() -> (StaticSegment<&'static str>, StaticSegment<&'static str>) {
    (StaticSegment("events"), StaticSegment("register"))
}

/// Validate a registration against the event's remaining capacity.
fn validate_registration(event: &Event, name: &str, email: &str, party_size: u32) -> Result<(), String> {
    if event.is_full() {
        return Err("This event is full.".to_owned());
    }
    check_required(&[("Full name", name), ("Email", email)])?;
    if !is_valid_email(email) {
        return Err("Enter a valid email address.".to_owned());
    }
    if party_size == 0 || party_size > event.remaining_spots() {
        return Err(format!("Party size must be between 1 and {}.", event.remaining_spots()));
    }
    Ok(())
}

fn confirmation_summary(event: &Event, party_size: u32) -> String {
    let party = if party_size == 1 { "1 person".to_owned() } else { format!("{party_size} people") };
    format!("{party} registered for {} on {} at {}.", event.title, event.date, event.time)
}

#[component]
pub fn EventRegisterPage() -> impl IntoView {
    let params = use_params_map();
    let event = move || params.with(|p| p.get("id")).and_then(|id| find_event(&id));

    move || match event() {
        Some(event) => view! { <RegistrationForm event=event/> }.into_any(),
        None => view! {
            <section class="panel not-found">
                <h1>"Event not found"</h1>
                <p>"We couldn't find that event. It may have ended or the link may be wrong."</p>
                <a class="button" href="/events">"Back to events"</a>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn RegistrationForm(event: &'static Event) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let party_size = RwSignal::new(1_u32);
    let error = RwSignal::new(None::<String>);
    let phase = RwSignal::new(SubmitPhase::Idle);
    let confirmed_party = RwSignal::new(None::<u32>);
    let full = event.is_full();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let size = party_size.get();
        if let Err(msg) = validate_registration(event, &name.get(), &email.get(), size) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        simulate_submit(phase, move || confirmed_party.set(Some(size)));
    };

    view! {
        <section class="register-page">
            <h1>{event.title}</h1>
            <p class="muted">{format!("{} at {} · {}", event.date, event.time, event.location)}</p>
            <p>{event.description}</p>
            <p class="event-card__spots" class:event-card__spots--full=full>{event.spots_label()}</p>

            {move || match confirmed_party.get() {
                Some(size) => view! {
                    <div class="panel confirmation" role="status">
                        <h2>"You're registered!"</h2>
                        <p>{confirmation_summary(event, size)}</p>
                        <a class="button" href="/events">"Back to events"</a>
                    </div>
                }
                .into_any(),
                None => view! {
                    <form class="form" on:submit=on_submit>
                        <fieldset disabled=full>
                            <label class="form__field">
                                "Full name"
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
                                "Phone (optional)"
                                <input
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                "Party size"
                                <select
                                    prop:value=move || party_size.get().to_string()
                                    on:change=move |ev| {
                                        party_size.set(event_target_value(&ev).parse().unwrap_or(1));
                                    }
                                >
                                    {(1..=event.remaining_spots().max(1))
                                        .map(|n| view! { <option value=n.to_string()>{n}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <Show when=move || error.get().is_some()>
                                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                            <button
                                class="button"
                                type="submit"
                                disabled=move || full || phase.get() == SubmitPhase::Submitting
                            >
                                {move || if full { "Event full" } else { phase.get().button_label("Register") }}
                            </button>
                        </fieldset>
                    </form>
                }
                .into_any(),
            }}
        </section>
    }
}
