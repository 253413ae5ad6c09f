//! Admin event demo form. Submission is simulated and never persisted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::success_banner::SuccessBanner;
use crate::state::events::EVENT_CATEGORIES;
use crate::util::auth::install_admin_redirect;
use crate::util::forms::{SubmitPhase, check_required, parse_list, simulate_submit};

#[component]
pub fn AdminEventFormPage() -> impl IntoView {
    install_admin_redirect(use_navigate());

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let activities = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let spots = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let phase = RwSignal::new(SubmitPhase::Idle);

    let fields = [title, category, activities, date, time, location, spots, description];
    let reset = move || {
        for field in fields {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = [title, category, date, time, location, spots].map(|f| f.get());
        let required = [
            ("Title", values[0].as_str()),
            ("Category", values[1].as_str()),
            ("Date", values[2].as_str()),
            ("Time", values[3].as_str()),
            ("Location", values[4].as_str()),
            ("Spots", values[5].as_str()),
        ];
        if let Err(msg) = check_required(&required) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        simulate_submit(phase, reset);
    };

    let activity_preview = move || parse_list(&activities.get());

    view! {
        <section class="admin-page">
            <a class="back-link" href="/admin">"← Dashboard"</a>
            <h1>"Add an Event"</h1>
            <Show when=move || phase.get() == SubmitPhase::Succeeded>
                <SuccessBanner message="Event submitted successfully!"/>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Title *"
                    <input type="text" prop:value=move || title.get() on:input=move |ev| title.set(event_target_value(&ev))/>
                </label>
                <label class="form__field">
                    "Category *"
                    <select prop:value=move || category.get() on:change=move |ev| category.set(event_target_value(&ev))>
                        <option value="">"Select..."</option>
                        {EVENT_CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    "Activities (comma separated)"
                    <input
                        type="text"
                        prop:value=move || activities.get()
                        on:input=move |ev| activities.set(event_target_value(&ev))
                    />
                </label>
                <ul class="event-card__activities">
                    {move || {
                        activity_preview()
                            .into_iter()
                            .map(|a| view! { <li class="tag">{a}</li> })
                            .collect_view()
                    }}
                </ul>
                <label class="form__field">
                    "Date *"
                    <input type="date" prop:value=move || date.get() on:input=move |ev| date.set(event_target_value(&ev))/>
                </label>
                <label class="form__field">
                    "Time *"
                    <input type="time" prop:value=move || time.get() on:input=move |ev| time.set(event_target_value(&ev))/>
                </label>
                <label class="form__field">
                    "Location *"
                    <input
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Spots *"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || spots.get()
                        on:input=move |ev| spots.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Description"
                    <textarea
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="button" type="submit" disabled=move || phase.get() == SubmitPhase::Submitting>
                    {move || phase.get().button_label("Submit event")}
                </button>
            </form>
        </section>
    }
}
