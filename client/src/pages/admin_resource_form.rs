//! Admin resource demo form. Submission is simulated and never persisted.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::success_banner::SuccessBanner;
use crate::state::resources::{INDOOR_OUTDOOR_OPTIONS, RESOURCE_CATEGORIES};
use crate::util::auth::install_admin_redirect;
use crate::util::forms::{SubmitPhase, check_required, simulate_submit};

#[component]
pub fn AdminResourceFormPage() -> impl IntoView {
    install_admin_redirect(use_navigate());

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let community = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());
    let indoor_outdoor = RwSignal::new(String::new());
    let tags = RwSignal::new(Vec::<String>::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let phase = RwSignal::new(SubmitPhase::Idle);

    let reset = move || {
        for field in [name, address, community, contact, indoor_outdoor, description] {
            field.set(String::new());
        }
        tags.set(Vec::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (n, a, c, io) = (name.get(), address.get(), community.get(), indoor_outdoor.get());
        let required = [
            ("Name", n.as_str()),
            ("Address", a.as_str()),
            ("Community", c.as_str()),
            ("Indoor/Outdoor", io.as_str()),
        ];
        if let Err(msg) = check_required(&required) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        simulate_submit(phase, reset);
    };

    let toggle_tag = move |tag: &'static str| {
        tags.update(|current| {
            if let Some(pos) = current.iter().position(|t| t == tag) {
                current.remove(pos);
            } else {
                current.push(tag.to_owned());
            }
        });
    };

    view! {
        <section class="admin-page">
            <a class="back-link" href="/admin">"← Dashboard"</a>
            <h1>"Add a Resource"</h1>
            <Show when=move || phase.get() == SubmitPhase::Succeeded>
                <SuccessBanner message="Resource submitted successfully!"/>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Name *"
                    <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev))/>
                </label>
                <label class="form__field">
                    "Address *"
                    <input
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Community *"
                    <input
                        type="text"
                        prop:value=move || community.get()
                        on:input=move |ev| community.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Contact"
                    <input
                        type="text"
                        prop:value=move || contact.get()
                        on:input=move |ev| contact.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Indoor/Outdoor *"
                    <select
                        prop:value=move || indoor_outdoor.get()
                        on:change=move |ev| indoor_outdoor.set(event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {INDOOR_OUTDOOR_OPTIONS
                            .iter()
                            .map(|opt| view! { <option value=*opt>{*opt}</option> })
                            .collect_view()}
                    </select>
                </label>
                <fieldset class="form__field">
                    <legend>"Tags"</legend>
                    <div class="category-chips">
                        {RESOURCE_CATEGORIES
                            .iter()
                            .map(|tag| {
                                let tag = *tag;
                                view! {
                                    <label class="chip" class:chip--active=move || tags.with(|t| t.iter().any(|x| x == tag))>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || tags.with(|t| t.iter().any(|x| x == tag))
                                            on:change=move |_| toggle_tag(tag)
                                        />
                                        {tag}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </fieldset>
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
                    {move || phase.get().button_label("Submit resource")}
                </button>
            </form>
        </section>
    }
}
