//! Upcoming events listing over the fixed event list.

use leptos::prelude::*;

use crate::components::category_chips::CategoryChips;
use crate::components::event_card::EventCard;
use crate::state::events::{EVENT_CATEGORIES, filter_events};

#[component]
pub fn EventsPage() -> impl IntoView {
    let category = RwSignal::new(None::<String>);
    let on_select = Callback::new(move |next: Option<String>| {
        category.update(|current| {
            *current = if *current == next { None } else { next };
        });
    });

    view! {
        <section class="events-page">
            <h1>"Upcoming Events"</h1>
            <CategoryChips categories=EVENT_CATEGORIES selected=category on_select=on_select/>
            {move || {
                let events = category.with(|c| filter_events(c.as_deref()));
                if events.is_empty() {
                    view! { <p class="muted">"No events in this category yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {events.into_iter().map(|event| view! { <EventCard event=event/> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
