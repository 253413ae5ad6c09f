//! Card for one fixed event with its remaining-spots badge.

use leptos::prelude::*;

use crate::state::events::Event;

#[component]
pub fn EventCard(event: &'static Event) -> impl IntoView {
    let full = event.is_full();

    view! {
        <article class="event-card" class:event-card--full=full>
            <header class="event-card__header">
                <span class="event-card__category">{event.category}</span>
                <span class="event-card__spots" class:event-card__spots--full=full>
                    {event.spots_label()}
                </span>
            </header>
            <h3 class="event-card__title">{event.title}</h3>
            <p class="event-card__when">{format!("{} at {}", event.date, event.time)}</p>
            <p class="event-card__where">{event.location}</p>
            <p class="event-card__description">{event.description}</p>
            <ul class="event-card__activities">
                {event.activities.iter().map(|a| view! { <li class="tag">{*a}</li> }).collect_view()}
            </ul>
            <a class="button" href=event.register_href()>
                {if full { "View details" } else { "Register" }}
            </a>
        </article>
    }
}
