//! Card for one entry of the resource directory.

use leptos::prelude::*;

use crate::state::resources::Resource;

#[component]
pub fn ResourceCard(resource: Resource) -> impl IntoView {
    let Resource { name, address, community, contact, indoor_outdoor, tags, description, .. } = resource;
    let has_contact = !contact.is_empty();
    let has_description = !description.is_empty();
    let has_setting = !indoor_outdoor.is_empty();

    view! {
        <article class="resource-card">
            <h3 class="resource-card__name">{name}</h3>
            <p class="resource-card__address">{address}</p>
            <p class="resource-card__community">{community}</p>
            <Show when=move || has_setting>
                <span class="resource-card__setting">{indoor_outdoor.clone()}</span>
            </Show>
            <Show when=move || has_contact>
                <p class="resource-card__contact">{contact.clone()}</p>
            </Show>
            <Show when=move || has_description>
                <p class="resource-card__description">{description.clone()}</p>
            </Show>
            <ul class="resource-card__tags">
                {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
            </ul>
        </article>
    }
}
