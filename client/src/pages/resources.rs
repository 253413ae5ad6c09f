//! Live resource directory with category chips and free-text search.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page subscribes to the `resources` collection on mount and releases
//! the subscription on unmount. Every snapshot replaces the list wholesale;
//! filtering is local.

use leptos::prelude::*;

use crate::components::category_chips::CategoryChips;
use crate::components::resource_card::ResourceCard;
use crate::state::resources::{RESOURCE_CATEGORIES, Resource, ResourcesState};

pub const RESOURCES_COLLECTION: &str = "resources";

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let state = RwSignal::new(ResourcesState::loading());

    #[cfg(feature = "hydrate")]
    {
        use crate::net::collection_client::{SubscriptionEvent, subscribe_collection};

        let subscription = subscribe_collection(RESOURCES_COLLECTION, move |event| match event {
            SubscriptionEvent::Snapshot(docs) => state.update(|s| s.apply_snapshot(&docs)),
            SubscriptionEvent::Failed(message) => state.update(|s| s.apply_error(message)),
        });
        on_cleanup(move || subscription.close());
    }

    let selected = Signal::derive(move || state.with(|s| s.category.clone()));
    let on_select = Callback::new(move |category: Option<String>| {
        state.update(|s| match category {
            Some(c) => s.toggle_category(&c),
            None => s.category = None,
        });
    });
    let visible = Memo::new(move |_| state.with(ResourcesState::visible));

    view! {
        <section class="resources-page">
            <h1>"Community Resources"</h1>
            <input
                class="search-input"
                type="search"
                placeholder="Search by name, address, community..."
                prop:value=move || state.with(|s| s.query.clone())
                on:input=move |ev| state.update(|s| s.query = event_target_value(&ev))
            />
            <CategoryChips categories=RESOURCE_CATEGORIES selected=selected on_select=on_select/>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="inline-error" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>

            {move || {
                let (loading, failed) = state.with(|s| (s.loading, s.error.is_some()));
                if loading {
                    view! { <p class="muted">"Loading resources..."</p> }.into_any()
                } else if !failed && visible.with(Vec::is_empty) {
                    view! { <p class="muted">"No resources found"</p> }.into_any()
                } else {
                    ().into_any()
                }
            }}

            <p class="muted">
                {move || format!("Showing {} of {}", visible.with(Vec::len), state.with(|s| s.resources.len()))}
            </p>
            <div class="card-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|resource: Resource| view! { <ResourceCard resource=resource/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
