//! "All" + category filter chips.
//!
//! DESIGN
//! ======
//! The chips only report clicks; the owning page decides whether a repeated
//! click clears the selection.

use leptos::prelude::*;

#[component]
pub fn CategoryChips(
    categories: &'static [&'static str],
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="category-chips" role="group">
            <button
                class="chip"
                class:chip--active=move || selected.get().is_none()
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            {categories
                .iter()
                .map(|category| {
                    let category = *category;
                    view! {
                        <button
                            class="chip"
                            class:chip--active=move || selected.get().as_deref() == Some(category)
                            on:click=move |_| on_select.run(Some(category.to_owned()))
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
