//! Transient confirmation banner shown after a simulated submission.

use leptos::prelude::*;

#[component]
pub fn SuccessBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="success-banner" role="status">
            {message}
        </div>
    }
}
