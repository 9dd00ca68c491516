//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `value` percent
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<u32>) -> impl IntoView {
    view! {
        <div
            class="progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || value.get().to_string()
        >
            <div class="progress-fill" style:width=move || format!("{}%", value.get().min(100))></div>
        </div>
    }
}
