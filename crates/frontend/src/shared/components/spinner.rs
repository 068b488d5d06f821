use leptos::prelude::*;

/// Centered loading indicator for list views.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__circle"></div>
        </div>
    }
}
