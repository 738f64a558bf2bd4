use leptos::*;

use crate::state::WidgetView;

/// Single error slot shared by input and classification failures.
#[component]
pub fn ErrorMessage(widget: Memo<WidgetView>) -> impl IntoView {
    let error = move || widget.with(|w| w.error.clone());

    view! {
        <div
            class="error-message"
            id="errorMsg"
            class:hidden=move || error().is_none()
        >
            {move || error().unwrap_or_default()}
        </div>
    }
}
