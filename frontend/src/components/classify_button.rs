use leptos::*;

use crate::state::WidgetView;

#[component]
pub fn ClassifyButton(widget: Memo<WidgetView>, on_classify: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="classify-btn"
            id="classifyBtn"
            disabled=move || !widget.with(|w| w.classify_enabled)
            on:click=move |_| on_classify.call(())
        >
            <span>{move || widget.with(|w| w.button_label)}</span>
            <div
                class="loader"
                id="btnLoader"
                class:hidden=move || !widget.with(|w| w.loader_visible)
            ></div>
        </button>
    }
}
