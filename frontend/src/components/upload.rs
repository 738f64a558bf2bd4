//! Image drop zone with click-to-browse and local preview.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::state::WidgetView;

const FILE_INPUT_ID: &str = "fileInput";

#[component]
pub fn UploadArea(
    widget: Memo<WidgetView>,
    on_files: Callback<Option<FileList>>,
    on_drag: Callback<bool>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        on_files.call(input.files());
    };

    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        on_drag.call(false);
        on_files.call(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_drag_over = move |ev: DragEvent| {
        suppress(&ev);
        on_drag.call(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        suppress(&ev);
        on_drag.call(false);
    };

    // Clicking anywhere on the zone opens the hidden picker
    let trigger_file_input = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id(FILE_INPUT_ID) {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    let preview_src = move || widget.with(|w| w.preview_src.clone()).unwrap_or_default();

    view! {
        <div
            class="upload-area"
            id="uploadArea"
            class:dragover=move || widget.with(|w| w.dragging)
            on:click=trigger_file_input
            on:dragenter=on_drag_over
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div
                class="upload-content"
                style:opacity=move || if widget.with(|w| w.prompt_visible) { "1" } else { "0" }
            >
                <div class="upload-icon">"📷"</div>
                <p>"Drag & drop an image here"</p>
                <p class="upload-hint">"or click to browse"</p>
            </div>
            <img
                id="previewImage"
                alt="Preview"
                src=preview_src
                class:hidden=move || widget.with(|w| w.preview_src.is_none())
            />
        </div>

        <input
            type="file"
            id=FILE_INPUT_ID
            accept="image/*"
            style="display:none"
            on:change=on_file_change
        />
    }
}

fn suppress(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}
