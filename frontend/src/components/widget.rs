//! The upload-and-classify widget.
//!
//! Owns the [`WidgetState`] signal and wires browser events to it. The
//! child components only receive the derived [`WidgetView`] and callbacks.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::FileList;

use crate::components::{ClassifyButton, ErrorMessage, ResultCard, UploadArea};
use crate::services::{classify_image, file_entries, read_image};
use crate::state::{BusyGuard, WidgetState, WidgetView};
use crate::{BAR_ANIMATION_DELAY_MS, PREDICT_ENDPOINT};

#[component]
pub fn ClassifierWidget() -> impl IntoView {
    let state = create_rw_signal(WidgetState::new());
    let widget: Memo<WidgetView> = create_memo(move |_| state.with(WidgetState::view));

    let on_files = Callback::new(move |files: Option<FileList>| handle_files(state, files));
    let on_drag = Callback::new(move |dragging: bool| state.update(|s| s.set_dragging(dragging)));
    let on_classify = Callback::new(move |_: ()| run_classify(state));

    view! {
        <div class="classifier-widget">
            <UploadArea widget=widget on_files=on_files on_drag=on_drag/>
            <ClassifyButton widget=widget on_classify=on_classify/>
            <ResultCard widget=widget/>
            <ErrorMessage widget=widget/>
        </div>
    }
}

/// Screen the selection now, read the chosen file in the background.
fn handle_files(state: RwSignal<WidgetState>, files: Option<FileList>) {
    let Some((ticket, file)) = state.try_update(|s| s.begin_input(file_entries(files))).flatten() else {
        return;
    };

    spawn_local(async move {
        let outcome = read_image(&file).await;
        state.update(|s| s.finish_read(ticket, outcome));
    });
}

fn run_classify(state: RwSignal<WidgetState>) {
    let Some(ticket) = state.try_update(|s| s.begin_classify()).flatten() else {
        return;
    };

    spawn_local(async move {
        let id = ticket.id;
        let busy = BusyGuard::new(move || state.update(|s| s.release(id)));

        log::info!("📤 Classifying {} (request #{})", ticket.image.name, id);
        let outcome = classify_image(&ticket.image, PREDICT_ENDPOINT).await;
        let shown = state.try_update(|s| s.finish_classify(&ticket, outcome)).flatten();
        drop(busy);

        // Bar starts at zero width; widen it after the card is on screen.
        if let Some(result_id) = shown {
            TimeoutFuture::new(BAR_ANIMATION_DELAY_MS).await;
            state.update(|s| s.reveal_confidence(result_id));
        }
    });
}
