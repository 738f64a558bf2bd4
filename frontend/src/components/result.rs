//! Prediction card: headline, confidence bar and readout.

use leptos::*;

use crate::state::{ResultView, WidgetView};

#[component]
pub fn ResultCard(widget: Memo<WidgetView>) -> impl IntoView {
    let result = move || widget.with(|w| w.result.clone());

    view! {
        <div
            class="result-card"
            id="resultCard"
            class:hidden=move || result().is_none()
        >
            <h2
                id="resultTitle"
                style:color=result_field(widget, |r| r.style.title_color().to_string())
            >
                {result_field(widget, |r| r.headline.clone())}
            </h2>
            <div class="confidence-bar">
                <div
                    class="confidence-fill"
                    id="confidenceFill"
                    style:background=result_field(widget, |r| r.style.fill_gradient().to_string())
                    style:width=move || result().map_or_else(|| "0%".to_string(), |r| r.fill_width)
                ></div>
            </div>
            <p class="confidence-label">
                "Confidence: "
                <span id="confidenceText">{result_field(widget, |r| r.confidence_text.clone())}</span>
            </p>
        </div>
    }
}

fn result_field(widget: Memo<WidgetView>, f: fn(&ResultView) -> String) -> impl Fn() -> String {
    move || widget.with(|w| w.result.as_ref().map(f)).unwrap_or_default()
}
