//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Cat vs Dog Classifier"</h1>
            <p class="subtitle">"Upload a photo and let the model decide whether it shows a cat or a dog."</p>
        </div>
    }
}
