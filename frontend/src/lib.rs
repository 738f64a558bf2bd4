//! Cat vs Dog Classifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for picking an image, previewing it locally and
//! sending it to the `/predict` endpoint for classification.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ClassifierWidget (owns WidgetState)                         │
//! │  ├── UploadArea (drop zone, picker, preview)                 │
//! │  ├── ClassifyButton (trigger, busy indicator)                │
//! │  ├── ResultCard (headline, confidence bar)                   │
//! │  └── ErrorMessage                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedImage, ClassificationResult, errors)
//! - [`state`] - Widget state machine and its view projection
//! - [`components`] - UI components
//! - [`services`] - File reading and classifier communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Input
    SelectedImage,
    // API
    ClassificationResult, PredictResponse,
    // Display
    ResultStyle,
    // Errors
    WidgetError, WidgetResult,
};

// State
pub use state::{BusyGuard, RequestTicket, ResultView, WidgetState, WidgetView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🐾 Cat vs Dog Classifier - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <ClassifierWidget/>
        </div>
    }
}
