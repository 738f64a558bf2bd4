//! Widget state machine.
//!
//! [`WidgetState`] is the single source of truth for the upload widget.
//! Components never touch the DOM directly; they mutate the state through
//! the methods below and render [`WidgetView`], a pure projection of it.
//!
//! ```text
//! Idle ──accept──▶ Ready ──begin_classify──▶ Busy ──finish/release──▶ Ready
//!                    ▲                         │
//!                    └─────────accept──────────┘
//! ```
//!
//! Every picked image and every classify request bumps a generation
//! counter. File reads and responses carry the generation they started
//! with and are applied only if they are still current, so a late read or
//! reply can never overwrite a newer selection.

use crate::config::{BUSY_BUTTON_LABEL, IDLE_BUTTON_LABEL};
use crate::services::{data_uri, validate_mime, DeclaredType};
use crate::types::{ClassificationResult, ResultStyle, SelectedImage, WidgetError, WidgetResult};

/// Handle for one classify request.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    pub id: u64,
    pub image: SelectedImage,
}

/// A result currently on display.
#[derive(Clone, Debug, PartialEq)]
struct ShownResult {
    id: u64,
    result: ClassificationResult,
    /// `None` until the bar animation is released.
    fill: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    selected: Option<SelectedImage>,
    preview: Option<String>,
    in_flight: Option<u64>,
    pending_read: Option<u64>,
    generation: u64,
    result: Option<ShownResult>,
    error: Option<String>,
    dragging: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Screen a drop or picker selection.
    ///
    /// Only the first entry counts. A non-image is surfaced in the error
    /// slot and leaves everything else as it was. An image supersedes the
    /// current request, hides the shown result and error, and returns a
    /// read ticket together with the entry to read.
    pub fn begin_input<T: DeclaredType>(&mut self, entries: impl IntoIterator<Item = T>) -> Option<(u64, T)> {
        let entry = entries.into_iter().next()?;
        if let Err(err) = validate_mime(&entry.declared_type()) {
            self.reject(&err);
            return None;
        }

        self.generation += 1;
        if let Some(id) = self.in_flight.take() {
            log::debug!("Request #{} superseded by new selection", id);
        }
        self.pending_read = Some(self.generation);
        self.result = None;
        self.hide_error();

        Some((self.generation, entry))
    }

    /// Apply a finished read. Reads overtaken by a newer selection are dropped.
    pub fn finish_read(&mut self, ticket: u64, outcome: WidgetResult<SelectedImage>) {
        if self.pending_read != Some(ticket) {
            log::debug!("Dropping stale read #{}", ticket);
            return;
        }
        self.pending_read = None;

        match outcome {
            Ok(image) => self.accept_image(image),
            Err(err) => self.reject(&err),
        }
    }

    /// Result and error were already cleared when the file was picked; an
    /// error raised since then stays visible.
    fn accept_image(&mut self, image: SelectedImage) {
        log::info!("Selected {} ({}, {} bytes)", image.name, image.mime_type, image.len());

        self.preview = Some(data_uri(&image));
        self.selected = Some(image);
    }

    /// Surface an input error without touching the selection.
    pub fn reject(&mut self, err: &WidgetError) {
        log::warn!("Input rejected: {}", err);
        self.show_error(err.user_message());
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    // -------------------------------------------------------------------------
    // Classification
    // -------------------------------------------------------------------------

    /// Enter Busy. `None` without a selection, while a request is running
    /// or while a newly picked file is still being read.
    pub fn begin_classify(&mut self) -> Option<RequestTicket> {
        if let Some(id) = self.in_flight {
            log::debug!("Classify ignored, request #{} still running", id);
            return None;
        }
        if self.pending_read.is_some() {
            log::debug!("Classify ignored, selection still loading");
            return None;
        }
        let image = self.selected.clone()?;

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.result = None;
        self.hide_error();

        Some(RequestTicket {
            id: self.generation,
            image,
        })
    }

    /// Apply the outcome of a request.
    ///
    /// Returns the id to pass to [`Self::reveal_confidence`] when a result
    /// was shown. Outcomes for superseded tickets are dropped.
    pub fn finish_classify(
        &mut self,
        ticket: &RequestTicket,
        outcome: WidgetResult<ClassificationResult>,
    ) -> Option<u64> {
        if self.in_flight != Some(ticket.id) {
            log::debug!("Dropping stale response for request #{}", ticket.id);
            return None;
        }

        match outcome {
            Ok(result) => {
                log::info!("Prediction: {} ({:.1}%)", result.label, result.confidence);
                self.result = Some(ShownResult {
                    id: ticket.id,
                    result,
                    fill: None,
                });
                Some(ticket.id)
            }
            Err(err) => {
                log::error!("Classification failed: {}", err);
                self.show_error(err.user_message());
                None
            }
        }
    }

    /// Leave Busy. No-op unless `id` is the request in flight.
    pub fn release(&mut self, id: u64) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
    }

    /// Widen the confidence bar of the result shown for `id`.
    pub fn reveal_confidence(&mut self, id: u64) {
        if let Some(shown) = self.result.as_mut().filter(|shown| shown.id == id) {
            shown.fill = Some(shown.result.confidence);
        }
    }

    // -------------------------------------------------------------------------
    // Error slot
    // -------------------------------------------------------------------------

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    pub fn view(&self) -> WidgetView {
        let busy = self.is_busy();
        WidgetView {
            dragging: self.dragging,
            prompt_visible: self.preview.is_none(),
            preview_src: self.preview.clone(),
            classify_enabled: self.selected.is_some() && !busy && self.pending_read.is_none(),
            button_label: if busy { BUSY_BUTTON_LABEL } else { IDLE_BUTTON_LABEL },
            loader_visible: busy,
            result: self.result.as_ref().map(ResultView::from_shown),
            error: self.error.clone(),
        }
    }
}

/// Everything the components render, derived from [`WidgetState`].
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetView {
    pub dragging: bool,
    pub prompt_visible: bool,
    pub preview_src: Option<String>,
    pub classify_enabled: bool,
    pub button_label: &'static str,
    pub loader_visible: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub headline: String,
    pub confidence_text: String,
    pub style: ResultStyle,
    /// CSS width of the confidence bar
    pub fill_width: String,
}

impl ResultView {
    fn from_shown(shown: &ShownResult) -> Self {
        let ClassificationResult { label, confidence } = &shown.result;
        Self {
            headline: format!("It's a {}!", label),
            confidence_text: format!("{:.1}%", confidence),
            style: ResultStyle::for_label(label),
            fill_width: format!("{}%", shown.fill.unwrap_or(0.0)),
        }
    }
}

/// Runs a release action exactly once, when dropped.
///
/// Held across the classify request so the widget leaves Busy on every
/// exit path.
pub struct BusyGuard<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> BusyGuard<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
