use serde::{Deserialize, Serialize};

use crate::data::annotate::{annotate_selection, AnnotatedSpectrum};
use crate::data::model::Spectrum;
use crate::data::peaks::{locate_peak, nearest_point};
use crate::data::selection::Selection;
use crate::error::{PickError, Result};
use crate::export::PeakExport;

// ---------------------------------------------------------------------------
// Click input and outcome
// ---------------------------------------------------------------------------

/// One click, in the same coordinate space the plot reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

/// What a handled click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    /// The row was newly picked.
    Selected(usize),
    /// The row was already picked and is now removed again.
    Deselected(usize),
}

impl ClickEffect {
    /// The row the click resolved to, whichever way it toggled.
    pub fn index(self) -> usize {
        match self {
            ClickEffect::Selected(i) | ClickEffect::Deselected(i) => i,
        }
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// Tunables for one picking session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickConfig {
    /// Walk clicks uphill to the nearest local maximum before toggling.
    pub snap_to_peak: bool,
    /// Reject clicks farther than this from every data point, in the same
    /// units as the click coordinates.
    pub max_click_distance: f64,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            snap_to_peak: true,
            max_click_distance: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// PickSession – one interactive picking pass over a spectrum
// ---------------------------------------------------------------------------

/// Session state for picking peaks on a single spectrum.
///
/// The session owns the dataset and the live [`Selection`]; the UI layer
/// feeds it one click at a time and redraws from [`PickSession::annotated`].
/// Sessions are independent; nothing is shared between two of them.
#[derive(Debug, Clone)]
pub struct PickSession {
    spectrum: Spectrum,
    config: PickConfig,
    selection: Selection,
}

impl PickSession {
    /// Start a session over `spectrum`.
    pub fn new(spectrum: Spectrum, config: PickConfig) -> Self {
        Self {
            spectrum,
            config,
            selection: Selection::new(),
        }
    }

    /// The dataset being picked over.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// The session configuration.
    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// The live selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Currently picked indices, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices()
    }

    /// Resolve a click to a row and toggle it.
    ///
    /// The click is mapped to the nearest data point within the configured
    /// radius; with `snap_to_peak` on, that hit is walked uphill to the
    /// local maximum first. Returns `None`, changing nothing, when the
    /// click misses every point or the uphill walk finds no peak.
    pub fn handle_click(&mut self, click: ClickPoint) -> Option<ClickEffect> {
        let hit = match nearest_point(
            &self.spectrum,
            click.x,
            click.y,
            self.config.max_click_distance,
        ) {
            Some(i) => i,
            None => {
                log::debug!(
                    "click at ({:.3}, {:.3}) missed every point; ignored",
                    click.x,
                    click.y
                );
                return None;
            }
        };

        let index = if self.config.snap_to_peak {
            match locate_peak(&self.spectrum, hit) {
                Some(i) => i,
                // Walk failure is already logged at its source.
                None => return None,
            }
        } else {
            hit
        };

        Some(self.toggle(index))
    }

    /// Toggle a row directly, bypassing the click mapping.
    ///
    /// This is the programmatic path: replaying a recorded index list or
    /// correcting a pick from code. Unlike a stray click, an out-of-range
    /// index here is a caller error and is rejected.
    pub fn toggle_index(&mut self, index: usize) -> Result<ClickEffect> {
        if index >= self.spectrum.len() {
            return Err(PickError::IndexOutOfRange {
                index,
                len: self.spectrum.len(),
            });
        }
        Ok(self.toggle(index))
    }

    fn toggle(&mut self, index: usize) -> ClickEffect {
        if self.selection.toggle(index) {
            log::debug!("row {index} selected");
            ClickEffect::Selected(index)
        } else {
            log::debug!("row {index} deselected");
            ClickEffect::Deselected(index)
        }
    }

    /// Drop every pick and keep the session going.
    pub fn reset(&mut self) {
        self.selection.clear();
    }

    /// Derived view for redraw: the spectrum with current peak flags.
    pub fn annotated(&self) -> AnnotatedSpectrum {
        annotate_selection(&self.spectrum, &self.selection)
    }

    /// End the session, producing the final annotated spectrum and the
    /// sorted index list.
    pub fn finalize(self) -> PickOutcome {
        let annotated = annotate_selection(&self.spectrum, &self.selection);
        let indices = self.selection.indices();
        log::info!("picking session finalized with {} peak(s)", indices.len());
        PickOutcome { annotated, indices }
    }
}

// ---------------------------------------------------------------------------
// PickOutcome – final products of a session
// ---------------------------------------------------------------------------

/// What a finished session hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    /// The spectrum with its final peak flags.
    pub annotated: AnnotatedSpectrum,
    /// Picked indices, ascending.
    pub indices: Vec<usize>,
}

impl PickOutcome {
    /// Typed export of the index list, detached from the session.
    pub fn export(&self) -> PeakExport {
        PeakExport::new(self.indices.clone())
    }
}
