use serde::{Deserialize, Serialize};

use crate::data::annotate::{annotate, AnnotatedSpectrum};
use crate::data::model::Spectrum;
use crate::error::Result;

// ---------------------------------------------------------------------------
// PeakExport – reproducible record of picked indices
// ---------------------------------------------------------------------------

/// The finalized index list, detached from any live session.
///
/// An export can be serialized, stored however the caller likes, and later
/// re-applied to the same spectrum to reproduce the annotation without
/// re-running the interactive session. Rendering it as source code for a
/// clipboard is left to external formatters; the JSON form below is the
/// only textual representation owned here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakExport {
    pub indices: Vec<usize>,
}

impl PeakExport {
    /// Build an export from an index list; sorts and drops duplicates.
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Re-apply the recorded picks to a spectrum.
    ///
    /// Fails when an index does not fit the spectrum, e.g. when the export
    /// is replayed against a different dataset than it was picked on.
    pub fn apply(&self, spectrum: &Spectrum) -> Result<AnnotatedSpectrum> {
        annotate(spectrum, &self.indices)
    }

    /// Serialize to the canonical JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an export back from its JSON form.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
