use serde::{Deserialize, Serialize};

use crate::data::model::Spectrum;
use crate::data::selection::Selection;
use crate::error::{PickError, Result};

// ---------------------------------------------------------------------------
// AnnotatedSpectrum – spectrum plus per-row peak flags
// ---------------------------------------------------------------------------

/// A spectrum with one `is_peak` flag per row.
///
/// Always derived: recomputed on demand from a spectrum and an index list;
/// during a live session the [`Selection`] stays authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSpectrum {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub is_peak: Vec<bool>,
}

impl AnnotatedSpectrum {
    /// Indices of the rows flagged as peaks, ascending.
    pub fn peak_indices(&self) -> Vec<usize> {
        self.is_peak
            .iter()
            .enumerate()
            .filter(|(_, &flag)| flag)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of rows flagged as peaks.
    pub fn peak_count(&self) -> usize {
        self.is_peak.iter().filter(|&&flag| flag).count()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the spectrum has no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Annotation
// ---------------------------------------------------------------------------

/// Flag the given rows as peaks on a derived copy of the spectrum.
///
/// Pure: the input spectrum is left untouched. Duplicate indices collapse
/// onto the same flag. Any index outside `[0, len)` rejects the whole call
/// with [`PickError::IndexOutOfRange`]: out-of-range input is a caller
/// error, never clamped.
pub fn annotate(spectrum: &Spectrum, indices: &[usize]) -> Result<AnnotatedSpectrum> {
    let len = spectrum.len();
    if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
        return Err(PickError::IndexOutOfRange { index: bad, len });
    }
    Ok(flag_rows(spectrum, indices.iter().copied()))
}

/// Annotate from a live selection, whose indices are validated on insertion.
pub(crate) fn annotate_selection(spectrum: &Spectrum, selection: &Selection) -> AnnotatedSpectrum {
    flag_rows(spectrum, selection.iter())
}

fn flag_rows<I>(spectrum: &Spectrum, indices: I) -> AnnotatedSpectrum
where
    I: IntoIterator<Item = usize>,
{
    let mut is_peak = vec![false; spectrum.len()];
    for i in indices {
        is_peak[i] = true;
    }
    AnnotatedSpectrum {
        x: spectrum.x().to_vec(),
        y: spectrum.y().to_vec(),
        is_peak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wavy() -> Spectrum {
        Spectrum::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 1.0, 3.0, 2.0, 4.0, 0.0, -1.0],
        )
        .unwrap()
    }

    #[test]
    fn flags_exactly_the_given_rows() {
        let annotated = annotate(&wavy(), &[2, 5]).unwrap();
        assert_eq!(
            annotated.is_peak,
            vec![false, false, true, false, false, true, false]
        );
        assert_eq!(annotated.peak_indices(), vec![2, 5]);
    }

    #[test]
    fn duplicate_indices_collapse() {
        let annotated = annotate(&wavy(), &[4, 4, 4]).unwrap();
        assert_eq!(annotated.peak_count(), 1);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = annotate(&wavy(), &[2, 7]).unwrap_err();
        assert!(matches!(
            err,
            PickError::IndexOutOfRange { index: 7, len: 7 }
        ));
    }

    #[test]
    fn empty_index_list_flags_nothing() {
        let annotated = annotate(&wavy(), &[]).unwrap();
        assert_eq!(annotated.peak_count(), 0);
        assert_eq!(annotated.len(), 7);
    }
}
