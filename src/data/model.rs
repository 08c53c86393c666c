use serde::{Deserialize, Serialize};

use crate::error::{PickError, Result};

// ---------------------------------------------------------------------------
// Spectrum – the two-column dataset
// ---------------------------------------------------------------------------

/// An ordered sequence of (x, y) pairs, e.g. one measured spectrum.
///
/// The columns always have equal length; `new` enforces this. The picking
/// algorithms assume x is ascending and sampled uniformly enough that
/// "neighbour index" means "spatially adjacent"; neither is enforced here.
/// A spectrum is immutable for the lifetime of a picking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from its two columns.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(PickError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Spectrum { x, y })
    }

    /// Build a spectrum from (x, y) pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Spectrum { x, y }
    }

    /// Wavenumber / abscissa column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Intensity / ordinate column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The (x, y) pair at `index`, if in range.
    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_columns() {
        let err = Spectrum::new(vec![0.0, 1.0], vec![0.0]).unwrap_err();
        assert!(matches!(
            err,
            PickError::LengthMismatch { x_len: 2, y_len: 1 }
        ));
    }

    #[test]
    fn from_pairs_splits_columns() {
        let sp = Spectrum::from_pairs([(0.0, 1.0), (1.0, 3.0)]);
        assert_eq!(sp.x(), &[0.0, 1.0]);
        assert_eq!(sp.y(), &[1.0, 3.0]);
        assert_eq!(sp.point(1), Some((1.0, 3.0)));
        assert_eq!(sp.point(2), None);
    }
}
