use crate::data::model::Spectrum;
use crate::error::{PickError, Result};

// ---------------------------------------------------------------------------
// Gradient – central-difference slope
// ---------------------------------------------------------------------------

/// Local slope at an interior row, estimated by central difference:
/// `(y[i+1] - y[i-1]) / (x[i+1] - x[i-1])`.
///
/// Fails with [`PickError::BoundaryIndex`] at the first and last rows, where
/// no two-sided neighbour exists. Duplicate x values at `i-1` and `i+1`
/// yield an infinite slope; callers that care must check `is_finite()`.
pub fn gradient(spectrum: &Spectrum, index: usize) -> Result<f64> {
    let len = spectrum.len();
    if index >= len {
        return Err(PickError::IndexOutOfRange { index, len });
    }
    if index == 0 || index == len - 1 {
        return Err(PickError::BoundaryIndex { index, len });
    }
    let x = spectrum.x();
    let y = spectrum.y();
    Ok((y[index + 1] - y[index - 1]) / (x[index + 1] - x[index - 1]))
}

// ---------------------------------------------------------------------------
// Peak locator – uphill walk to the nearest local maximum
// ---------------------------------------------------------------------------

/// Walk uphill from `start` until the next step no longer increases y, and
/// return the row the walk settles on.
///
/// At each position the local gradient picks the direction: forward when
/// positive, backward otherwise (an exactly zero slope walks backward). The
/// walk only commits a step while it strictly increases y, so the result is
/// the first local maximum in the chosen direction, not necessarily the
/// global one, and near a saddle it can settle on a different peak than the
/// visually closest.
///
/// Returns `None` when the walk reaches a row with no computable gradient
/// (the first or last row); that failure is logged and never fatal.
pub fn locate_peak(spectrum: &Spectrum, start: usize) -> Option<usize> {
    let mut current = start;
    loop {
        let slope = match gradient(spectrum, current) {
            Ok(s) => s,
            Err(e) => {
                log::debug!("uphill walk stopped at row {current}: {e}");
                return None;
            }
        };

        let next = if slope > 0.0 {
            current + 1
        } else {
            match current.checked_sub(1) {
                Some(n) => n,
                // Blocked by the left edge: settle on the current row.
                None => return Some(current),
            }
        };
        if next >= spectrum.len() {
            // Blocked by the right edge: settle on the current row.
            return Some(current);
        }

        if spectrum.y()[next] > spectrum.y()[current] {
            current = next;
        } else {
            return Some(current);
        }
    }
}

// ---------------------------------------------------------------------------
// Nearest point – click hit test
// ---------------------------------------------------------------------------

/// Index of the data point closest to a click, or `None` when nothing lies
/// within `max_distance`.
///
/// Distances are Euclidean in whatever coordinate space the click is
/// reported in (plot units or pixels); the threshold is inclusive. Rows
/// with a non-finite coordinate are never hit. Exact distance ties go to
/// the lowest index.
pub fn nearest_point(
    spectrum: &Spectrum,
    click_x: f64,
    click_y: f64,
    max_distance: f64,
) -> Option<usize> {
    let mut best_index = None;
    let mut best_dist_sq = f64::INFINITY;

    for (i, (&xi, &yi)) in spectrum.x().iter().zip(spectrum.y()).enumerate() {
        if !xi.is_finite() || !yi.is_finite() {
            continue;
        }
        let dist_sq = (xi - click_x).powi(2) + (yi - click_y).powi(2);
        // Strict `<` keeps the lowest index on ties.
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best_index = Some(i);
        }
    }

    let index = best_index?;
    if best_dist_sq.sqrt() <= max_distance {
        Some(index)
    } else {
        None
    }
}
