//! Interactive peak picking for two-column spectral data.
//!
//! The crate implements the algorithmic core of a click-to-pick workflow:
//! map a click to the nearest sampled point, walk uphill to the local
//! maximum, toggle that row in the current selection, and flag the chosen
//! rows on a derived copy of the dataset. Rendering, input handling and
//! persistence stay with the caller; the library only ever sees plot-space
//! coordinates and row indices.
//!
//! Typical flow:
//!
//! ```
//! use peak_picker::{ClickPoint, PickConfig, PickSession, Spectrum};
//!
//! let spectrum = Spectrum::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//!     vec![0.0, 1.0, 3.0, 2.0, 4.0, 0.0, -1.0],
//! )?;
//! let mut session = PickSession::new(spectrum, PickConfig::default());
//!
//! // A click near (1, 1) snaps uphill to the local maximum at row 2.
//! session.handle_click(ClickPoint { x: 1.1, y: 0.9 });
//!
//! let outcome = session.finalize();
//! assert_eq!(outcome.indices, vec![2]);
//! # Ok::<(), peak_picker::PickError>(())
//! ```

pub mod data;
pub mod error;
pub mod export;
pub mod session;

pub use data::annotate::{annotate, AnnotatedSpectrum};
pub use data::model::Spectrum;
pub use data::peaks::{gradient, locate_peak, nearest_point};
pub use data::selection::Selection;
pub use error::{PickError, Result};
pub use export::PeakExport;
pub use session::{ClickEffect, ClickPoint, PickConfig, PickOutcome, PickSession};
