//! Data layer: the spectrum model and the picking primitives.
//!
//! ```text
//!   click (x, y)
//!        │
//!        ▼
//!   ┌───────────┐
//!   │   peaks    │  nearest point → uphill walk
//!   └───────────┘
//!        │ row index
//!        ▼
//!   ┌───────────┐
//!   │ selection  │  toggle pick
//!   └───────────┘
//!        │ sorted indices
//!        ▼
//!   ┌───────────┐
//!   │ annotate   │  is_peak flags
//!   └───────────┘
//! ```

pub mod annotate;
pub mod model;
pub mod peaks;
pub mod selection;
