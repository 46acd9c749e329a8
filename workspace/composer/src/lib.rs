//! Pure portfolio-composition core: the editable row list and the
//! category/asset lookup derived from the loaded dataset.
//!
//! Everything here is synchronous, in-memory and UI-free; the frontend crate
//! owns rendering and event wiring.

pub mod dataset;
pub mod draft;
pub mod index;

pub use dataset::Dataset;
pub use draft::{PortfolioDraft, RowId, SelectionRow};
pub use index::AssetIndex;
