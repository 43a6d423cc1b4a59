//! vizdeck-data — In-memory tables backing the deck's charts.
//!
//! Tables are loaded once at startup from comma-separated files whose first
//! column is an index (dropped on load) and are read-only afterwards. All
//! projections rebuild their result from scratch.

pub mod datasets;
pub mod error;
pub mod projection;
pub mod table;
pub mod value;

pub use datasets::Datasets;
pub use error::DataError;
pub use table::Table;
pub use value::Datum;
