//! vizdeck-slides — The deck itself: slides, charts and the cells wiring them.
//!
//! [`Assets::load`] reads every backing file once; [`Deck::build`] turns
//! them into the route registry and the cell graph the server runs.

pub mod assets;
pub mod cells;
pub mod charts;
pub mod deck;
pub mod slides;
pub mod style;

pub use assets::Assets;
pub use deck::Deck;
