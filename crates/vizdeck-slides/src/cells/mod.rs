//! Cells wiring the slides' interactive components.
//!
//! - [`toggle`]: click-count alternatives
//! - [`tourism`], [`gapminder`], [`components`]: projections over static data
//! - [`hotels`]: the cross-filtering hotel map
//! - [`network`]: click-to-expand follower graph
//! - [`segmentation`]: annotation-guided image segmentation
//! - [`echo`]: JSON echoes of interaction payloads

pub mod components;
pub mod echo;
pub mod gapminder;
pub mod hotels;
pub mod network;
pub mod segmentation;
pub mod toggle;
pub mod tourism;

pub use toggle::Toggle;

#[cfg(test)]
pub(crate) mod testing {
    use crate::Assets;
    use vizdeck_test_utils::write_assets;

    /// Fixture assets; everything is in memory once loaded.
    pub fn assets() -> Assets {
        let dir = tempfile::tempdir().unwrap();
        let config = write_assets(dir.path());
        Assets::load(&config).unwrap()
    }
}
