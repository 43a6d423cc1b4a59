//! Startup asset loading. Every failure here is fatal.

use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbImage;
use serde_json::Value;
use tracing::info;
use vizdeck_config::AssetsConfig;
use vizdeck_data::Datasets;
use vizdeck_network::FollowerGraph;
use vizdeck_segment::encode_png_data_url;

/// Everything the slides and cells read, loaded once and shared.
#[derive(Debug, Clone)]
pub struct Assets {
    pub data: Arc<Datasets>,
    pub network: Arc<FollowerGraph>,
    /// Default image for the segmentation canvas.
    pub image: Arc<RgbImage>,
    /// The same image as a PNG data URL, for the canvas background.
    pub image_url: String,
    /// Molecule model, handed to the viewer widget untouched.
    pub molecule: Value,
}

impl Assets {
    pub fn load(config: &AssetsConfig) -> Result<Self> {
        let data = Datasets::load(config).context("loading datasets")?;

        let network_path = config.path(&config.network);
        let network = FollowerGraph::from_path(&network_path, config.network_edge_limit)
            .with_context(|| format!("loading edge list {}", network_path.display()))?;

        let image_path = config.path(&config.image);
        let image = image::open(&image_path)
            .with_context(|| format!("decoding image {}", image_path.display()))?
            .to_rgb8();
        let image_url = encode_png_data_url(&image).context("encoding canvas image")?;

        let molecule_path = config.path(&config.molecule);
        let raw = std::fs::read_to_string(&molecule_path)
            .with_context(|| format!("reading {}", molecule_path.display()))?;
        let molecule: Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", molecule_path.display()))?;

        info!(
            "Assets loaded: image {}x{}, network {} nodes",
            image.width(),
            image.height(),
            network.node_count()
        );

        Ok(Self {
            data: Arc::new(data),
            network: Arc::new(network),
            image: Arc::new(image),
            image_url,
            molecule,
        })
    }
}
