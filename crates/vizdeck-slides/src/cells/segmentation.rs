//! Canvas annotations → segmented image.

use std::sync::Arc;

use image::RgbImage;
use serde_json::Value;
use tracing::debug;
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};
use vizdeck_segment::{
    decode_data_url, encode_png_data_url, segment, MaskError, SegmentError, SlicParams,
};

/// `canvas-bg.json_data` (+ an optional uploaded image) → `seg-image.src`.
pub struct Segmentation {
    default_image: Arc<RgbImage>,
    params: SlicParams,
}

impl Segmentation {
    pub fn new(default_image: Arc<RgbImage>) -> Self {
        Self { default_image, params: SlicParams::default() }
    }

    pub fn with_params(mut self, params: SlicParams) -> Self {
        self.params = params;
        self
    }
}

impl Cell for Segmentation {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("segmentation")
            .input("canvas-bg", "json_data")
            .input("canvas-bg", "image_content")
            .output("seg-image", "src")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let Some(annotations) = args.str("canvas-bg", "json_data").filter(|s| !s.is_empty()) else {
            return Ok(Outcome::NoUpdate);
        };

        let uploaded = match args.str("canvas-bg", "image_content") {
            Some(url) => Some(decode_data_url(url).map_err(|e| CellError::Failed(e.to_string()))?),
            None => None,
        };
        let image = uploaded.as_ref().unwrap_or(&self.default_image);

        let segmented = match segment(image, annotations, &self.params) {
            Ok(segmented) => segmented,
            Err(SegmentError::Mask(e @ MaskError::OutOfBounds { .. })) => {
                debug!("ignoring annotation: {}", e);
                return Ok(Outcome::NoUpdate);
            }
            Err(e) => return Err(CellError::Failed(e.to_string())),
        };
        let url = encode_png_data_url(&segmented).map_err(|e| CellError::Failed(e.to_string()))?;
        Ok(Outcome::emit(vec![Value::String(url)]))
    }
}
