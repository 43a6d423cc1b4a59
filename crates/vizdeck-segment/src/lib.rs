//! vizdeck-segment — Annotation-guided image segmentation.
//!
//! The drawing canvas sends its free-hand strokes as fabric.js JSON. Strokes
//! are rasterised into a [`Mask`]; the image is split into superpixels and
//! every superpixel the mask touches is kept, the rest painted white.

pub mod dataurl;
pub mod mask;
pub mod slic;

use image::{Rgb, RgbImage};
use thiserror::Error;
use tracing::debug;

pub use dataurl::{decode_data_url, encode_png_data_url};
pub use mask::{parse_annotations, Mask, MaskError};
pub use slic::{superpixels, SlicParams};

/// Colour painted over unselected pixels.
pub const FILL: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("Mask error: {0}")]
    Mask(#[from] MaskError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Not a base64 data URL")]
    NotDataUrl,
}

/// Keep the superpixels touched by the annotation strokes.
///
/// An annotation selecting zero pixels keeps the whole image.
pub fn segment(
    image: &RgbImage,
    annotations: &str,
    params: &SlicParams,
) -> Result<RgbImage, SegmentError> {
    let mask = parse_annotations(annotations, image.width(), image.height())?;
    if mask.area() == 0 {
        debug!("empty annotation mask, keeping whole image");
        return Ok(image.clone());
    }

    let labels = superpixels(image, params);
    let mut selected = vec![false; labels.iter().copied().max().map_or(0, |m| m as usize + 1)];
    for (i, &label) in labels.iter().enumerate() {
        if mask.get_index(i) {
            selected[label as usize] = true;
        }
    }
    debug!(
        "mask area {} selects {} of {} superpixels",
        mask.area(),
        selected.iter().filter(|s| **s).count(),
        selected.len()
    );

    let width = image.width() as usize;
    let mut out = image.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let label = labels[y as usize * width + x as usize];
        if !selected[label as usize] {
            *pixel = FILL;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizdeck_test_utils::{sample_image, IMAGE_SIZE};

    fn stroke(points: &[(u32, u32)]) -> String {
        let mut path: Vec<serde_json::Value> = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let cmd = if i == 0 { "M" } else { "L" };
                serde_json::json!([cmd, x, y])
            })
            .collect();
        // the final command is not part of the stroke
        path.push(serde_json::json!(["L", 0, 0]));
        serde_json::json!({"objects": [{"type": "path", "scaleX": 1, "path": path}]}).to_string()
    }

    #[test]
    fn test_empty_annotation_keeps_image() {
        let img = sample_image();
        let out = segment(&img, r#"{"objects": []}"#, &SlicParams::default()).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_stroke_on_red_half_whitens_blue_half() {
        let img = sample_image();
        let params = SlicParams { segments: 4, ..SlicParams::default() };
        let out = segment(&img, &stroke(&[(1, 1), (2, 12), (3, 12)]), &params).unwrap();

        assert_eq!(*out.get_pixel(1, 1), *img.get_pixel(1, 1));
        assert_eq!(*out.get_pixel(IMAGE_SIZE - 1, IMAGE_SIZE - 1), FILL);
    }

    #[test]
    fn test_out_of_bounds_stroke_is_an_error() {
        let img = sample_image();
        let result = segment(&img, &stroke(&[(1, 1), (40, 40), (2, 2)]), &SlicParams::default());
        assert!(matches!(result, Err(SegmentError::Mask(MaskError::OutOfBounds { .. }))));
    }
}
