//! `data:` URLs for images crossing the wire.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbImage};

use crate::SegmentError;

const PNG_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png_data_url(image: &RgbImage) -> Result<String, SegmentError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("{PNG_PREFIX}{}", STANDARD.encode(bytes)))
}

/// Decode any base64 image data URL (`data:<mime>;base64,<payload>`).
pub fn decode_data_url(url: &str) -> Result<RgbImage, SegmentError> {
    let (header, payload) = url.split_once(',').ok_or(SegmentError::NotDataUrl)?;
    if !header.starts_with("data:") || !header.ends_with(";base64") {
        return Err(SegmentError::NotDataUrl);
    }
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(image::load_from_memory(&bytes)?.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizdeck_test_utils::sample_image;

    #[test]
    fn test_png_data_url_prefix_and_pixels() {
        let img = sample_image();
        let url = encode_png_data_url(&img).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&url).unwrap(), img);
    }

    #[test]
    fn test_plain_text_is_not_a_data_url() {
        assert!(matches!(decode_data_url("hello"), Err(SegmentError::NotDataUrl)));
        assert!(matches!(decode_data_url("data:text/plain,hello"), Err(SegmentError::NotDataUrl)));
    }
}
