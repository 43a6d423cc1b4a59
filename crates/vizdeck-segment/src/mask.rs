//! Rasterising canvas strokes into a boolean mask.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("Stroke point ({x}, {y}) lies outside the {width}x{height} image")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },

    #[error("Malformed annotation: {0}")]
    Malformed(String),
}

/// Row-major boolean mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, bits: vec![false; width as usize * height as usize] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[self.index(x, y)]
    }

    pub fn get_index(&self, i: usize) -> bool {
        self.bits.get(i).copied().unwrap_or(false)
    }

    /// Number of selected pixels.
    pub fn area(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn mark(&mut self, x: i64, y: i64) -> Result<(), MaskError> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(MaskError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        let i = self.index(x as u32, y as u32);
        self.bits[i] = true;
        Ok(())
    }

    /// Bresenham line between two pixel positions, both ends included.
    fn line(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64)) -> Result<(), MaskError> {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            self.mark(x, y)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CanvasJson {
    #[serde(default)]
    objects: Vec<CanvasObject>,
}

#[derive(Debug, Deserialize)]
struct CanvasObject {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "scaleX", default)]
    scale_x: Option<f64>,
    #[serde(default)]
    path: Vec<Vec<Value>>,
}

/// Build a mask from the canvas JSON.
///
/// Text that is not JSON at all yields an empty mask. The background image
/// object sets the display scale; path coordinates are mapped back to image
/// pixels by its inverse. Each path command contributes its last coordinate
/// pair, consecutive pairs are joined, and the closing command is ignored.
pub fn parse_annotations(json: &str, width: u32, height: u32) -> Result<Mask, MaskError> {
    let mut mask = Mask::new(width, height);
    let canvas: CanvasJson = match serde_json::from_str::<Value>(json) {
        Ok(value) => serde_json::from_value(value).map_err(|e| MaskError::Malformed(e.to_string()))?,
        Err(e) => {
            debug!("annotation is not JSON ({}), using empty mask", e);
            return Ok(mask);
        }
    };

    let mut scale = 1.0;
    for object in &canvas.objects {
        match object.kind.as_str() {
            "image" => {
                scale = object.scale_x.unwrap_or(1.0);
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(MaskError::Malformed(format!("image scale {scale}")));
                }
            }
            "path" => {
                let points = object
                    .path
                    .iter()
                    .map(|command| end_point(command, 1.0 / scale))
                    .collect::<Result<Vec<_>, _>>()?;
                if points.len() < 3 {
                    continue;
                }
                for pair in points[..points.len() - 1].windows(2) {
                    mask.line(pair[0], pair[1])?;
                }
            }
            _ => {}
        }
    }
    Ok(mask)
}

/// Last `(x, y)` of a path command such as `["Q", x1, y1, x2, y2]`.
fn end_point(command: &[Value], scale: f64) -> Result<(i64, i64), MaskError> {
    let n = command.len();
    let coord = |v: &Value| {
        v.as_f64()
            .map(|c| (c * scale).round() as i64)
            .ok_or_else(|| MaskError::Malformed(format!("non-numeric coordinate {v}")))
    };
    if n < 3 {
        return Err(MaskError::Malformed(format!("path command with {n} entries")));
    }
    Ok((coord(&command[n - 2])?, coord(&command[n - 1])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_json_is_empty_mask() {
        let mask = parse_annotations("not json {", 10, 10).unwrap();
        assert_eq!(mask.area(), 0);
    }

    #[test]
    fn test_horizontal_stroke_excludes_closing_command() {
        let json = r#"{"objects":[{"type":"path","path":[["M",1,2],["Q",1,2,5,2],["L",9,9]]}]}"#;
        let mask = parse_annotations(json, 10, 10).unwrap();
        assert_eq!(mask.area(), 5);
        assert!(mask.get(1, 2) && mask.get(5, 2));
        assert!(!mask.get(9, 9));
    }

    #[test]
    fn test_image_scale_maps_back_to_pixels() {
        let json = r#"{"objects":[
            {"type":"image","scaleX":2.0},
            {"type":"path","path":[["M",0,0],["L",8,0],["L",0,0]]}
        ]}"#;
        let mask = parse_annotations(json, 10, 10).unwrap();
        assert!(mask.get(4, 0));
        assert!(!mask.get(5, 0));
    }

    #[test]
    fn test_stroke_outside_image_is_rejected() {
        let json = r#"{"objects":[{"type":"path","path":[["M",1,1],["L",1,20],["L",0,0]]}]}"#;
        let err = parse_annotations(json, 10, 10).unwrap_err();
        assert!(matches!(err, MaskError::OutOfBounds { x: 1, y: 10, .. }));
    }

    #[test]
    fn test_non_numeric_coordinate_is_malformed() {
        let json = r#"{"objects":[{"type":"path","path":[["M","a",1],["L",1,2],["L",0,0]]}]}"#;
        assert!(matches!(parse_annotations(json, 10, 10), Err(MaskError::Malformed(_))));
    }
}
