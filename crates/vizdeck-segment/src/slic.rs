//! SLIC superpixels.
//!
//! k-means over (L, a, b, x, y) restricted to a 2S window around each
//! centre, S being the grid step. No connectivity post-processing.

use image::RgbImage;

#[derive(Debug, Clone, PartialEq)]
pub struct SlicParams {
    /// Approximate number of superpixels.
    pub segments: usize,
    /// Weight of spatial distance against colour distance.
    pub compactness: f64,
    pub iterations: usize,
}

impl Default for SlicParams {
    fn default() -> Self {
        Self { segments: 200, compactness: 10.0, iterations: 10 }
    }
}

#[derive(Debug, Clone, Copy)]
struct Centre {
    lab: [f64; 3],
    x: f64,
    y: f64,
}

/// One label per pixel, row-major. Labels are dense from zero.
pub fn superpixels(image: &RgbImage, params: &SlicParams) -> Vec<u32> {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let lab: Vec<[f64; 3]> = image.pixels().map(|p| rgb_to_lab(p.0)).collect();
    let step = ((w * h) as f64 / params.segments.max(1) as f64).sqrt().max(1.0);
    let mut centres = grid_centres(&lab, w, h, step);

    let spatial_weight = (params.compactness / step).powi(2);
    let mut labels = vec![u32::MAX; w * h];
    let mut distances = vec![f64::INFINITY; w * h];
    let radius = step.ceil() as i64;

    for _ in 0..params.iterations.max(1) {
        distances.iter_mut().for_each(|d| *d = f64::INFINITY);
        for (k, c) in centres.iter().enumerate() {
            let (cx, cy) = (c.x.round() as i64, c.y.round() as i64);
            let x_range = (cx - radius).max(0)..=(cx + radius).min(w as i64 - 1);
            let y_range = (cy - radius).max(0)..=(cy + radius).min(h as i64 - 1);
            for y in y_range {
                for x in x_range.clone() {
                    let i = y as usize * w + x as usize;
                    let d = colour_distance(&lab[i], &c.lab)
                        + spatial_weight * ((x as f64 - c.x).powi(2) + (y as f64 - c.y).powi(2));
                    if d < distances[i] {
                        distances[i] = d;
                        labels[i] = k as u32;
                    }
                }
            }
        }
        assign_orphans(&mut labels, &lab, &centres, w, spatial_weight);
        update_centres(&mut centres, &labels, &lab, w);
    }

    compact_labels(&mut labels);
    labels
}

fn grid_centres(lab: &[[f64; 3]], w: usize, h: usize, step: f64) -> Vec<Centre> {
    let mut centres = Vec::new();
    let mut y = step / 2.0;
    while y < h as f64 {
        let mut x = step / 2.0;
        while x < w as f64 {
            let i = y as usize * w + x as usize;
            centres.push(Centre { lab: lab[i], x, y });
            x += step;
        }
        y += step;
    }
    if centres.is_empty() {
        // thin images: the grid can miss every row or column
        let (x, y) = (w / 2, h / 2);
        centres.push(Centre { lab: lab[y * w + x], x: x as f64, y: y as f64 });
    }
    centres
}

/// Pixels no window reached after centres drifted go to the nearest centre.
fn assign_orphans(labels: &mut [u32], lab: &[[f64; 3]], centres: &[Centre], w: usize, spatial_weight: f64) {
    for (i, label) in labels.iter_mut().enumerate() {
        if *label != u32::MAX {
            continue;
        }
        let (x, y) = ((i % w) as f64, (i / w) as f64);
        let nearest = centres
            .iter()
            .enumerate()
            .map(|(k, c)| {
                let d = colour_distance(&lab[i], &c.lab)
                    + spatial_weight * ((x - c.x).powi(2) + (y - c.y).powi(2));
                (k, d)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((k, _)) = nearest {
            *label = k as u32;
        }
    }
}

fn update_centres(centres: &mut [Centre], labels: &[u32], lab: &[[f64; 3]], w: usize) {
    let mut sums = vec![[0.0f64; 6]; centres.len()];
    for (i, &label) in labels.iter().enumerate() {
        let s = &mut sums[label as usize];
        s[0] += lab[i][0];
        s[1] += lab[i][1];
        s[2] += lab[i][2];
        s[3] += (i % w) as f64;
        s[4] += (i / w) as f64;
        s[5] += 1.0;
    }
    for (c, s) in centres.iter_mut().zip(sums) {
        if s[5] > 0.0 {
            let n = s[5];
            *c = Centre { lab: [s[0] / n, s[1] / n, s[2] / n], x: s[3] / n, y: s[4] / n };
        }
    }
}

/// Renumber so that labels run 0..n in order of first appearance.
fn compact_labels(labels: &mut [u32]) {
    let mut remap = std::collections::HashMap::new();
    for label in labels.iter_mut() {
        let next = remap.len() as u32;
        *label = *remap.entry(*label).or_insert(next);
    }
}

fn colour_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// sRGB (D65) to CIELAB.
fn rgb_to_lab([r, g, b]: [u8; 3]) -> [f64; 3] {
    fn linear(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
    }
    fn f(t: f64) -> f64 {
        if t > 0.008856 { t.cbrt() } else { 7.787 * t + 16.0 / 116.0 }
    }
    let (r, g, b) = (linear(r), linear(g), linear(b));
    let x = (0.412453 * r + 0.357580 * g + 0.180423 * b) / 0.950456;
    let y = 0.212671 * r + 0.715160 * g + 0.072169 * b;
    let z = (0.019334 * r + 0.119193 * g + 0.950227 * b) / 1.088754;
    let (fx, fy, fz) = (f(x), f(y), f(z));
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vizdeck_test_utils::{sample_image, IMAGE_SIZE};

    #[test]
    fn test_colour_halves_never_share_a_superpixel() {
        let img = sample_image();
        let labels = superpixels(&img, &SlicParams { segments: 4, ..SlicParams::default() });
        assert_eq!(labels.len(), (IMAGE_SIZE * IMAGE_SIZE) as usize);

        let w = IMAGE_SIZE as usize;
        let left: std::collections::HashSet<u32> =
            labels.iter().enumerate().filter(|(i, _)| i % w < w / 2).map(|(_, l)| *l).collect();
        let right: std::collections::HashSet<u32> =
            labels.iter().enumerate().filter(|(i, _)| i % w >= w / 2).map(|(_, l)| *l).collect();
        assert!(left.is_disjoint(&right));
    }

    #[test]
    fn test_labels_are_dense() {
        let img = sample_image();
        let labels = superpixels(&img, &SlicParams::default());
        let max = *labels.iter().max().unwrap();
        for l in 0..=max {
            assert!(labels.contains(&l));
        }
    }

    #[test]
    fn test_lab_reference_points() {
        let white = rgb_to_lab([255, 255, 255]);
        assert!((white[0] - 100.0).abs() < 0.1);
        assert!(white[1].abs() < 0.1 && white[2].abs() < 0.1);
        assert!(rgb_to_lab([0, 0, 0])[0].abs() < 1e-9);
    }
}
