use rayon::prelude::*;
use tracing::debug;

use huespot_core::GradientDescriptor;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// Rasterize a linear gradient into an offscreen RGBA buffer.
///
/// The gradient axis is a segment through the raster center whose direction
/// is the descriptor's CSS angle rotated by −90° (CSS 0° points up, the
/// drawing plane's 0° points right), extended to `sqrt(w² + h²)` so its
/// projection covers the whole raster at any aspect ratio. Each pixel
/// projects onto that segment and interpolates between the RGB-converted
/// stops — the same stop colors the display surface shows, so sampled
/// positions match what is actually on screen.
pub fn rasterize(
    descriptor: &GradientDescriptor,
    width: u32,
    height: u32,
) -> crate::Result<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(RenderError::DegenerateViewport { width, height });
    }

    let w = f64::from(width);
    let h = f64::from(height);
    let theta = (f64::from(descriptor.angle_degrees) - 90.0).to_radians();
    let dir = (theta.cos(), theta.sin());
    let axis_len = (w * w + h * h).sqrt();
    let start = (
        w / 2.0 - dir.0 * axis_len / 2.0,
        h / 2.0 - dir.1 * axis_len / 2.0,
    );

    let stops: Vec<[u8; 3]> = descriptor.stops.iter().map(|s| s.rgb()).collect();

    let mut buffer = PixelBuffer::new(width, height);
    let stride = width as usize * 4;
    buffer
        .pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f64 + 0.5;
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let px = x as f64 + 0.5;
                let t = ((px - start.0) * dir.0 + (py - start.1) * dir.1) / axis_len;
                let rgb = sample_stops(&stops, t.clamp(0.0, 1.0));
                pixel[0] = rgb[0];
                pixel[1] = rgb[1];
                pixel[2] = rgb[2];
                pixel[3] = 255;
            }
        });

    debug!(
        width,
        height,
        angle = descriptor.angle_degrees,
        stops = stops.len(),
        "rasterized gradient"
    );
    Ok(buffer)
}

/// Interpolate evenly spaced stops at axis fraction `t` in `[0, 1]`.
fn sample_stops(stops: &[[u8; 3]], t: f64) -> [u8; 3] {
    match stops.len() {
        0 => [0, 0, 0],
        1 => stops[0],
        n => {
            let scaled = t * (n - 1) as f64;
            let lo = (scaled.floor() as usize).min(n - 2);
            let frac = scaled - lo as f64;
            lerp_rgb(stops[lo], stops[lo + 1], frac)
        }
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let inv = 1.0 - t;
    [
        (f64::from(a[0]) * inv + f64::from(b[0]) * t).round() as u8,
        (f64::from(a[1]) * inv + f64::from(b[1]) * t).round() as u8,
        (f64::from(a[2]) * inv + f64::from(b[2]) * t).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use huespot_core::ColorStop;

    fn two_stop(angle: u16) -> GradientDescriptor {
        GradientDescriptor {
            angle_degrees: angle,
            stops: vec![ColorStop::new(0, 100, 50), ColorStop::new(240, 100, 50)],
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            rasterize(&two_stop(90), 0, 100),
            Err(RenderError::DegenerateViewport { .. })
        ));
        assert!(matches!(
            rasterize(&two_stop(90), 100, 0),
            Err(RenderError::DegenerateViewport { .. })
        ));
    }

    #[test]
    fn horizontal_gradient_runs_left_to_right() {
        // 90° = gradient axis pointing right: red fades toward blue.
        let buf = rasterize(&two_stop(90), 400, 4).unwrap();
        let left = buf.rgb(0, 2);
        let right = buf.rgb(399, 2);
        assert!(left[0] > 200 && left[2] < 60, "left edge is mostly red: {left:?}");
        assert!(right[2] > 200 && right[0] < 60, "right edge is mostly blue: {right:?}");
        // Columns share a color at this angle.
        assert_eq!(buf.rgb(10, 0), buf.rgb(10, 3));
    }

    #[test]
    fn zero_degrees_points_up() {
        let buf = rasterize(&two_stop(0), 4, 400).unwrap();
        let bottom = buf.rgb(2, 399);
        let top = buf.rgb(2, 0);
        // First stop (red) sits at the axis start, which for 0° is the bottom.
        assert!(bottom[0] > top[0], "red component should decrease upward");
        assert!(top[2] > bottom[2], "blue component should increase upward");
    }

    #[test]
    fn opposite_angles_mirror() {
        let buf_r = rasterize(&two_stop(90), 200, 2).unwrap();
        let buf_l = rasterize(&two_stop(270), 200, 2).unwrap();
        assert_eq!(buf_r.rgb(0, 0), buf_l.rgb(199, 0));
    }

    #[test]
    fn midpoint_blends_the_stops() {
        let descriptor = GradientDescriptor {
            angle_degrees: 90,
            stops: vec![ColorStop::new(0, 0, 0), ColorStop::new(0, 0, 100)],
        };
        let buf = rasterize(&descriptor, 201, 3).unwrap();
        let mid = buf.rgb(100, 1);
        for channel in mid {
            assert!((120..=135).contains(&channel), "mid pixel ≈ 50% gray: {mid:?}");
        }
    }

    #[test]
    fn three_stops_hit_the_middle_stop_at_center() {
        let descriptor = GradientDescriptor {
            angle_degrees: 90,
            stops: vec![
                ColorStop::new(0, 100, 50),
                ColorStop::new(120, 100, 50),
                ColorStop::new(240, 100, 50),
            ],
        };
        let buf = rasterize(&descriptor, 301, 3).unwrap();
        let mid = buf.rgb(150, 1);
        let green = ColorStop::new(120, 100, 50).rgb();
        for (got, want) in mid.iter().zip(green.iter()) {
            assert!((i16::from(*got) - i16::from(*want)).abs() <= 2, "{mid:?} vs {green:?}");
        }
    }

    #[test]
    fn single_stop_fills_solid() {
        let descriptor = GradientDescriptor {
            angle_degrees: 45,
            stops: vec![ColorStop::new(120, 100, 50)],
        };
        let buf = rasterize(&descriptor, 16, 16).unwrap();
        let expected = ColorStop::new(120, 100, 50).rgb();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(buf.rgb(x, y), expected);
            }
        }
    }

    #[test]
    fn rasterization_is_deterministic() {
        let d = two_stop(33);
        let a = rasterize(&d, 64, 48).unwrap();
        let b = rasterize(&d, 64, 48).unwrap();
        assert_eq!(a.pixels, b.pixels);
    }
}
