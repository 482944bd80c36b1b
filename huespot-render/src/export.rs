//! PNG export with embedded metadata (tEXt chunks) and marker overlays.

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use huespot_core::{GradientDescriptor, Position};

use crate::buffer::PixelBuffer;

/// Radius of the stamped marker ring, in pixels.
const MARKER_RADIUS: i64 = 8;

/// Stamp a ring at each resolved marker position so exported images show
/// where the palette markers would sit. The ring is white with a dark
/// outline, readable on any gradient.
pub fn stamp_markers(buffer: &mut PixelBuffer, positions: &[Position]) {
    for position in positions {
        // Outline first; the rings share their boundary pixels and the
        // white ring must win there.
        stamp_ring(buffer, position, MARKER_RADIUS + 1, [20, 20, 20]);
        stamp_ring(buffer, position, MARKER_RADIUS, [255, 255, 255]);
    }
}

fn stamp_ring(buffer: &mut PixelBuffer, center: &Position, radius: i64, rgb: [u8; 3]) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > radius * radius || dist_sq < (radius - 1) * (radius - 1) {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && (x as u32) < buffer.width && (y as u32) < buffer.height {
                buffer.set_rgb(x as u32, y as u32, rgb);
            }
        }
    }
}

/// Write a pixel buffer as a PNG with the gradient recipe embedded as tEXt
/// chunks, so an exported image can be traced back to its descriptor.
///
/// Uses the `png` crate directly for custom chunk support.
pub fn export_png(
    buffer: &PixelBuffer,
    descriptor: &GradientDescriptor,
    path: &Path,
) -> Result<(), String> {
    let file = std::fs::File::create(path).map_err(|e| format!("Failed to create file: {e}"))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder
        .add_text_chunk("Software".to_string(), "Huespot".to_string())
        .map_err(|e| format!("Failed to add text chunk: {e}"))?;

    for (key, value) in metadata_pairs(descriptor, buffer) {
        encoder
            .add_text_chunk(key.clone(), value)
            .map_err(|e| format!("Failed to add text chunk '{key}': {e}"))?;
    }

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {e}"))?;
    png_writer
        .write_image_data(&buffer.pixels)
        .map_err(|e| format!("Failed to write PNG image data: {e}"))?;

    debug!(
        width = buffer.width,
        height = buffer.height,
        path = %path.display(),
        "Exported gradient PNG"
    );
    Ok(())
}

fn metadata_pairs(descriptor: &GradientDescriptor, buffer: &PixelBuffer) -> Vec<(String, String)> {
    let stops = descriptor
        .stops
        .iter()
        .map(|s| s.hex().to_string())
        .collect::<Vec<_>>()
        .join(",");
    vec![
        ("Huespot.Gradient".into(), descriptor.css()),
        ("Huespot.Angle".into(), descriptor.angle_degrees.to_string()),
        ("Huespot.Stops".into(), stops),
        (
            "Huespot.Resolution".into(),
            format!("{}x{}", buffer.width, buffer.height),
        ),
    ]
}
