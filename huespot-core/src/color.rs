use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One color anchor of a gradient, authored in HSL.
///
/// The RGB triple and hex string are derived once at construction and are
/// deliberately not public fields: they must stay a pure function of
/// `(hue, saturation, lightness)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Hue in degrees, `[0, 360)`.
    pub hue: u16,
    /// Saturation in percent, `[0, 100]`.
    pub saturation: u8,
    /// Lightness in percent, `[0, 100]`.
    pub lightness: u8,
    rgb: [u8; 3],
    hex: String,
}

impl ColorStop {
    /// Create a stop from HSL components, deriving RGB and hex.
    ///
    /// Out-of-range inputs are normalized (hue wraps, saturation and
    /// lightness clamp to 100).
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        let hue = hue % 360;
        let saturation = saturation.min(100);
        let lightness = lightness.min(100);
        let rgb = hsl_to_rgb(hue, saturation, lightness);
        let hex = rgb_to_hex(rgb);
        Self {
            hue,
            saturation,
            lightness,
            rgb,
            hex,
        }
    }

    /// The derived 8-bit-per-channel RGB triple.
    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The derived 24-bit hex string, `#rrggbb`.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// CSS `hsl(...)` form, used when assembling gradient descriptors.
    pub fn css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// CSS `hsla(...)` form with an explicit opacity.
    pub fn css_with_opacity(&self, opacity: f32) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue,
            self.saturation,
            self.lightness,
            opacity.clamp(0.0, 1.0)
        )
    }
}

/// Convert HSL (degrees, percent, percent) to an RGB triple.
///
/// Standard transform: with `k(n) = (n + h/30) mod 12` and
/// `a = s·min(l, 1−l)`, each channel is
/// `l − a·max(−1, min(k−3, 9−k, 1))` for n = 0 (R), 8 (G), 4 (B).
pub fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> [u8; 3] {
    let h = f64::from(hue % 360);
    let s = f64::from(saturation.min(100)) / 100.0;
    let l = f64::from(lightness.min(100)) / 100.0;

    let a = s * l.min(1.0 - l);
    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (value * 255.0).round().clamp(0.0, 255.0) as u8
    };

    [channel(0.0), channel(8.0), channel(4.0)]
}

/// Format an RGB triple as `#rrggbb`.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Parse a `#rrggbb` hex string back into an RGB triple.
pub fn hex_to_rgb(hex: &str) -> crate::Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CoreError::InvalidHex(hex.to_string()));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| CoreError::InvalidHex(hex.to_string()))
    };
    Ok([parse(0..2)?, parse(2..4)?, parse(4..6)?])
}

/// Euclidean distance between two colors in RGB space.
///
/// Crude perceptually, but cheap, and plenty for "is this pixel showing
/// roughly this stop" matching.
#[inline]
pub fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    let dr = f64::from(a[0]) - f64::from(b[0]);
    let dg = f64::from(a[1]) - f64::from(b[1]);
    let db = f64::from(a[2]) - f64::from(b[2]);
    (dr * dr + dg * dg + db * db).sqrt()
}
