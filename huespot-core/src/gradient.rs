use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::ColorStop;
use crate::scheme::ColorScheme;

/// A renderable linear gradient: rotation angle plus ordered color stops.
///
/// Stop order is significant — it defines the interpolation order along the
/// gradient axis. Descriptors are immutable; a new "generate" action builds
/// a fresh one rather than mutating the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientDescriptor {
    /// CSS-convention rotation in degrees, `[0, 360)`; 0° points up.
    pub angle_degrees: u16,
    pub stops: Vec<ColorStop>,
}

impl GradientDescriptor {
    /// Build a descriptor plus the parallel color-record list.
    ///
    /// With `stops = None` a random scheme is chosen (uniformly among the
    /// four) and a random angle drawn. An explicit empty stop list degrades
    /// to a fixed dark two-stop gradient with an **empty** color list — the
    /// defined "nothing to place" mode, logged but not an error.
    pub fn describe(
        stops: Option<Vec<ColorStop>>,
        rng: &mut impl Rng,
    ) -> (GradientDescriptor, Vec<ColorStop>) {
        let stops = match stops {
            Some(stops) if stops.is_empty() => {
                warn!("gradient requested with zero stops, using dark fallback");
                return (Self::dark_fallback(), Vec::new());
            }
            Some(stops) => stops,
            None => {
                let scheme = ColorScheme::random(rng);
                let stops = scheme.build_stops(rng);
                debug!(scheme = scheme.label(), stops = stops.len(), "generated scheme stops");
                stops
            }
        };

        let descriptor = GradientDescriptor {
            angle_degrees: rng.random_range(0..360),
            stops: stops.clone(),
        };
        (descriptor, stops)
    }

    /// The fixed degraded-mode gradient: near-black, two stops.
    pub fn dark_fallback() -> Self {
        Self {
            angle_degrees: 0,
            stops: vec![ColorStop::new(0, 0, 9), ColorStop::new(0, 0, 38)],
        }
    }

    /// CSS `linear-gradient(...)` form, suitable for a display surface.
    pub fn css(&self) -> String {
        self.css_with_opacity(1.0)
    }

    /// CSS form with per-stop opacity (`hsla` stops).
    pub fn css_with_opacity(&self, opacity: f32) -> String {
        let stops: Vec<String> = if (opacity - 1.0).abs() < f32::EPSILON {
            self.stops.iter().map(ColorStop::css).collect()
        } else {
            self.stops
                .iter()
                .map(|s| s.css_with_opacity(opacity))
                .collect()
        };
        format!(
            "linear-gradient({}deg, {})",
            self.angle_degrees,
            stops.join(", ")
        )
    }

    /// Position fraction of stop `index` along the gradient axis.
    ///
    /// Stops are evenly spaced: `i/(n-1)`, a single stop sits at 0.
    pub fn stop_fraction(&self, index: usize) -> f64 {
        if self.stops.len() < 2 {
            return 0.0;
        }
        index as f64 / (self.stops.len() - 1) as f64
    }
}
