use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::ColorStop;

/// Hue-relationship schemes for generated gradients.
///
/// Each scheme derives its stops from a single random base hue; the stop
/// count per scheme is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Base hue ±15°, 3 stops.
    Analogous,
    /// Base hue and its opposite, 2 stops.
    Complementary,
    /// Base hue ±120°, 3 stops.
    Triadic,
    /// Base hue +60°/+180°/+240°, 4 stops.
    Tetradic,
}

/// Hue offset used by the analogous scheme.
const ANALOGOUS_OFFSET: u16 = 15;

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::Tetradic,
    ];

    /// Pick one of the four schemes uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
        }
    }

    /// Number of stops this scheme produces.
    pub fn stop_count(self) -> usize {
        match self {
            Self::Complementary => 2,
            Self::Analogous | Self::Triadic => 3,
            Self::Tetradic => 4,
        }
    }

    /// Hue offsets relative to the base hue, in gradient order.
    fn hue_offsets(self) -> &'static [u16] {
        match self {
            Self::Analogous => &[360 - ANALOGOUS_OFFSET, 0, ANALOGOUS_OFFSET],
            Self::Complementary => &[0, 180],
            Self::Triadic => &[240, 0, 120],
            Self::Tetradic => &[0, 60, 180, 240],
        }
    }

    /// Saturation and lightness ranges (percent) for this scheme.
    ///
    /// Tuned so generated gradients stay colorful enough to locate on
    /// screen; these are presentation choices, not invariants.
    fn sat_light_ranges(self) -> (std::ops::RangeInclusive<u8>, std::ops::RangeInclusive<u8>) {
        match self {
            Self::Analogous => (55..=90, 40..=65),
            Self::Complementary => (60..=95, 40..=60),
            Self::Triadic => (55..=90, 35..=60),
            Self::Tetradic => (50..=85, 40..=65),
        }
    }

    /// Build this scheme's stops from a random base hue.
    ///
    /// All stops share one saturation/lightness pair so the hue
    /// relationship stays legible.
    pub fn build_stops(self, rng: &mut impl Rng) -> Vec<ColorStop> {
        let base_hue: u16 = rng.random_range(0..360);
        let (sat_range, light_range) = self.sat_light_ranges();
        let saturation = rng.random_range(sat_range);
        let lightness = rng.random_range(light_range);
        self.stops_from(base_hue, saturation, lightness)
    }

    /// Build this scheme's stops from explicit base components.
    pub fn stops_from(self, base_hue: u16, saturation: u8, lightness: u8) -> Vec<ColorStop> {
        self.hue_offsets()
            .iter()
            .map(|offset| ColorStop::new((base_hue + offset) % 360, saturation, lightness))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stop_counts_are_fixed_per_scheme() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(ColorScheme::Analogous.build_stops(&mut rng).len(), 3);
            assert_eq!(ColorScheme::Complementary.build_stops(&mut rng).len(), 2);
            assert_eq!(ColorScheme::Triadic.build_stops(&mut rng).len(), 3);
            assert_eq!(ColorScheme::Tetradic.build_stops(&mut rng).len(), 4);
        }
    }

    #[test]
    fn complementary_hues_are_opposed() {
        let stops = ColorScheme::Complementary.stops_from(200, 80, 60);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].hue, 200);
        assert_eq!(stops[1].hue, 20);
        assert_eq!(stops[0].saturation, stops[1].saturation);
        assert_eq!(stops[0].lightness, stops[1].lightness);
    }

    #[test]
    fn analogous_brackets_the_base_hue() {
        let stops = ColorScheme::Analogous.stops_from(100, 70, 50);
        let hues: Vec<u16> = stops.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![85, 100, 115]);
    }

    #[test]
    fn analogous_wraps_below_zero() {
        let stops = ColorScheme::Analogous.stops_from(5, 70, 50);
        assert_eq!(stops[0].hue, 350);
    }

    #[test]
    fn triadic_spacing() {
        let stops = ColorScheme::Triadic.stops_from(0, 70, 50);
        let hues: Vec<u16> = stops.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![240, 0, 120]);
    }

    #[test]
    fn tetradic_spacing() {
        let stops = ColorScheme::Tetradic.stops_from(10, 70, 50);
        let hues: Vec<u16> = stops.iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![10, 70, 190, 250]);
    }

    #[test]
    fn random_scheme_is_always_one_of_four() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let scheme = ColorScheme::random(&mut rng);
            assert!(ColorScheme::ALL.contains(&scheme));
        }
    }
}
