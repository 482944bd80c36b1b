use crate::zone::{Position, SafeZone};

/// Polar nudge radius applied to diagonal placements so neighbouring
/// markers don't stack.
const OFFSET_RADIUS: f64 = 40.0;
/// Angular step between successive polar nudges.
const OFFSET_STEP_DEGREES: f64 = 45.0;

/// Deterministic layout position for a color when no raster match is usable.
///
/// Up to four colors go to the safe-zone corners; larger palettes walk the
/// zone's diagonal with a rotating polar offset to spread markers out.
/// The result is always inside the safe zone.
pub fn place(color_index: usize, total_colors: usize, zone: &SafeZone) -> Position {
    if total_colors <= 4 {
        return zone.corners()[color_index % 4];
    }

    let progress = if total_colors > 1 {
        color_index as f64 / (total_colors - 1) as f64
    } else {
        0.0
    };
    let along = Position::new(
        zone.left + progress * zone.width(),
        zone.top + progress * zone.height(),
    );

    let angle = (color_index as f64 * OFFSET_STEP_DEGREES).to_radians();
    let nudged = Position::new(
        along.x + OFFSET_RADIUS * angle.cos(),
        along.y + OFFSET_RADIUS * angle.sin(),
    );
    zone.clamp(nudged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> SafeZone {
        SafeZone::from_viewport(1280, 720)
    }

    #[test]
    fn small_palettes_use_distinct_corners() {
        let zone = zone();
        let a = place(0, 4, &zone);
        let c = place(2, 4, &zone);
        assert_ne!(a, c);
        assert_eq!(a, zone.corners()[0]);
        assert_eq!(c, zone.corners()[2]);
    }

    #[test]
    fn corner_index_wraps_mod_four() {
        let zone = zone();
        assert_eq!(place(0, 4, &zone), place(4, 4, &zone));
        assert_eq!(place(5, 3, &zone), place(1, 3, &zone));
    }

    #[test]
    fn placement_depends_on_total_count() {
        let zone = zone();
        // Index 0 of a 4-color palette is a corner; index 0 of a 6-color
        // palette walks the diagonal — different layout families.
        assert_ne!(place(0, 4, &zone), place(0, 6, &zone));
    }

    #[test]
    fn large_palettes_stay_inside_the_zone() {
        let zone = zone();
        for total in [5usize, 6, 9, 16] {
            for index in 0..total {
                let p = place(index, total, &zone);
                assert!(zone.contains(p), "index {index} of {total} escaped: {p:?}");
            }
        }
    }

    #[test]
    fn large_palette_spreads_markers() {
        let zone = zone();
        let positions: Vec<Position> = (0..6).map(|i| place(i, 6, &zone)).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert_ne!(positions[i], positions[j]);
            }
        }
    }

    #[test]
    fn collapsed_zone_still_places() {
        let zone = SafeZone::from_viewport(10, 10);
        let p = place(3, 8, &zone);
        assert!(zone.contains(p));
    }
}
