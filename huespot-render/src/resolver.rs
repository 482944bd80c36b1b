use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use huespot_core::{rgb_distance, ColorStop, Position, SafeZone};

use crate::buffer::PixelBuffer;

/// Grid stride for raster sampling, in pixels. Coarser is cheaper; the
/// markers only need to land "on" their color, not on an exact pixel.
pub const SAMPLE_STRIDE: u32 = 15;
/// RGB distance at or below which a sample counts as an exact match.
pub const EXACT_TOLERANCE: f64 = 30.0;
/// RGB distance at or below which a sample counts as a close match.
pub const CLOSE_TOLERANCE: f64 = 50.0;

/// RGB distance beyond which a sample no longer counts as showing the
/// target color at all. Samples past this only matter for the last-resort
/// tier; without this bound, far-off in-zone samples would shadow exact
/// matches that sit outside the safe zone.
pub const CANDIDATE_TOLERANCE: f64 = 100.0;

/// How many of the best close-match candidates the random pick draws from.
const CLOSE_PICK_LIMIT: usize = 10;
/// Fraction of the best any-distance candidates kept for the random pick.
const ANY_SAFE_KEEP_FRACTION: f64 = 0.2;

/// A screen position chosen for one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPosition {
    pub position: Position,
    /// RGB distance between the target color and the sampled pixel.
    pub distance: f64,
    /// The sampled pixel was within [`EXACT_TOLERANCE`] of the target.
    pub exact: bool,
    /// The chosen sample lay outside the safe zone and was clamped in.
    pub adjusted: bool,
}

/// One sampled raster point, scored against the target color.
/// Ephemeral — produced and consumed within a single resolution pass.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: Position,
    distance: f64,
    in_safe_zone: bool,
    exact: bool,
}

/// Find a screen position showing (approximately) `target`'s color.
///
/// Samples the buffer on a [`SAMPLE_STRIDE`] grid and picks from the first
/// non-empty preference tier:
///
/// 1. exact match inside the safe zone — uniform random among them;
/// 2. close match inside the safe zone — random among the nearest few;
/// 3. any plausible sample inside the safe zone — random among the best ~20%;
/// 4. exact match outside the zone — random pick, clamped in (`adjusted`);
/// 5. the globally closest sample, clamped in.
///
/// The random tie-breaking in the top tiers keeps markers from piling onto
/// one pixel when a color fills a large region. Returns `None` only when
/// the buffer yields zero samples (degenerate viewport).
pub fn resolve(
    buffer: &PixelBuffer,
    target: &ColorStop,
    zone: &SafeZone,
    rng: &mut impl Rng,
) -> Option<ResolvedPosition> {
    let candidates = sample_grid(buffer, target, zone);
    if candidates.is_empty() {
        return None;
    }

    // Tier 1: exact and safe.
    let exact_safe: Vec<Candidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.exact && c.in_safe_zone)
        .collect();
    if let Some(chosen) = exact_safe.choose(rng) {
        return Some(resolved(*chosen, zone, "exact-safe"));
    }

    // Tier 2: close and safe, random among the nearest CLOSE_PICK_LIMIT.
    let mut close_safe: Vec<Candidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.distance <= CLOSE_TOLERANCE && c.in_safe_zone)
        .collect();
    if !close_safe.is_empty() {
        close_safe.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        close_safe.truncate(CLOSE_PICK_LIMIT);
        let chosen = close_safe.choose(rng).copied()?;
        return Some(resolved(chosen, zone, "close-safe"));
    }

    // Tier 3: any safe sample still showing the color, random among the
    // best fifth.
    let mut any_safe: Vec<Candidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.in_safe_zone && c.distance <= CANDIDATE_TOLERANCE)
        .collect();
    if !any_safe.is_empty() {
        any_safe.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let keep = ((any_safe.len() as f64 * ANY_SAFE_KEEP_FRACTION).ceil() as usize).max(1);
        any_safe.truncate(keep);
        let chosen = any_safe.choose(rng).copied()?;
        return Some(resolved(chosen, zone, "any-safe"));
    }

    // Tier 4: exact but outside the zone; clamp the pick in.
    let exact_unsafe: Vec<Candidate> =
        candidates.iter().copied().filter(|c| c.exact).collect();
    if let Some(chosen) = exact_unsafe.choose(rng) {
        return Some(resolved(*chosen, zone, "exact-clamped"));
    }

    // Tier 5: the single globally closest sample, clamped in. Always
    // non-empty here, so resolution is total for non-degenerate buffers.
    let best = candidates
        .iter()
        .copied()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))?;
    Some(resolved(best, zone, "best-clamped"))
}

/// Resolve every color of a palette against one shared raster.
pub fn resolve_all(
    buffer: &PixelBuffer,
    colors: &[ColorStop],
    zone: &SafeZone,
    rng: &mut impl Rng,
) -> Vec<Option<ResolvedPosition>> {
    colors
        .iter()
        .map(|color| resolve(buffer, color, zone, rng))
        .collect()
}

fn resolved(candidate: Candidate, zone: &SafeZone, tier: &'static str) -> ResolvedPosition {
    let adjusted = !candidate.in_safe_zone;
    let position = if adjusted {
        zone.clamp(candidate.position)
    } else {
        candidate.position
    };
    debug!(
        tier,
        x = position.x,
        y = position.y,
        distance = candidate.distance,
        adjusted,
        "resolved color position"
    );
    ResolvedPosition {
        position,
        distance: candidate.distance,
        exact: candidate.exact,
        adjusted,
    }
}

/// Score every grid sample against the target color.
fn sample_grid(buffer: &PixelBuffer, target: &ColorStop, zone: &SafeZone) -> Vec<Candidate> {
    let target_rgb = target.rgb();
    let mut candidates = Vec::new();
    let mut y = 0;
    while y < buffer.height {
        let mut x = 0;
        while x < buffer.width {
            let distance = rgb_distance(buffer.rgb(x, y), target_rgb);
            let position = Position::new(f64::from(x), f64::from(y));
            candidates.push(Candidate {
                position,
                distance,
                in_safe_zone: zone.contains(position),
                exact: distance <= EXACT_TOLERANCE,
            });
            x += SAMPLE_STRIDE;
        }
        y += SAMPLE_STRIDE;
    }
    candidates
}
