use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tracing::{info, warn};

use huespot_core::{place, ColorStop, GradientDescriptor, Position, SafeZone};
use huespot_render::{rasterize, resolve_all, PixelBuffer};

use crate::marker::MarkerBoard;
use crate::notify::{Notifier, ToastKind};

/// One entry in the host's right-click menu. The host only needs a label
/// to show and a trigger to pull.
pub trait MenuModule {
    fn display_name(&self) -> &str;
    fn activate(&mut self);
}

/// How marker positions are chosen for a fresh palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Locate each color on the rendered gradient by sampling pixels.
    Sampled,
    /// Skip the raster entirely and spread markers by layout geometry.
    Layout,
}

/// Everything one activation produced, kept for export and inspection.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub descriptor: GradientDescriptor,
    pub colors: Vec<ColorStop>,
    pub placements: Vec<(ColorStop, Position)>,
    pub buffer: Option<PixelBuffer>,
}

/// The gradient-background menu module: each activation generates a new
/// gradient, places one marker per palette color, and reports the outcome
/// through the injected notifier.
pub struct BackgroundModule<N: Notifier> {
    rng: StdRng,
    width: u32,
    height: u32,
    mode: PlacementMode,
    notifier: N,
    board: MarkerBoard,
    last: Option<GenerationOutcome>,
}

impl<N: Notifier> BackgroundModule<N> {
    pub fn new(width: u32, height: u32, mode: PlacementMode, notifier: N) -> Self {
        Self::with_seed(width, height, mode, notifier, rand::rng().random())
    }

    /// Deterministic constructor; everything downstream of the seed is
    /// reproducible.
    pub fn with_seed(width: u32, height: u32, mode: PlacementMode, notifier: N, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            width,
            height,
            mode,
            notifier,
            board: MarkerBoard::new(),
            last: None,
        }
    }

    /// Generate a fresh random palette and apply it.
    pub fn generate(&mut self) -> &GenerationOutcome {
        self.refresh_with(None)
    }

    /// Apply a palette: `None` generates one, `Some` uses the caller's
    /// colors (an empty list degrades to the dark fallback with no
    /// markers). Always replaces the current marker set.
    pub fn refresh_with(&mut self, colors: Option<Vec<ColorStop>>) -> &GenerationOutcome {
        let (descriptor, colors) = GradientDescriptor::describe(colors, &mut self.rng);
        let zone = SafeZone::from_viewport(self.width, self.height);

        let (buffer, placements) = if self.width == 0 || self.height == 0 {
            // Nothing to draw and nowhere to pin a marker.
            warn!(
                width = self.width,
                height = self.height,
                "viewport too small, skipping markers"
            );
            (None, Vec::new())
        } else if colors.is_empty() {
            self.notifier.notify(
                "Palette unavailable",
                "showing a plain dark background",
                ToastKind::Warning,
                ToastKind::Warning.default_duration(),
            );
            (rasterize(&descriptor, self.width, self.height).ok(), Vec::new())
        } else {
            self.place_palette(&descriptor, &colors, &zone)
        };

        self.board.show_all(&placements);

        if !placements.is_empty() {
            self.notifier.notify(
                "Background updated",
                &format!("{} palette colors placed", placements.len()),
                ToastKind::Success,
                ToastKind::Success.default_duration(),
            );
        }
        info!(
            angle = descriptor.angle_degrees,
            colors = colors.len(),
            markers = placements.len(),
            "applied gradient background"
        );

        self.last = Some(GenerationOutcome {
            descriptor,
            colors,
            placements,
            buffer,
        });
        self.last.as_ref().unwrap()
    }

    fn place_palette(
        &mut self,
        descriptor: &GradientDescriptor,
        colors: &[ColorStop],
        zone: &SafeZone,
    ) -> (Option<PixelBuffer>, Vec<(ColorStop, Position)>) {
        let total = colors.len();
        match self.mode {
            PlacementMode::Sampled => match rasterize(descriptor, self.width, self.height) {
                Ok(buffer) => {
                    let hits = resolve_all(&buffer, colors, zone, &mut self.rng);
                    let placements = colors
                        .iter()
                        .zip(hits)
                        .enumerate()
                        .map(|(index, (color, hit))| {
                            let position = match hit {
                                Some(resolved) => resolved.position,
                                None => place(index, total, zone),
                            };
                            (color.clone(), position)
                        })
                        .collect();
                    (Some(buffer), placements)
                }
                Err(err) => {
                    warn!(%err, "raster placement unavailable, using layout fallback");
                    let placements = colors
                        .iter()
                        .enumerate()
                        .map(|(index, color)| (color.clone(), place(index, total, zone)))
                        .collect();
                    (None, placements)
                }
            },
            PlacementMode::Layout => {
                let placements = colors
                    .iter()
                    .enumerate()
                    .map(|(index, color)| (color.clone(), place(index, total, zone)))
                    .collect();
                (rasterize(descriptor, self.width, self.height).ok(), placements)
            }
        }
    }

    pub fn board(&self) -> &MarkerBoard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut MarkerBoard {
        &mut self.board
    }

    pub fn last_outcome(&self) -> Option<&GenerationOutcome> {
        self.last.as_ref()
    }

    /// Hand the outcome to the caller, e.g. for export.
    pub fn take_outcome(&mut self) -> Option<GenerationOutcome> {
        self.last.take()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<N: Notifier> MenuModule for BackgroundModule<N> {
    fn display_name(&self) -> &str {
        "Gradient background"
    }

    fn activate(&mut self) {
        self.generate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;

    fn module(
        width: u32,
        height: u32,
        mode: PlacementMode,
        seed: u64,
    ) -> BackgroundModule<RecordingNotifier> {
        BackgroundModule::with_seed(width, height, mode, RecordingNotifier::default(), seed)
    }

    #[test]
    fn activation_places_one_marker_per_color() {
        let mut module = module(800, 600, PlacementMode::Sampled, 7);
        module.activate();

        let outcome = module.last_outcome().unwrap();
        assert!(!outcome.colors.is_empty());
        assert_eq!(outcome.placements.len(), outcome.colors.len());
        assert_eq!(module.board().active_count(), outcome.colors.len());

        let zone = SafeZone::from_viewport(800, 600);
        for (_, position) in &outcome.placements {
            assert!(zone.contains(*position));
        }
        assert_eq!(module.notifier().kinds(), vec![ToastKind::Success]);
    }

    #[test]
    fn empty_palette_degrades_to_dark_background() {
        let mut module = module(640, 480, PlacementMode::Sampled, 3);
        module.refresh_with(Some(Vec::new()));

        let outcome = module.last_outcome().unwrap();
        assert_eq!(outcome.descriptor, GradientDescriptor::dark_fallback());
        assert!(outcome.placements.is_empty());
        assert_eq!(module.board().active_count(), 0);
        assert!(outcome.buffer.is_some(), "the dark background still draws");
        assert_eq!(module.notifier().kinds(), vec![ToastKind::Warning]);
    }

    #[test]
    fn degenerate_viewport_draws_nothing_and_places_nothing() {
        let mut module = module(0, 0, PlacementMode::Sampled, 1);
        module.activate();

        let outcome = module.last_outcome().unwrap();
        assert!(outcome.buffer.is_none());
        assert!(outcome.placements.is_empty());
        assert_eq!(module.board().active_count(), 0);
    }

    #[test]
    fn layout_mode_spreads_small_palettes_over_the_corners() {
        let mut module = module(1024, 768, PlacementMode::Layout, 5);
        let colors = vec![
            ColorStop::new(0, 80, 50),
            ColorStop::new(90, 80, 50),
            ColorStop::new(180, 80, 50),
            ColorStop::new(270, 80, 50),
        ];
        module.refresh_with(Some(colors));

        let outcome = module.last_outcome().unwrap();
        let corners = SafeZone::from_viewport(1024, 768).corners();
        for ((_, position), corner) in outcome.placements.iter().zip(corners) {
            assert_eq!(*position, corner);
        }
    }

    #[test]
    fn reactivation_replaces_the_previous_marker_set() {
        let mut module = module(800, 600, PlacementMode::Sampled, 9);
        module.activate();
        let first: Vec<String> = module.board().markers().map(|m| m.id.clone()).collect();

        module.activate();
        for id in &first {
            assert!(!module.board().contains(id));
        }
        let outcome = module.last_outcome().unwrap();
        assert_eq!(module.board().active_count(), outcome.colors.len());
    }

    #[test]
    fn menu_label_is_stable() {
        let module = module(800, 600, PlacementMode::Sampled, 2);
        assert_eq!(module.display_name(), "Gradient background");
    }
}
