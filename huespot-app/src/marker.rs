use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, info};

use huespot_core::{ColorStop, Position};

use crate::clipboard::ClipboardSink;
use crate::notify::{Notifier, ToastKind};
use crate::scheduler::{TimerAction, TimerQueue};

/// How long a marker stays on screen before it dismisses itself.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(8);
/// Fade-out length; the marker is gone once this elapses after dismissal.
pub const FADE_DURATION: Duration = Duration::from_millis(300);
/// Delay between consecutive marker reveals.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(150);

/// One palette swatch pinned to the viewport.
#[derive(Debug, Clone)]
pub struct PaletteMarker {
    pub id: String,
    pub color: ColorStop,
    pub position: Position,
    /// False before the staggered reveal fires and again while fading out.
    pub visible: bool,
    dismissed: bool,
}

/// Owns the active marker set and its timed lifecycle.
///
/// Time is logical: the host reports elapsed wall time through [`advance`]
/// and the board replays whatever fell due, in order. A new `show_all`
/// bumps the generation so callbacks queued for a previous palette can
/// never touch the current one.
///
/// [`advance`]: MarkerBoard::advance
#[derive(Debug, Default)]
pub struct MarkerBoard {
    markers: BTreeMap<String, PaletteMarker>,
    queue: TimerQueue,
    next_id: u64,
    generation: u64,
    now: Duration,
}

impl MarkerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active set with one marker per placement. Old markers
    /// are cleared synchronously, before any new id is minted, so the two
    /// palettes never coexist. Returns the new ids in placement order.
    pub fn show_all(&mut self, placements: &[(ColorStop, Position)]) -> Vec<String> {
        self.markers.clear();
        self.queue.clear();
        self.generation += 1;

        let mut ids = Vec::with_capacity(placements.len());
        for (index, (color, position)) in placements.iter().enumerate() {
            self.next_id += 1;
            let id = format!("palette-{}", self.next_id);
            self.markers.insert(
                id.clone(),
                PaletteMarker {
                    id: id.clone(),
                    color: color.clone(),
                    position: *position,
                    visible: false,
                    dismissed: false,
                },
            );

            let reveal_at = self.now + REVEAL_STAGGER * index as u32;
            self.queue
                .schedule(reveal_at, self.generation, TimerAction::Reveal(id.clone()));
            self.queue.schedule(
                reveal_at + DISPLAY_DURATION,
                self.generation,
                TimerAction::AutoDismiss(id.clone()),
            );
            ids.push(id);
        }

        info!(
            markers = ids.len(),
            generation = self.generation,
            "showing palette markers"
        );
        ids
    }

    /// Begin dismissing one marker: hide it now, drop it after the fade.
    /// Unknown ids and repeat calls are no-ops.
    pub fn dismiss(&mut self, id: &str) {
        let Some(marker) = self.markers.get_mut(id) else {
            debug!(id, "dismiss for unknown marker ignored");
            return;
        };
        if marker.dismissed {
            return;
        }
        marker.dismissed = true;
        marker.visible = false;

        // Cancels the pending reveal and auto-dismiss along the way.
        self.queue.cancel_for(id);
        self.queue.schedule(
            self.now + FADE_DURATION,
            self.generation,
            TimerAction::Remove(id.to_string()),
        );
        debug!(id, "marker dismissing");
    }

    /// Dismiss every active marker.
    pub fn dismiss_all(&mut self) {
        let ids: Vec<String> = self.markers.keys().cloned().collect();
        for id in ids {
            self.dismiss(&id);
        }
    }

    /// Move the logical clock forward by `elapsed`, applying every timed
    /// mutation that falls due. Actions are applied at their own due time,
    /// so an auto-dismiss and its follow-up removal can both land within a
    /// single large step.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.now + elapsed;
        loop {
            let Some(next) = self.queue.earliest_due() else {
                break;
            };
            if next > target {
                break;
            }
            self.now = next.max(self.now);
            for action in self.queue.pop_due(self.now, self.generation) {
                self.apply(action);
            }
        }
        self.now = target;
    }

    fn apply(&mut self, action: TimerAction) {
        match action {
            TimerAction::Reveal(id) => {
                if let Some(marker) = self.markers.get_mut(&id) {
                    if !marker.dismissed {
                        marker.visible = true;
                    }
                }
            }
            TimerAction::AutoDismiss(id) => self.dismiss(&id),
            TimerAction::Remove(id) => {
                self.markers.remove(&id);
            }
        }
    }

    /// Copy a marker's hex code to the clipboard and toast the outcome.
    pub fn copy_color(&self, id: &str, clipboard: &dyn ClipboardSink, notifier: &dyn Notifier) {
        let Some(marker) = self.markers.get(id) else {
            debug!(id, "copy for unknown marker ignored");
            return;
        };
        let hex = marker.color.hex();
        match clipboard.write_text(hex) {
            Ok(()) => {
                let kind = ToastKind::Success;
                notifier.notify(
                    "Color copied",
                    &format!("{hex} is on your clipboard"),
                    kind,
                    kind.default_duration(),
                );
            }
            Err(err) => {
                let kind = ToastKind::Error;
                notifier.notify(
                    "Copy failed",
                    &format!("could not copy {hex}: {err}"),
                    kind,
                    kind.default_duration(),
                );
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.markers.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.markers.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&PaletteMarker> {
        self.markers.get(id)
    }

    pub fn markers(&self) -> impl Iterator<Item = &PaletteMarker> {
        self.markers.values()
    }
}
