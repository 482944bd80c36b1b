use std::time::Duration;

/// A deferred marker mutation. Each variant names the marker it targets so
/// the board can check liveness before applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Make a staggered marker visible.
    Reveal(String),
    /// Begin dismissal after the display duration elapses.
    AutoDismiss(String),
    /// Drop a dismissed marker once its fade-out is over.
    Remove(String),
}

impl TimerAction {
    pub fn marker_id(&self) -> &str {
        match self {
            Self::Reveal(id) | Self::AutoDismiss(id) | Self::Remove(id) => id,
        }
    }
}

#[derive(Debug)]
struct ScheduledTask {
    due: Duration,
    /// Marker-board generation at schedule time. A task whose generation
    /// no longer matches is dropped unexecuted — this is what keeps a late
    /// stagger callback from resurrecting a cleared marker.
    generation: u64,
    /// Insertion order, to keep same-instant tasks deterministic.
    seq: u64,
    action: TimerAction,
}

/// Deferred tasks keyed to a logical clock.
///
/// The host event loop owns real time; it tells us how far the clock has
/// moved and we hand back whatever became due. Single-threaded by design —
/// the one shared resource here is mutated only between `pop_due` calls.
#[derive(Debug, Default)]
pub struct TimerQueue {
    tasks: Vec<ScheduledTask>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire at logical time `due`, tagged with the
    /// scheduling generation.
    pub fn schedule(&mut self, due: Duration, generation: u64, action: TimerAction) {
        self.tasks.push(ScheduledTask {
            due,
            generation,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Cancel every pending task aimed at `marker_id`.
    pub fn cancel_for(&mut self, marker_id: &str) {
        self.tasks.retain(|t| t.action.marker_id() != marker_id);
    }

    /// Drop everything, fired or not.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Remove and return the actions due at `now`, in due-then-insertion
    /// order. Tasks from superseded generations are discarded, not
    /// returned — cancellation is the default, firing is the exception.
    pub fn pop_due(&mut self, now: Duration, current_generation: u64) -> Vec<TimerAction> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        let mut remaining: Vec<ScheduledTask> = Vec::new();
        for task in self.tasks.drain(..) {
            if task.due > now {
                remaining.push(task);
            } else if task.generation == current_generation {
                due.push(task);
            }
            // else: stale generation, dropped.
        }
        self.tasks = remaining;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|t| t.action).collect()
    }

    /// Due time of the soonest pending task, stale or not.
    pub fn earliest_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|t| t.due).min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
