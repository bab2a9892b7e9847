use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Emitted once per elapsed second while a game is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerTick {
    pub elapsed_secs: u32,
}

/// Whole-second game clock.
///
/// Starts at zero on the first move and stops for good when the game ends.
/// The host drives it, either by calling [`Timer::tick`] from a one-second
/// interval or by calling [`Timer::catch_up`] with the current time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timer {
    elapsed_secs: u32,
    started_at: Option<Instant>,
    running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.elapsed_secs = 0;
        self.started_at = Some(now);
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Some(TimerTick {
            elapsed_secs: self.elapsed_secs,
        })
    }

    /// Emits every tick owed between the start and `now`.
    pub fn catch_up(&mut self, now: Instant) -> Vec<TimerTick> {
        let Some(started_at) = self.started_at.filter(|_| self.running) else {
            return Vec::new();
        };
        let owed = now.saturating_duration_since(started_at).as_secs();
        let owed = u32::try_from(owed).unwrap_or(u32::MAX);
        (self.elapsed_secs..owed).filter_map(|_| self.tick()).collect()
    }
}
