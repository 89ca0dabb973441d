//! Playback clock: which frame is showing and how often it advances.
//!
//! The clock does not own a browser timer. It describes the timer it wants
//! (`TimerSpec`); the view installs an interval for the current spec and
//! drops it when the `TimerSpec` changes. Every re-arm bumps the generation so a
//! tick from a cancelled interval is recognised and ignored.

use std::rc::Rc;

use yew::Reducible;

pub const MIN_SPEED_MS: u32 = 100;
pub const MAX_SPEED_MS: u32 = 2000;
pub const DEFAULT_SPEED_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSpec {
    pub interval_ms: u32,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackClock {
    current_index: Option<usize>,
    speed_ms: u32,
    frame_count: usize,
    timer: Option<TimerSpec>,
    generation: u64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_MS)
    }
}

impl PlaybackClock {
    pub fn new(speed_ms: u32) -> Self {
        Self {
            current_index: None,
            speed_ms: clamp_speed(speed_ms),
            frame_count: 0,
            timer: None,
            generation: 0,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// The interval that should be running, if any.
    pub fn timer(&self) -> Option<TimerSpec> {
        self.timer
    }

    /// Advance one frame, wrapping at the end. Ticks from a stale timer are ignored.
    pub fn tick(&mut self, generation: u64) -> Option<usize> {
        match self.timer {
            Some(t) if t.generation == generation => {
                self.current_index = self.current_index.map(|i| (i + 1) % self.frame_count);
            }
            _ => log::debug!("ignoring tick from timer generation {}", generation),
        }
        self.current_index
    }

    /// Applies a clamped speed and restarts the interval. Returns the applied value.
    pub fn set_speed(&mut self, speed_ms: u32) -> u32 {
        self.speed_ms = clamp_speed(speed_ms);
        if self.timer.is_some() {
            self.arm();
        }
        self.speed_ms
    }

    /// A new sequence length. Going from empty to non-empty restarts at frame 0.
    pub fn set_frame_count(&mut self, frame_count: usize) {
        let was_empty = self.frame_count == 0;
        self.frame_count = frame_count;
        if frame_count == 0 {
            self.current_index = None;
            self.timer = None;
            return;
        }
        self.current_index = match self.current_index {
            Some(i) if !was_empty && i < frame_count => Some(i),
            _ => Some(0),
        };
        self.arm();
    }

    /// Disarm the timer; index and count are kept.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    fn arm(&mut self) {
        self.generation += 1;
        self.timer = Some(TimerSpec {
            interval_ms: self.speed_ms,
            generation: self.generation,
        });
        log::debug!(
            "playback timer armed: {} ms, generation {}",
            self.speed_ms,
            self.generation
        );
    }
}

pub fn clamp_speed(speed_ms: u32) -> u32 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum PlaybackAction {
    Tick { generation: u64 },
    SetSpeed(u32),
    Load { frame_count: usize },
    Stop,
}

impl Reducible for PlaybackClock {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlaybackAction::*;
        let mut new = (*self).clone();
        match action {
            Tick { generation } => {
                new.tick(generation);
            }
            SetSpeed(ms) => {
                new.set_speed(ms);
            }
            Load { frame_count } => new.set_frame_count(frame_count),
            Stop => new.stop(),
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
