//! Interception verdicts.
//!
//! A path is walked from its first point; at each point the towers are tried
//! in their given order and the first one in range wins. Neither the closest
//! tower nor the closest point is ever preferred.

use serde::{Deserialize, Serialize};

use crate::model::{Frame, Rocket, Tower};

/// Where an interception verdict comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionSource {
    /// Trust the backend `intercepted` flag when a rocket carries one.
    BackendFlag,
    /// Always recompute from path and towers.
    #[default]
    Recompute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterceptionResult {
    pub intercepted: bool,
    /// Path index where the rocket stops. `None` when not intercepted.
    pub index: Option<usize>,
    /// Tower that made the hit, for recomputed verdicts.
    pub tower: Option<usize>,
    /// The verdict came from the backend flag.
    pub reported: bool,
}

impl InterceptionResult {
    pub const CLEAR: Self = Self {
        intercepted: false,
        index: None,
        tower: None,
        reported: false,
    };

    fn hit(index: usize, tower: usize) -> Self {
        Self {
            intercepted: true,
            index: Some(index),
            tower: Some(tower),
            reported: false,
        }
    }

    fn reported(index: usize) -> Self {
        Self {
            intercepted: true,
            index: Some(index),
            tower: None,
            reported: true,
        }
    }

    /// Last path index that may be drawn.
    pub fn stop_index(&self, rocket: &Rocket) -> usize {
        let last = rocket.last_index();
        match (self.intercepted, self.index) {
            (true, Some(i)) => i.min(last),
            _ => last,
        }
    }
}

pub fn evaluate(rocket: &Rocket, towers: &[Tower], source: InterceptionSource) -> InterceptionResult {
    if source == InterceptionSource::BackendFlag {
        if let Some(flag) = rocket.intercepted {
            // the flag carries no index; the whole path stays drawable
            return if flag {
                InterceptionResult::reported(rocket.last_index())
            } else {
                InterceptionResult::CLEAR
            };
        }
    }
    for (i, point) in rocket.path.iter().enumerate() {
        if let Some(t) = towers.iter().position(|tower| tower.covers(*point)) {
            return InterceptionResult::hit(i, t);
        }
    }
    InterceptionResult::CLEAR
}

pub fn evaluate_frame(frame: &Frame, source: InterceptionSource) -> Vec<InterceptionResult> {
    frame
        .rockets
        .iter()
        .map(|r| evaluate(r, &frame.towers, source))
        .collect()
}
