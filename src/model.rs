//! Core data models for the replay.
//! Frames arrive as loosely shaped JSON; they are decoded into the `Raw*`
//! types and validated into `Frame` before any geometry code sees them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// Grid coordinate. On the wire a coordinate is the pair `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn distance_to(self, other: Position) -> f64 {
        let dr = other.row as f64 - self.row as f64;
        let dc = other.col as f64 - self.col as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl From<[i32; 2]> for Position {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [i32; 2] {
    fn from(p: Position) -> Self {
        [p.row, p.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tower {
    pub position: Position,
    /// Interception radius in grid units.
    pub radius: f64,
}

impl Tower {
    pub fn covers(&self, p: Position) -> bool {
        self.position.distance_to(p) <= self.radius
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rocket {
    pub start: Position,
    pub end: Position,
    /// Full planned trajectory, one point per simulated time step. Never empty.
    pub path: Vec<Position>,
    /// Verdict reported by the simulation backend, if any.
    pub intercepted: Option<bool>,
}

impl Rocket {
    pub fn last_index(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Index of the current point for a frame at `progress` time steps.
    pub fn progress_index(&self, progress: u32) -> usize {
        (progress as usize).min(self.last_index())
    }

    pub fn position_at(&self, progress: u32) -> Position {
        self.path[self.progress_index(progress)]
    }
}

/// One simulation time step, validated. See `Frame::decode`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub iteration: i64,
    pub time_step: u32,
    pub grid: GridSize,
    pub towers: Vec<Tower>,
    pub targets: Vec<Position>,
    pub rockets: Vec<Rocket>,
}

impl Frame {
    /// Decode and validate one wire frame.
    pub fn decode(value: serde_json::Value, default_radius: f64) -> Result<Self, FrameError> {
        let raw: RawFrame = serde_json::from_value(value)?;
        raw.validate(default_radius)
    }
}

// ---------------- Wire shapes -----------------

#[derive(Debug, Deserialize)]
struct RawFrame {
    iteration: i64,
    #[serde(alias = "timeStep")]
    time_step: u32,
    #[serde(default, alias = "N", alias = "gridRows")]
    grid_rows: Option<u32>,
    #[serde(default, alias = "M", alias = "gridCols")]
    grid_cols: Option<u32>,
    /// Frame-wide radius for towers sent as bare coordinates.
    #[serde(default, rename = "T", alias = "tower_radius")]
    tower_radius: Option<f64>,
    towers: Vec<RawTower>,
    targets: Vec<Position>,
    rockets: Vec<RawRocket>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTower {
    Bare(Position),
    Full { position: Position, radius: f64 },
}

#[derive(Debug, Deserialize)]
struct RawRocket {
    start: Position,
    #[serde(default)]
    end: Option<Position>,
    path: Vec<Position>,
    #[serde(default)]
    position: Option<Position>,
    #[serde(default)]
    intercepted: Option<bool>,
}

impl RawFrame {
    fn validate(self, default_radius: f64) -> Result<Frame, FrameError> {
        let frame_radius = self.tower_radius.unwrap_or(default_radius);
        let mut towers = Vec::with_capacity(self.towers.len());
        for (idx, raw) in self.towers.into_iter().enumerate() {
            let (position, radius) = match raw {
                RawTower::Bare(position) => (position, frame_radius),
                RawTower::Full { position, radius } => (position, radius),
            };
            if !radius.is_finite() || radius < 0.0 {
                return Err(FrameError::InvalidRadius { tower: idx, radius });
            }
            towers.push(Tower { position, radius });
        }

        let mut rockets = Vec::with_capacity(self.rockets.len());
        for (idx, raw) in self.rockets.into_iter().enumerate() {
            let Some(&last) = raw.path.last() else {
                return Err(FrameError::EmptyPath { rocket: idx });
            };
            let rocket = Rocket {
                start: raw.start,
                end: raw.end.unwrap_or(last),
                path: raw.path,
                intercepted: raw.intercepted,
            };
            if let Some(reported) = raw.position {
                let derived = rocket.position_at(self.time_step);
                if reported != derived {
                    return Err(FrameError::PositionMismatch {
                        rocket: idx,
                        reported,
                        derived,
                    });
                }
            }
            rockets.push(rocket);
        }

        let grid = match (self.grid_rows, self.grid_cols) {
            (Some(rows), Some(cols)) => GridSize { rows, cols },
            (rows, cols) => {
                let derived = derive_grid(&towers, &self.targets, &rockets);
                GridSize {
                    rows: rows.unwrap_or(derived.rows),
                    cols: cols.unwrap_or(derived.cols),
                }
            }
        };

        Ok(Frame {
            iteration: self.iteration,
            time_step: self.time_step,
            grid,
            towers,
            targets: self.targets,
            rockets,
        })
    }
}

/// Smallest grid holding every entity coordinate.
fn derive_grid(towers: &[Tower], targets: &[Position], rockets: &[Rocket]) -> GridSize {
    let points = towers
        .iter()
        .map(|t| t.position)
        .chain(targets.iter().copied())
        .chain(
            rockets
                .iter()
                .flat_map(|r| [r.start, r.end].into_iter().chain(r.path.iter().copied())),
        );
    let mut gs = GridSize::default();
    for p in points {
        gs.rows = gs.rows.max(extent(p.row));
        gs.cols = gs.cols.max(extent(p.col));
    }
    gs
}

/// Lines needed to reach `coord`; negative coordinates need none.
fn extent(coord: i32) -> u32 {
    u32::try_from(i64::from(coord) + 1).unwrap_or(0)
}
