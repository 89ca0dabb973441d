use thiserror::Error;

use crate::model::Position;

/// Why a single wire frame was refused.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("frame does not decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("rocket {rocket} has an empty path")]
    EmptyPath { rocket: usize },

    #[error("tower {tower} has invalid radius {radius}")]
    InvalidRadius { tower: usize, radius: f64 },

    #[error("rocket {rocket} reports position {reported} but its path puts it at {derived}")]
    PositionMismatch {
        rocket: usize,
        reported: Position,
        derived: Position,
    },
}

/// Why the simulation load failed as a whole.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("simulation endpoint answered HTTP {0}")]
    Status(u16),

    #[error("simulation response is not valid JSON: {0}")]
    Body(#[from] serde_json::Error),
}

pub type FetchResult<T> = Result<T, FetchError>;
