//! Scene reconstruction: mapping, interception and primitive building.
//! Everything here is pure; nothing touches a drawing surface.

pub mod intercept;
pub mod mapper;
pub mod scene;

use serde::{Deserialize, Serialize};

pub use intercept::{InterceptionResult, InterceptionSource, evaluate, evaluate_frame};
pub use mapper::{CoordinateMapper, Point, bearing};
pub use scene::{Bearings, Color, Primitive, Scene, SceneBuilder, TextAnchor};

use crate::model::Frame;

/// How much of a rocket's path is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    /// Path up to the frame's progress, stopping early on interception.
    Cumulative,
    /// Whole path, or up to the interception point.
    #[default]
    FullPath,
}

/// What a rocket's directional marker points along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    #[default]
    StartToEnd,
    LocalSegment,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub source: InterceptionSource,
    pub trajectory: Trajectory,
    pub heading: Heading,
}

/// Interception plus scene building for one frame at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Engine {
    config: EngineConfig,
    builder: SceneBuilder,
}

impl Engine {
    pub fn new(mapper: CoordinateMapper, config: EngineConfig) -> Self {
        Self {
            config,
            builder: SceneBuilder::new(mapper, config),
        }
    }

    pub fn scene(&self, frame: &Frame, previous: &Bearings) -> (Scene, Bearings) {
        let results = evaluate_frame(frame, self.config.source);
        for (idx, r) in results.iter().enumerate().filter(|(_, r)| r.intercepted) {
            log::trace!(
                "frame {}: rocket {} stops at path index {:?} (tower {:?})",
                frame.time_step,
                idx,
                r.index,
                r.tower
            );
        }
        self.builder.build(frame, &results, previous)
    }
}
