//! Frame → drawable primitives.
//!
//! A `Scene` is rebuilt from scratch for every frame. The only state carried
//! between frames is the per-rocket bearing, passed in and handed back
//! explicitly so a rocket that stops moving keeps pointing the way it was
//! heading.

use std::collections::HashMap;
use std::fmt;

use super::intercept::InterceptionResult;
use super::mapper::{self, CoordinateMapper, Point};
use super::{EngineConfig, Heading, Trajectory};
use crate::model::{Frame, Position, Rocket};

pub const STROKE_WIDTH: f64 = 2.0;
pub const TOWER_MARKER_PX: f64 = 10.0;
pub const TOWER_RANGE_OPACITY: f64 = 0.1;
pub const ARROW_PX: f64 = 8.0;
pub const LABEL_PX: f64 = 10.0;
pub const MARK_PX: f64 = 12.0;
pub const INTERCEPT_MARK: &str = "X";

/// Last known bearing per rocket index.
pub type Bearings = HashMap<usize, f64>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Named(&'static str),
    Hsl { hue: u16, saturation: u8, lightness: u8 },
}

impl Color {
    pub const GRID: Color = Color::Named("lightgray");
    pub const LABEL: Color = Color::Named("black");
    pub const TOWER: Color = Color::Named("blue");
    pub const ROOF: Color = Color::Named("brown");
    pub const HOUSE: Color = Color::Named("red");
    pub const INTERCEPT: Color = Color::Named("red");

    /// Per-rocket hue: 60° apart, wrapping every six rockets.
    pub fn rocket(index: usize) -> Self {
        Color::Hsl {
            hue: ((index * 60) % 360) as u16,
            saturation: 100,
            lightness: 50,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        opacity: f64,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        color: Color,
    },
    /// Target icon: triangular roof over a square body, anchored at the eave centre.
    House { anchor: Point },
    Arrow {
        points: [Point; 3],
        bearing: f64,
        color: Color,
    },
    Text {
        at: Point,
        text: String,
        color: Color,
        size: f64,
        anchor: TextAnchor,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Grid, towers, targets.
    pub static_layer: Vec<Primitive>,
    /// Rocket trajectories and their markers.
    pub dynamic_layer: Vec<Primitive>,
}

impl Scene {
    /// Draw order: static layer first so nothing covers the rockets.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.static_layer.iter().chain(self.dynamic_layer.iter())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneBuilder {
    mapper: CoordinateMapper,
    config: EngineConfig,
}

impl SceneBuilder {
    pub fn new(mapper: CoordinateMapper, config: EngineConfig) -> Self {
        Self { mapper, config }
    }

    pub fn build(
        &self,
        frame: &Frame,
        results: &[InterceptionResult],
        previous: &Bearings,
    ) -> (Scene, Bearings) {
        let mut scene = Scene::default();
        self.grid(frame, &mut scene.static_layer);
        self.towers_and_targets(frame, &mut scene.static_layer);

        let mut bearings = Bearings::with_capacity(frame.rockets.len());
        for (idx, rocket) in frame.rockets.iter().enumerate() {
            let result = results.get(idx).copied().unwrap_or_default();
            let bearing = self.rocket(
                idx,
                rocket,
                &result,
                frame.time_step,
                previous.get(&idx).copied(),
                &mut scene.dynamic_layer,
            );
            if let Some(b) = bearing {
                bearings.insert(idx, b);
            }
        }
        (scene, bearings)
    }

    fn grid(&self, frame: &Frame, out: &mut Vec<Primitive>) {
        let m = &self.mapper;
        let rows = i32::try_from(frame.grid.rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(frame.grid.cols).unwrap_or(i32::MAX);
        let bottom = m.to_pixel(Position::new(rows, 0)).y;
        for r in 0..=rows {
            let from = m.to_pixel(Position::new(r, 0));
            let to = m.to_pixel(Position::new(r, cols));
            out.push(Primitive::Line {
                from,
                to,
                color: Color::GRID,
                width: STROKE_WIDTH,
            });
            out.push(label(from.offset(-20.0, 5.0), r));
        }
        for c in 0..=cols {
            let from = m.to_pixel(Position::new(0, c));
            let to = m.to_pixel(Position::new(rows, c));
            out.push(Primitive::Line {
                from,
                to,
                color: Color::GRID,
                width: STROKE_WIDTH,
            });
            out.push(label(Point::new(from.x - 10.0, bottom + 20.0), c));
        }
    }

    fn towers_and_targets(&self, frame: &Frame, out: &mut Vec<Primitive>) {
        let half = TOWER_MARKER_PX / 2.0;
        for tower in &frame.towers {
            let center = self.mapper.to_pixel(tower.position);
            out.push(Primitive::Circle {
                center,
                radius: self.mapper.length(tower.radius),
                color: Color::TOWER,
                opacity: TOWER_RANGE_OPACITY,
            });
            out.push(Primitive::Rect {
                origin: center.offset(-half, -half),
                width: TOWER_MARKER_PX,
                height: TOWER_MARKER_PX,
                color: Color::TOWER,
            });
        }
        for target in &frame.targets {
            out.push(Primitive::House {
                anchor: self.mapper.to_pixel(*target),
            });
        }
    }

    /// Pushes one rocket's trajectory and marker; returns its bearing, if known.
    fn rocket(
        &self,
        idx: usize,
        rocket: &Rocket,
        result: &InterceptionResult,
        progress: u32,
        previous: Option<f64>,
        out: &mut Vec<Primitive>,
    ) -> Option<f64> {
        let stop = result.stop_index(rocket);
        let drawn_end = match self.config.trajectory {
            Trajectory::FullPath => stop,
            Trajectory::Cumulative => rocket.progress_index(progress).min(stop),
        };
        let color = Color::rocket(idx);
        for pair in rocket.path[..=drawn_end].windows(2) {
            out.push(Primitive::Line {
                from: self.mapper.to_pixel(pair[0]),
                to: self.mapper.to_pixel(pair[1]),
                color,
                width: STROKE_WIDTH,
            });
        }

        let tip = self.mapper.to_pixel(rocket.path[drawn_end]);
        let stopped = result.intercepted
            && match self.config.trajectory {
                Trajectory::FullPath => true,
                Trajectory::Cumulative => result.reported || drawn_end == stop,
            };
        if stopped {
            out.push(Primitive::Text {
                at: tip,
                text: INTERCEPT_MARK.to_string(),
                color: Color::INTERCEPT,
                size: MARK_PX,
                anchor: TextAnchor::Middle,
            });
            return previous;
        }

        let (from, to) = match self.config.heading {
            Heading::StartToEnd => (rocket.start, rocket.end),
            Heading::LocalSegment => (rocket.path[drawn_end.saturating_sub(1)], rocket.path[drawn_end]),
        };
        let bearing = mapper::bearing(from, to, previous);
        out.push(Primitive::Arrow {
            points: arrow_head(tip, bearing, ARROW_PX),
            bearing,
            color,
        });
        Some(bearing)
    }
}

fn label(at: Point, value: i32) -> Primitive {
    Primitive::Text {
        at,
        text: value.to_string(),
        color: Color::LABEL,
        size: LABEL_PX,
        anchor: TextAnchor::Start,
    }
}

fn arrow_head(center: Point, bearing: f64, size: f64) -> [Point; 3] {
    let (dx, dy) = mapper::heading_vector(bearing);
    let (px, py) = (-dy, dx);
    let back = size * 0.6;
    [
        center.offset(dx * size, dy * size),
        center.offset(-dx * back + px * back, -dy * back + py * back),
        center.offset(-dx * back - px * back, -dy * back - py * back),
    ]
}
