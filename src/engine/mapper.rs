//! Grid → pixel mapping and rocket bearings.

use crate::model::Position;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Fixed for a rendering session; `scale` is pixels per grid unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl CoordinateMapper {
    /// Negative offsets become 0 and a non-positive scale becomes 1.
    pub fn new(offset_x: f64, offset_y: f64, scale: f64) -> Self {
        let mapper = Self {
            offset_x: offset_x.max(0.0),
            offset_y: offset_y.max(0.0),
            scale: if scale > 0.0 { scale } else { 1.0 },
        };
        if mapper.offset_x != offset_x || mapper.offset_y != offset_y || mapper.scale != scale {
            log::warn!(
                "mapper settings ({}, {}, scale {}) coerced to ({}, {}, scale {})",
                offset_x,
                offset_y,
                scale,
                mapper.offset_x,
                mapper.offset_y,
                mapper.scale
            );
        }
        mapper
    }

    pub fn to_pixel(&self, p: Position) -> Point {
        Point::new(
            self.offset_x + p.col as f64 * self.scale,
            self.offset_y + p.row as f64 * self.scale,
        )
    }

    /// Inverse of `to_pixel`, as `(row, col)`.
    pub fn to_grid(&self, pt: Point) -> (f64, f64) {
        (
            (pt.y - self.offset_y) / self.scale,
            (pt.x - self.offset_x) / self.scale,
        )
    }

    pub fn length(&self, grid_units: f64) -> f64 {
        grid_units * self.scale
    }
}

/// Bearing in degrees from `from` towards `to`, rotated by 90° so that 0° is
/// the marker's drawn direction of travel. Coincident points have no
/// direction; the previous bearing (or 0) is kept.
pub fn bearing(from: Position, to: Position, previous: Option<f64>) -> f64 {
    if from == to {
        return previous.unwrap_or(0.0);
    }
    let dcol = to.col as f64 - from.col as f64;
    let drow = to.row as f64 - from.row as f64;
    dcol.atan2(drow).to_degrees() + 90.0
}

/// Unit vector in pixel space that a marker with `bearing` points along.
pub fn heading_vector(bearing: f64) -> (f64, f64) {
    let a = (180.0 - bearing).to_radians();
    (a.cos(), a.sin())
}
