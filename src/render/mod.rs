//! Painting a `Scene` onto a drawing surface.
//! Every call is a full repaint: the surface is cleared, then the static
//! layer and the dynamic layer are drawn in that order.

pub mod canvas;

pub use canvas::CanvasSurface;

use crate::engine::{Bearings, Color, Engine, Point, Primitive, Scene, TextAnchor};
use crate::model::Frame;

pub const ROOF_HALF_WIDTH: f64 = 7.0;
pub const ROOF_HEIGHT: f64 = 10.0;
pub const HOUSE_BODY: f64 = 10.0;

/// Anything primitives can be painted on.
pub trait Surface {
    fn clear(&mut self);
    fn line(&mut self, from: Point, to: Point, color: &Color, width: f64);
    fn circle(&mut self, center: Point, radius: f64, color: &Color, opacity: f64);
    fn rect(&mut self, origin: Point, width: f64, height: f64, color: &Color);
    fn polygon(&mut self, points: &[Point], color: &Color);
    fn text(&mut self, at: Point, text: &str, color: &Color, size: f64, anchor: TextAnchor);
}

/// Clears `surface` and paints the whole scene. Returns the primitive count.
pub fn render<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) -> usize {
    surface.clear();
    let mut drawn = 0;
    for p in scene.primitives() {
        draw(p, surface);
        drawn += 1;
    }
    drawn
}

/// Builds and paints the frame at `index`, replacing `bearings` with the
/// ones the new scene produced. Without a frame nothing is built and the
/// surface is left alone.
pub fn paint_frame<S: Surface + ?Sized>(
    engine: &Engine,
    frames: &[Frame],
    index: Option<usize>,
    bearings: &mut Bearings,
    surface: &mut S,
) -> Option<usize> {
    let frame = index.and_then(|i| frames.get(i))?;
    let (scene, next) = engine.scene(frame, bearings);
    *bearings = next;
    Some(render(&scene, surface))
}

fn draw<S: Surface + ?Sized>(p: &Primitive, s: &mut S) {
    match p {
        Primitive::Line {
            from,
            to,
            color,
            width,
        } => s.line(*from, *to, color, *width),
        Primitive::Circle {
            center,
            radius,
            color,
            opacity,
        } => s.circle(*center, *radius, color, *opacity),
        Primitive::Rect {
            origin,
            width,
            height,
            color,
        } => s.rect(*origin, *width, *height, color),
        Primitive::House { anchor } => {
            let a = *anchor;
            s.polygon(
                &[
                    a.offset(-ROOF_HALF_WIDTH, 0.0),
                    a.offset(ROOF_HALF_WIDTH, 0.0),
                    a.offset(0.0, -ROOF_HEIGHT),
                ],
                &Color::ROOF,
            );
            s.rect(
                a.offset(-HOUSE_BODY / 2.0, 0.0),
                HOUSE_BODY,
                HOUSE_BODY,
                &Color::HOUSE,
            );
        }
        Primitive::Arrow { points, color, .. } => s.polygon(points, color),
        Primitive::Text {
            at,
            text,
            color,
            size,
            anchor,
        } => s.text(*at, text, color, *size, *anchor),
    }
}
