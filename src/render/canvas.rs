use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::engine::{Color, Point, TextAnchor};

/// 2D canvas backend. Owns nothing but the context; all state lives in the scene.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        if !canvas.is_connected() {
            return None;
        }
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn line(&mut self, from: Point, to: Point, color: &Color, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Point, radius: f64, color: &Color, opacity: f64) {
        self.ctx.set_global_alpha(opacity.clamp(0.0, 1.0));
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::PI * 2.0)
            .ok();
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn rect(&mut self, origin: Point, width: f64, height: f64, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(origin.x, origin.y, width, height);
    }

    fn polygon(&mut self, points: &[Point], color: &Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn text(&mut self, at: Point, text: &str, color: &Color, size: f64, anchor: TextAnchor) {
        self.ctx.set_font(&format!("{}px sans-serif", size));
        self.ctx.set_fill_style_str(&color.to_string());
        match anchor {
            TextAnchor::Start => {
                self.ctx.set_text_align("start");
                self.ctx.set_text_baseline("alphabetic");
            }
            TextAnchor::Middle => {
                self.ctx.set_text_align("center");
                self.ctx.set_text_baseline("middle");
            }
        }
        self.ctx.fill_text(text, at.x, at.y).ok();
    }
}
