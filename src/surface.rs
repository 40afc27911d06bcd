use std::f64::consts::TAU;

use snowflakes::{Canvas, Color, Host, Paint};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// CSS `rgba()` notation for a packed color.
pub fn css_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.red(),
        color.green(),
        color.blue(),
        color.alpha() as f64 / 255.0
    )
}

/// Draws snow strokes through a 2D canvas context.
pub struct CanvasSurface<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(context: &'a CanvasRenderingContext2d) -> CanvasSurface<'a> {
        CanvasSurface { context }
    }
}

impl Canvas for CanvasSurface<'_> {
    type Error = JsValue;

    fn draw_point(&mut self, x: f64, y: f64, paint: &Paint) -> Result<(), JsValue> {
        // A round-capped zero-length stroke, filled directly.
        self.context.set_fill_style_str(&css_color(paint.color));
        self.context.begin_path();
        self.context.arc(x, y, paint.stroke_width / 2.0, 0.0, TAU)?;
        self.context.fill();

        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        paint: &Paint,
    ) -> Result<(), JsValue> {
        self.context.set_stroke_style_str(&css_color(paint.color));
        self.context.set_line_width(paint.stroke_width);
        self.context.set_line_cap("round");

        self.context.begin_path();
        self.context.move_to(x0, y0);
        self.context.line_to(x1, y1);
        self.context.stroke();

        Ok(())
    }
}

/// Browser side of the frame loop: wall-clock time and the "draw again" flag.
#[derive(Default)]
pub struct FrameHost {
    invalidated: bool,
}

impl FrameHost {
    /// Whether the effect asked for another frame since the last call.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }
}

impl Host for FrameHost {
    fn now(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }
}
