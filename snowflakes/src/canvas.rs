use crate::Color;

/// How a [`Canvas`] should stroke a primitive.
///
/// Every stroke is an unfilled, anti-aliased outline with round caps, and a point is a round
/// dot as wide as the stroke. Canvases apply that themselves; a paint only carries what varies.
#[derive(PartialEq, Clone, Debug)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f64,
}

impl Paint {
    pub fn stroke(color: Color, stroke_width: f64) -> Paint {
        Paint {
            color,
            stroke_width,
        }
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.color = self.color.with_alpha(alpha);
    }
}

/// Drawing context the snow is rendered onto.
pub trait Canvas {
    type Error;

    /// A single point, as wide as the paint's stroke.
    fn draw_point(&mut self, x: f64, y: f64, paint: &Paint) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        paint: &Paint,
    ) -> Result<(), Self::Error>;
}

/// The surface owner driving [`SnowEffect::step`](crate::SnowEffect::step).
pub trait Host {
    /// Wall-clock milliseconds.
    fn now(&self) -> u64;

    /// Asks the host to schedule another frame.
    fn invalidate(&mut self);
}
