use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use crate::{Canvas, Paint, Particle, ShapeType};

/// Arms on a [`ShapeType::Thin`] flake.
pub const FLAKE_ARMS: usize = 6;

/// The two stroke styles particles are drawn with.
#[derive(PartialEq, Clone, Debug)]
pub struct Paints {
    /// Used by [`ShapeType::Dot`].
    pub particle: Paint,
    /// Used by [`ShapeType::Thin`].
    pub thin: Paint,
}

/// `255 * alpha`, rounded and clamped to a channel value.
pub fn alpha_channel(alpha: f64) -> u8 {
    (255.0 * alpha).round().clamp(0.0, 255.0) as u8
}

/// Draws one particle, setting the matching paint's alpha from the particle first.
pub fn draw_particle<C: Canvas + ?Sized>(
    canvas: &mut C,
    particle: &Particle,
    paints: &mut Paints,
    density: f64,
) -> Result<(), C::Error> {
    let (x, y) = particle.position;

    match particle.shape {
        ShapeType::Dot => {
            paints.particle.set_alpha(alpha_channel(particle.alpha));
            canvas.draw_point(x, y, &paints.particle)?;
        }
        ShapeType::Thin => {
            paints.thin.set_alpha(alpha_channel(particle.alpha));
            draw_flake(canvas, x, y, density * particle.scale, &paints.thin)?;
        }
    }

    Ok(())
}

/// Six-pointed glyph centered on `(x, y)`, first arm pointing up.
fn draw_flake<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: f64,
    y: f64,
    size: f64,
    paint: &Paint,
) -> Result<(), C::Error> {
    let arm = 4.0 * size;
    let branch_x = -1.14 * size;
    let branch_y = 3.1 * size;

    let mut angle = -FRAC_PI_2;

    for _ in 0..FLAKE_ARMS {
        let (sin, cos) = angle.sin_cos();
        let tip = (cos * arm, sin * arm);
        let fork = (tip.0 * 0.66, tip.1 * 0.66);

        canvas.draw_line(x, y, x + tip.0, y + tip.1, paint)?;

        let (sin, cos) = (angle - FRAC_PI_2).sin_cos();

        let left = (
            cos * branch_x - sin * branch_y,
            sin * branch_x + cos * branch_y,
        );
        canvas.draw_line(x + fork.0, y + fork.1, x + left.0, y + left.1, paint)?;

        let right = (
            -cos * branch_x - sin * branch_y,
            -sin * branch_x + cos * branch_y,
        );
        canvas.draw_line(x + fork.0, y + fork.1, x + right.0, y + right.1, paint)?;

        angle += FRAC_PI_3;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::Color;

    #[derive(Default)]
    struct Recorder {
        points: Vec<(f64, f64, Paint)>,
        lines: Vec<(f64, f64, f64, f64, Paint)>,
    }

    impl Canvas for Recorder {
        type Error = Infallible;

        fn draw_point(&mut self, x: f64, y: f64, paint: &Paint) -> Result<(), Infallible> {
            self.points.push((x, y, paint.clone()));
            Ok(())
        }

        fn draw_line(
            &mut self,
            x0: f64,
            y0: f64,
            x1: f64,
            y1: f64,
            paint: &Paint,
        ) -> Result<(), Infallible> {
            self.lines.push((x0, y0, x1, y1, paint.clone()));
            Ok(())
        }
    }

    fn paints() -> Paints {
        Paints {
            particle: Paint::stroke(Color(0xffff_0000), 1.5),
            thin: Paint::stroke(Color(0xff00_00ff), 0.5),
        }
    }

    fn particle(shape: ShapeType, alpha: f64) -> Particle {
        Particle {
            alpha,
            ..Particle::new((100.0, 50.0), (0.0, 1.0), 20.0, 2000.0, 1.0, shape)
        }
    }

    #[test]
    fn alpha_channel_rounds() {
        assert_eq!(alpha_channel(0.0), 0);
        assert_eq!(alpha_channel(0.5), 128);
        assert_eq!(alpha_channel(1.0), 255);
    }

    #[test]
    fn dot_is_one_point_with_primary_paint() {
        let mut canvas = Recorder::default();
        let mut paints = paints();

        draw_particle(&mut canvas, &particle(ShapeType::Dot, 0.5), &mut paints, 2.0).unwrap();

        assert!(canvas.lines.is_empty());
        assert_eq!(canvas.points.len(), 1);

        let (x, y, paint) = &canvas.points[0];
        assert_eq!((*x, *y), (100.0, 50.0));
        assert_eq!(paint.color, Color(0x80ff_0000));
        assert_eq!(paint.stroke_width, 1.5);
    }

    #[test]
    fn thin_flake_has_three_strokes_per_arm() {
        let mut canvas = Recorder::default();
        let mut paints = paints();

        draw_particle(&mut canvas, &particle(ShapeType::Thin, 1.0), &mut paints, 1.0).unwrap();

        assert!(canvas.points.is_empty());
        assert_eq!(canvas.lines.len(), FLAKE_ARMS * 3);
        assert!(canvas
            .lines
            .iter()
            .all(|line| line.4.color == Color(0xff00_00ff) && line.4.stroke_width == 0.5));
    }

    #[test]
    fn first_arm_points_up() {
        let mut canvas = Recorder::default();
        let mut paints = paints();

        draw_particle(&mut canvas, &particle(ShapeType::Thin, 1.0), &mut paints, 2.0).unwrap();

        let (x0, y0, x1, y1, _) = canvas.lines[0];
        assert_eq!((x0, y0), (100.0, 50.0));
        assert!((x1 - 100.0).abs() < 1e-9);
        assert!((y1 - 42.0).abs() < 1e-9);
    }

    #[test]
    fn side_branches_fork_two_thirds_along_the_arm() {
        let mut canvas = Recorder::default();
        let mut paints = paints();

        draw_particle(&mut canvas, &particle(ShapeType::Thin, 1.0), &mut paints, 1.0).unwrap();

        let fork = (100.0, 50.0 - 4.0 * 0.66);
        for line in &canvas.lines[1..3] {
            assert!((line.0 - fork.0).abs() < 1e-9);
            assert!((line.1 - fork.1).abs() < 1e-9);
        }

        // Mirrored about the arm.
        let (left, right) = (&canvas.lines[1], &canvas.lines[2]);
        assert!(((left.2 - 100.0) + (right.2 - 100.0)).abs() < 1e-9);
        assert!((left.3 - right.3).abs() < 1e-9);
    }

    #[test]
    fn side_branch_tips_are_offsets_from_the_center() {
        let mut canvas = Recorder::default();
        let mut paints = paints();

        draw_particle(&mut canvas, &particle(ShapeType::Thin, 1.0), &mut paints, 1.0).unwrap();

        let (left, right) = (&canvas.lines[1], &canvas.lines[2]);
        assert!((left.2 - (100.0 + 1.14)).abs() < 1e-9);
        assert!((left.3 - (50.0 - 3.1)).abs() < 1e-9);
        assert!((right.2 - (100.0 - 1.14)).abs() < 1e-9);
        assert!((right.3 - (50.0 - 3.1)).abs() < 1e-9);
    }

    #[test]
    fn zero_scale_collapses_the_glyph() {
        let mut canvas = Recorder::default();
        let mut paints = paints();
        let flake = Particle {
            scale: 0.0,
            ..particle(ShapeType::Thin, 1.0)
        };

        draw_particle(&mut canvas, &flake, &mut paints, 3.0).unwrap();

        assert!(canvas
            .lines
            .iter()
            .all(|line| line.2 == 100.0 && line.3 == 50.0));
    }
}
