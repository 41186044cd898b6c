use crate::error::{Error, Result};
use crate::logger::{Level, Logger};
use crate::math::{Color, Point};
use crate::platform::{Renderer, Surface};

/// What a demo draws once before entering the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawStep {
    /// Fill the window surface.
    Fill { color: Color },
    /// Outline a triangle with the accelerated renderer.
    Triangle { color: Color, points: Vec<Point> },
}

pub const TRIANGLE_POINTS: [Point; 3] = [
    Point::new(400, 100), // top
    Point::new(300, 400), // bottom left
    Point::new(500, 400), // bottom right
];

impl DrawStep {
    pub fn green_fill() -> Self {
        DrawStep::Fill {
            color: Color::GREEN,
        }
    }

    pub fn white_triangle() -> Self {
        DrawStep::Triangle {
            color: Color::WHITE,
            points: TRIANGLE_POINTS.to_vec(),
        }
    }
}

/// Sets every pixel of the surface and pushes it to the window.
/// Any failure is fatal.
pub fn fill_surface(surface: &mut dyn Surface, color: Color, logger: &dyn Logger) -> Result<()> {
    surface.fill(color).map_err(|e| {
        logger.log(Level::Error, &format!("Failed to fill surface: {e}"));
        Error::Draw(e)
    })?;
    surface.update_window().map_err(|e| {
        logger.log(Level::Error, &format!("Failed to update window surface: {e}"));
        Error::Draw(e)
    })
}

/// Draws the closed outline p0-p1, p1-p2, p2-p0. Needs exactly three
/// points, anything else is logged and skipped. A failed line does not
/// stop the others. Returns the number of lines drawn.
pub fn draw_triangle(
    renderer: &mut dyn Renderer,
    color: Color,
    points: &[Point],
    logger: &dyn Logger,
) -> usize {
    if points.len() != 3 {
        logger.log(
            Level::Warn,
            &format!("draw_triangle requires exactly 3 points, got {}", points.len()),
        );
        return 0;
    }

    if let Err(e) = renderer.set_draw_color(color) {
        logger.log(Level::Error, &format!("Failed to set draw color: {}", Error::Draw(e)));
        return 0;
    }

    let mut drawn = 0;
    for i in 0..3 {
        let next = (i + 1) % 3;
        match renderer.draw_line(points[i], points[next]) {
            Ok(()) => drawn += 1,
            Err(e) => logger.log(
                Level::Error,
                &format!(
                    "Failed to draw line {:?} -> {:?}: {}",
                    points[i],
                    points[next],
                    Error::Draw(e)
                ),
            ),
        }
    }
    drawn
}

/// Runs the triangle pass and presents the back buffer once.
pub fn render_triangle(
    renderer: &mut dyn Renderer,
    color: Color,
    points: &[Point],
    logger: &dyn Logger,
) {
    let drawn = draw_triangle(renderer, color, points, logger);
    logger.log(Level::Debug, &format!("triangle: {drawn} of 3 lines drawn"));
    renderer.present();
}
