use crate::config::{WindowConfig, FRAME_INTERVAL};
use crate::draw::{fill_surface, render_triangle, DrawStep};
use crate::error::{Error, Result};
use crate::event_loop::EventLoop;
use crate::logger::{Level, Logger};
use crate::platform::Platform;
use std::time::Duration;

/// Everything one demo program needs: where to draw, what to draw and
/// how fast to poll.
#[derive(Debug, Clone)]
pub struct Demo {
    pub window: WindowConfig,
    pub step: DrawStep,
    pub idle_wait: Duration,
}

impl Demo {
    pub fn fill() -> Self {
        Demo {
            window: WindowConfig::fill_demo(),
            step: DrawStep::green_fill(),
            idle_wait: FRAME_INTERVAL,
        }
    }

    pub fn triangle() -> Self {
        Demo {
            window: WindowConfig::triangle_demo(),
            step: DrawStep::white_triangle(),
            idle_wait: FRAME_INTERVAL,
        }
    }
}

fn logged(logger: &dyn Logger, err: Error) -> Error {
    logger.log(Level::Error, &err.to_string());
    err
}

/// init -> create window -> draw once -> poll until quit -> destroy window.
///
/// The platform is dropped before returning, whichever way this
/// returns, so the subsystem is shut down exactly once if `init`
/// succeeded.
pub fn run<P, F>(init: F, demo: &Demo, logger: &dyn Logger) -> Result<()>
where
    P: Platform,
    F: FnOnce() -> std::result::Result<P, String>,
{
    let mut platform = init().map_err(|e| logged(logger, Error::Init(e)))?;

    platform
        .create_window(&demo.window)
        .map_err(|e| logged(logger, Error::WindowCreation(e)))?;
    logger.log(
        Level::Info,
        &format!(
            "window \"{}\" created ({}x{})",
            demo.window.title, demo.window.width, demo.window.height
        ),
    );

    draw(&mut platform, &demo.step, logger)?;

    let mut event_loop = EventLoop::new(demo.idle_wait);
    event_loop.run(&mut platform);
    logger.log(
        Level::Info,
        &format!("quit requested after {} iterations", event_loop.iterations()),
    );

    platform
        .destroy_window()
        .map_err(|e| logged(logger, Error::Teardown(e)))
}

fn draw<P: Platform>(platform: &mut P, step: &DrawStep, logger: &dyn Logger) -> Result<()> {
    match step {
        DrawStep::Fill { color } => {
            let mut surface = platform
                .surface()
                .map_err(|e| logged(logger, Error::SurfaceAcquisition(e)))?;
            fill_surface(&mut *surface, *color, logger)
        }
        DrawStep::Triangle { color, points } => {
            let renderer = platform
                .renderer()
                .map_err(|e| logged(logger, Error::SurfaceAcquisition(e)))?;
            render_triangle(renderer, *color, points, logger);
            Ok(())
        }
    }
}
