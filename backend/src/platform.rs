//! The slice of the windowing library the demos depend on.
//!
//! Subsystem init and quit are not part of the trait: an implementor is
//! constructed by its init function and shuts the subsystem down when
//! dropped.

use crate::config::WindowConfig;
use crate::math::{Color, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window close / application quit request.
    Quit,
    Other,
}

/// Raw pixel buffer of a window.
pub trait Surface {
    fn fill(&mut self, color: Color) -> Result<(), String>;
    /// Copies the surface to the screen.
    fn update_window(&mut self) -> Result<(), String>;
}

/// Accelerated drawing context of a window.
pub trait Renderer {
    fn set_draw_color(&mut self, color: Color) -> Result<(), String>;
    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), String>;
    /// Shows the back buffer.
    fn present(&mut self);
}

pub trait EventSource {
    /// Non-blocking. `None` once the queue is empty.
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

pub trait Platform: EventSource {
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), String>;
    fn surface(&mut self) -> Result<Box<dyn Surface + '_>, String>;
    /// Binds a renderer to the window on first call.
    fn renderer(&mut self) -> Result<&mut dyn Renderer, String>;
    fn destroy_window(&mut self) -> Result<(), String>;
}
