use std::time::Duration;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Pause between two event loop iterations (one frame at 60Hz).
pub const FRAME_INTERVAL: Duration = Duration::new(0, 1_000_000_000u32 / 60);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowPosition {
    /// Let the window manager decide.
    Undefined,
    Centered,
    At { x: i32, y: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub position: WindowPosition,
    pub width: u32,
    pub height: u32,
    pub visible: bool,
}

impl WindowConfig {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        WindowConfig {
            title: title.to_string(),
            position: WindowPosition::Undefined,
            width,
            height,
            visible: true,
        }
    }

    pub fn fill_demo() -> Self {
        Self::new("SDL Fill", SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn triangle_demo() -> Self {
        Self::new("SDL Triangle", SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn with_position(mut self, position: WindowPosition) -> Self {
        self.position = position;
        self
    }
}
