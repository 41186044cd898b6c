use crate::config::{WindowConfig, WindowPosition};
use crate::math::{Color, Point};
use crate::platform::{EventSource, Platform, PlatformEvent, Renderer, Surface};
use sdl2::event::Event;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, WindowCanvas};
use sdl2::video::{Window, WindowSurfaceRef};

enum Target {
    Empty,
    Window(Window),
    // into_canvas() consumes the window
    Canvas(WindowCanvas),
}

/// SDL2 backed platform. Dropping it destroys whatever window is left
/// and quits SDL.
pub struct System {
    // dropped in declaration order, the context goes last
    target: Target,
    event_pump: sdl2::EventPump,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
}

impl System {
    pub fn init() -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let event_pump = sdl_context.event_pump()?;

        log::debug!(
            "SDL video initialized, driver: {}",
            video_subsystem.current_video_driver()
        );

        Ok(System {
            target: Target::Empty,
            event_pump,
            video_subsystem,
            sdl_context,
        })
    }
}

impl Drop for System {
    fn drop(&mut self) {
        log::debug!("shutting down SDL");
    }
}

impl EventSource for System {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.event_pump.poll_event().map(|event| match event {
            Event::Quit { .. } => PlatformEvent::Quit,
            _ => PlatformEvent::Other,
        })
    }
}

impl Platform for System {
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), String> {
        let mut builder =
            self.video_subsystem
                .window(&config.title, config.width, config.height);
        match config.position {
            WindowPosition::Undefined => {}
            WindowPosition::Centered => {
                builder.position_centered();
            }
            WindowPosition::At { x, y } => {
                builder.position(x, y);
            }
        }
        if !config.visible {
            builder.hidden();
        }

        let window = match builder.build() {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building window: {e}")),
        };
        self.target = Target::Window(window);
        Ok(())
    }

    fn surface(&mut self) -> Result<Box<dyn Surface + '_>, String> {
        match &self.target {
            Target::Window(window) => Ok(Box::new(window.surface(&self.event_pump)?)),
            Target::Canvas(_) => Err("window is already bound to a renderer".to_string()),
            Target::Empty => Err("no window".to_string()),
        }
    }

    fn renderer(&mut self) -> Result<&mut dyn Renderer, String> {
        self.target = match std::mem::replace(&mut self.target, Target::Empty) {
            Target::Window(window) => match window.into_canvas().accelerated().build() {
                Ok(canvas) => Target::Canvas(canvas),
                Err(e) => return Err(format!("Error while building renderer: {e}")),
            },
            other => other,
        };
        match &mut self.target {
            Target::Canvas(canvas) => Ok(canvas as &mut dyn Renderer),
            _ => Err("no window".to_string()),
        }
    }

    fn destroy_window(&mut self) -> Result<(), String> {
        match std::mem::replace(&mut self.target, Target::Empty) {
            Target::Empty => Err("no window to destroy".to_string()),
            // SDL_DestroyWindow runs in Drop and reports nothing
            _ => Ok(()),
        }
    }
}

impl Surface for WindowSurfaceRef<'_> {
    fn fill(&mut self, color: Color) -> Result<(), String> {
        self.fill_rect(None::<Rect>, color.into())
    }

    fn update_window(&mut self) -> Result<(), String> {
        WindowSurfaceRef::update_window(self)
    }
}

impl Renderer for WindowCanvas {
    fn set_draw_color(&mut self, color: Color) -> Result<(), String> {
        Canvas::set_draw_color(self, color);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), String> {
        Canvas::draw_line(self, from, to)
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}
