//! Scriptable in-memory platform and logger for tests.

use crate::config::WindowConfig;
use crate::logger::{Level, Logger};
use crate::math::{Color, Point};
use crate::platform::{EventSource, Platform, PlatformEvent, Renderer, Surface};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateWindow(String),
    AcquireSurface,
    AcquireRenderer,
    Fill(Color),
    UpdateWindow,
    SetDrawColor(Color),
    DrawLine(Point, Point),
    Present,
    DestroyWindow,
    Shutdown,
}

#[derive(Debug, Default, Clone)]
pub struct Failures {
    pub create_window: bool,
    pub surface: bool,
    pub renderer: bool,
    pub fill: bool,
    pub set_draw_color: bool,
    /// Indices (0..3) of line draws that fail.
    pub lines: Vec<usize>,
    pub destroy_window: bool,
}

/// Shared call journal, survives the platform being dropped.
pub type Journal = Rc<RefCell<Vec<Call>>>;

pub struct FakePlatform {
    journal: Journal,
    failures: Failures,
    events: VecDeque<Option<PlatformEvent>>,
    lines_drawn: usize,
    has_window: bool,
}

impl FakePlatform {
    pub fn new(journal: Journal) -> Self {
        FakePlatform {
            journal,
            failures: Failures::default(),
            events: VecDeque::new(),
            lines_drawn: 0,
            has_window: false,
        }
    }

    pub fn failing(mut self, failures: Failures) -> Self {
        self.failures = failures;
        self
    }

    /// One loop iteration per batch: each batch ends with an empty poll.
    pub fn with_event_batches(mut self, batches: Vec<Vec<PlatformEvent>>) -> Self {
        for batch in batches {
            self.events.extend(batch.into_iter().map(Some));
            self.events.push_back(None);
        }
        self
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

impl Drop for FakePlatform {
    fn drop(&mut self) {
        self.record(Call::Shutdown);
    }
}

impl EventSource for FakePlatform {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front().flatten()
    }
}

impl Platform for FakePlatform {
    fn create_window(&mut self, config: &WindowConfig) -> Result<(), String> {
        self.record(Call::CreateWindow(config.title.clone()));
        if self.failures.create_window {
            return Err("No available video device".to_string());
        }
        self.has_window = true;
        Ok(())
    }

    fn surface(&mut self) -> Result<Box<dyn Surface + '_>, String> {
        self.record(Call::AcquireSurface);
        if self.failures.surface {
            return Err("surface unavailable".to_string());
        }
        Ok(Box::new(FakeTarget(self)))
    }

    fn renderer(&mut self) -> Result<&mut dyn Renderer, String> {
        self.record(Call::AcquireRenderer);
        if self.failures.renderer {
            return Err("Couldn't find matching render driver".to_string());
        }
        Ok(self as &mut dyn Renderer)
    }

    fn destroy_window(&mut self) -> Result<(), String> {
        self.record(Call::DestroyWindow);
        if self.failures.destroy_window || !self.has_window {
            return Err("invalid window".to_string());
        }
        self.has_window = false;
        Ok(())
    }
}

struct FakeTarget<'a>(&'a mut FakePlatform);

impl Surface for FakeTarget<'_> {
    fn fill(&mut self, color: Color) -> Result<(), String> {
        self.0.record(Call::Fill(color));
        if self.0.failures.fill {
            return Err("surface locked".to_string());
        }
        Ok(())
    }

    fn update_window(&mut self) -> Result<(), String> {
        self.0.record(Call::UpdateWindow);
        Ok(())
    }
}

impl Renderer for FakePlatform {
    fn set_draw_color(&mut self, color: Color) -> Result<(), String> {
        self.record(Call::SetDrawColor(color));
        if self.failures.set_draw_color {
            return Err("invalid renderer".to_string());
        }
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<(), String> {
        self.record(Call::DrawLine(from, to));
        let index = self.lines_drawn;
        self.lines_drawn += 1;
        if self.failures.lines.contains(&index) {
            return Err(format!("line {index} rejected"));
        }
        Ok(())
    }

    fn present(&mut self) {
        self.record(Call::Present);
    }
}

/// Keeps every log line for inspection.
#[derive(Default)]
pub struct RecordingLogger {
    pub lines: RefCell<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn count(&self, level: Level) -> usize {
        self.lines.borrow().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn count(journal: &Journal, pred: impl Fn(&Call) -> bool) -> usize {
    journal.borrow().iter().filter(|c| pred(c)).count()
}
