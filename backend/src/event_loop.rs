use crate::platform::{EventSource, PlatformEvent};
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal.
    Stopped,
}

pub struct EventLoop {
    state: LoopState,
    idle_wait: Duration,
    iterations: u64,
}

impl EventLoop {
    pub fn new(idle_wait: Duration) -> Self {
        EventLoop {
            state: LoopState::Running,
            idle_wait,
            iterations: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Drains every pending event. Returns the state afterwards.
    pub fn process_io_events(&mut self, events: &mut dyn EventSource) -> LoopState {
        self.iterations += 1;
        while let Some(event) = events.poll_event() {
            if event == PlatformEvent::Quit {
                self.state = LoopState::Stopped;
            }
        }
        self.state
    }

    /// Blocks until a quit event arrives.
    pub fn run(&mut self, events: &mut dyn EventSource) {
        while self.process_io_events(events) == LoopState::Running {
            if !self.idle_wait.is_zero() {
                std::thread::sleep(self.idle_wait);
            }
        }
    }
}
