use winit::event::{Event, WindowEvent};

/// The only distinction the bootstrap's loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    QuitRequested,
    Other,
}

pub fn classify<T>(event: &Event<'_, T>) -> PlatformEvent {
    match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => PlatformEvent::QuitRequested,
        _ => PlatformEvent::Other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Latches once a quit request has been seen.
#[derive(Debug, Default)]
pub struct QuitSignal {
    requested: bool,
}

impl QuitSignal {
    pub fn observe(&mut self, event: PlatformEvent) -> LoopControl {
        if event == PlatformEvent::QuitRequested {
            self.requested = true;
        }
        if self.requested {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }
}
