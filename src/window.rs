use std::{any::Any, panic, sync::Arc};

use vulkano::{instance::Instance, swapchain::Surface};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::AppConfig;
use crate::error::BootstrapError;

/// Brings up the windowing subsystem. winit panics when no display backend
/// is reachable; that panic is turned into an error here.
pub fn event_loop() -> Result<EventLoop<()>, BootstrapError> {
    panic::catch_unwind(EventLoop::new)
        .map_err(|payload| BootstrapError::EventLoop(panic_message(payload.as_ref())))
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

pub fn window_for_config(
    event_loop: &EventLoop<()>,
    config: &AppConfig,
) -> Result<Arc<Window>, BootstrapError> {
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .build(event_loop)?;
    center_on_monitor(&window);
    Ok(Arc::new(window))
}

/// Top-left corner that centers `window` inside `monitor`, both in physical
/// pixels. Clamped so an oversized window still starts on screen.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| (monitor.saturating_sub(window) / 2) as i32;
    PhysicalPosition::new(
        monitor_position.x + offset(monitor_size.width, window_size.width),
        monitor_position.y + offset(monitor_size.height, window_size.height),
    )
}

fn center_on_monitor(window: &Window) {
    // Wayland has no notion of window position; the compositor decides.
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    window.set_outer_position(centered_position(
        monitor.position(),
        monitor.size(),
        window.outer_size(),
    ));
}

pub fn surface_for_window(
    window: Arc<Window>,
    instance: Arc<Instance>,
) -> Result<Arc<Surface>, BootstrapError> {
    Ok(vulkano_win::create_surface_from_winit(window, instance)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_panic_text_becomes_error() {
        let payload =
            panic::catch_unwind(|| panic!("Failed to initialize any backend!")).unwrap_err();
        let err = BootstrapError::EventLoop(panic_message(payload.as_ref()));

        assert_eq!(
            err.to_string(),
            "could not init windowing subsystem: Failed to initialize any backend!"
        );
    }

    #[test]
    fn formatted_panic_text_is_kept() {
        let status = String::from("XOpenDisplayFailed");
        let payload = panic::catch_unwind(move || panic!("X11 status: {status}")).unwrap_err();

        assert_eq!(panic_message(payload.as_ref()), "X11 status: XOpenDisplayFailed");
    }

    #[test]
    fn foreign_payload_has_placeholder_text() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);

        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn centers_inside_monitor() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(560, 240));
    }

    #[test]
    fn respects_monitor_origin() {
        let position = centered_position(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(2160, 12));
    }

    #[test]
    fn oversized_window_starts_at_monitor_origin() {
        let position = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(position, PhysicalPosition::new(0, 0));
    }
}
