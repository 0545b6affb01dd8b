use std::sync::Arc;

use vulkano::{
    instance::{debug::DebugUtilsMessenger, Instance},
    swapchain::Surface,
    VulkanLibrary,
};
use winit::{
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::Window,
};

use crate::config::AppConfig;
use crate::debug;
use crate::error::BootstrapError;
use crate::event_loop::{classify, LoopControl, QuitSignal};
use crate::lifecycle::{Ledger, Resource};

/// Window, instance, optional debug messenger and surface, acquired in that
/// order and released in the reverse one.
///
/// Every handle sits in an `Option` slot and every acquisition is entered
/// into a [`Ledger`]. Teardown, whether through [`shutdown`](Self::shutdown)
/// or `Drop`, pops the ledger and empties the matching slot, so a partially
/// built bootstrap unwinds just as cleanly as a complete one.
pub struct Bootstrap {
    config: AppConfig,
    event_loop: Option<EventLoop<()>>,
    window: Option<Arc<Window>>,
    instance: Option<Arc<Instance>>,
    debug_messenger: Option<DebugUtilsMessenger>,
    surface: Option<Arc<Surface>>,
    diagnostics_enabled: bool,
    ledger: Ledger,
    quit: QuitSignal,
}

impl Bootstrap {
    pub fn new(config: AppConfig) -> Result<Self, BootstrapError> {
        let mut bootstrap = Self::unstarted(config);
        bootstrap.init_window()?;
        bootstrap.init_instance()?;
        bootstrap.init_debug_messenger()?;
        bootstrap.init_surface()?;
        Ok(bootstrap)
    }

    fn unstarted(config: AppConfig) -> Self {
        Self {
            config,
            event_loop: None,
            window: None,
            instance: None,
            debug_messenger: None,
            surface: None,
            diagnostics_enabled: false,
            ledger: Ledger::new(),
            quit: QuitSignal::default(),
        }
    }

    fn record(&mut self, resource: Resource) {
        let fresh = self.ledger.acquire(resource);
        debug_assert!(fresh, "{resource} acquired twice");
        tracing::debug!("acquired {}", resource);
    }

    fn init_window(&mut self) -> Result<(), BootstrapError> {
        let event_loop = crate::window::event_loop()?;
        let window = crate::window::window_for_config(&event_loop, &self.config);
        self.event_loop = Some(event_loop);
        self.record(Resource::EventLoop);

        let window = window?;
        tracing::info!(
            "created window \"{}\" ({}x{})",
            self.config.title,
            self.config.width,
            self.config.height
        );
        self.window = Some(window);
        self.record(Resource::Window);
        Ok(())
    }

    fn init_instance(&mut self) -> Result<(), BootstrapError> {
        let library = VulkanLibrary::new()?;
        let request = crate::instance::instance_request(&library, &self.config)?;
        let instance = crate::instance::instance_for_window(library, &self.config, &request)?;
        tracing::info!(
            "created vulkan instance, api {}, {} layer(s) enabled",
            instance.api_version(),
            instance.enabled_layers().len()
        );
        self.instance = Some(instance);
        self.record(Resource::Instance);
        Ok(())
    }

    /// Attaches the long-lived messenger if the instance came up with debug
    /// utils. Without them this is a no-op and diagnostics stay off.
    fn init_debug_messenger(&mut self) -> Result<(), BootstrapError> {
        let Some(instance) = self.instance.clone() else {
            return Ok(());
        };
        if !instance.enabled_extensions().ext_debug_utils {
            self.diagnostics_enabled = false;
            return Ok(());
        }

        //SAFETY: the callback only formats and logs, it never calls back into
        //Vulkan
        let messenger =
            unsafe { DebugUtilsMessenger::new(instance, debug::messenger_create_info()) }?;
        self.debug_messenger = Some(messenger);
        self.diagnostics_enabled = true;
        self.record(Resource::DebugMessenger);
        Ok(())
    }

    fn init_surface(&mut self) -> Result<(), BootstrapError> {
        let (Some(window), Some(instance)) = (self.window.clone(), self.instance.clone()) else {
            return Ok(());
        };
        let surface = crate::window::surface_for_window(window, instance)?;
        self.surface = Some(surface);
        self.record(Resource::Surface);
        Ok(())
    }

    /// Polls without blocking until the window is asked to close.
    pub fn run(&mut self) {
        let Self {
            event_loop, quit, ..
        } = self;
        let Some(event_loop) = event_loop.as_mut() else {
            return;
        };

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            if quit.observe(classify(&event)) == LoopControl::Exit {
                *control_flow = ControlFlow::Exit;
            }
        });
        tracing::info!("quit requested");
    }

    /// Releases everything still held and reports the order it went in.
    /// The `Drop` that follows finds an empty ledger.
    pub fn shutdown(mut self) -> Vec<Resource> {
        self.release_all()
    }

    /// Empties the ledger, most recent acquisition first, and returns what
    /// was released in the order it went.
    fn release_all(&mut self) -> Vec<Resource> {
        let mut released = Vec::new();
        while let Some(resource) = self.ledger.release_next() {
            self.release(resource);
            released.push(resource);
        }
        released
    }

    fn release(&mut self, resource: Resource) {
        let released = match resource {
            Resource::Surface => self.surface.take().is_some(),
            Resource::DebugMessenger => self.debug_messenger.take().is_some(),
            Resource::Instance => self.instance.take().is_some(),
            Resource::Window => self.window.take().is_some(),
            Resource::EventLoop => self.event_loop.take().is_some(),
        };
        if released {
            tracing::debug!("released {}", resource);
        } else {
            tracing::warn!("{} was recorded but its slot is empty", resource);
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.diagnostics_enabled
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.is_requested()
    }
}

impl Drop for Bootstrap {
    fn drop(&mut self) {
        self.release_all();
    }
}
