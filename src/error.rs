use std::fmt;

use thiserror::Error;
use vulkano::{
    instance::{debug::DebugUtilsMessengerCreationError, InstanceCreationError},
    library::LoadingError,
    swapchain::SurfaceCreationError,
    OomError,
};
use winit::error::OsError;

/// Anything that can stop the bootstrap from coming up. All of these are
/// fatal: the entry point logs them and exits with status 1.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not load vulkan library: {0}")]
    LibraryLoad(#[from] LoadingError),
    #[error("could not enumerate instance layers: {0}")]
    LayerQuery(#[from] OomError),
    #[error("could not get required extensions, missing: {0:?}")]
    MissingExtensions(Vec<&'static str>),
    #[error("could not init windowing subsystem: {0}")]
    EventLoop(String),
    #[error("could not create window: {0}")]
    WindowCreation(#[from] OsError),
    #[error("could not create vulkan instance: {0}{}", result_suffix(.0))]
    InstanceCreation(#[from] InstanceCreationError),
    #[error("could not set up debug messenger: {0}")]
    DebugMessenger(#[from] DebugUtilsMessengerCreationError),
    #[error("could not create surface: {0}")]
    SurfaceCreation(#[from] SurfaceCreationError),
}

/// The numeric `VkResult` behind an error together with its symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VkResultCode {
    pub code: i32,
    pub name: &'static str,
}

impl VkResultCode {
    const fn new(code: i32, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Maps an instance creation failure back to the `VkResult` the driver
    /// returned. Validation failures raised by vulkano itself have none.
    pub fn from_instance_error(err: &InstanceCreationError) -> Option<Self> {
        match err {
            InstanceCreationError::OomError(OomError::OutOfHostMemory) => {
                Some(Self::new(-1, "VK_ERROR_OUT_OF_HOST_MEMORY"))
            }
            InstanceCreationError::OomError(OomError::OutOfDeviceMemory) => {
                Some(Self::new(-2, "VK_ERROR_OUT_OF_DEVICE_MEMORY"))
            }
            InstanceCreationError::InitializationFailed => {
                Some(Self::new(-3, "VK_ERROR_INITIALIZATION_FAILED"))
            }
            InstanceCreationError::LayerNotPresent => {
                Some(Self::new(-6, "VK_ERROR_LAYER_NOT_PRESENT"))
            }
            InstanceCreationError::ExtensionNotPresent => {
                Some(Self::new(-7, "VK_ERROR_EXTENSION_NOT_PRESENT"))
            }
            InstanceCreationError::IncompatibleDriver => {
                Some(Self::new(-9, "VK_ERROR_INCOMPATIBLE_DRIVER"))
            }
            _ => None,
        }
    }
}

impl fmt::Display for VkResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.code, self.name)
    }
}

fn result_suffix(err: &InstanceCreationError) -> String {
    match VkResultCode::from_instance_error(err) {
        Some(code) => format!(" (result: {code})"),
        None => String::new(),
    }
}
