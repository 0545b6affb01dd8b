//! Window, Vulkan instance, optional validation messenger and surface,
//! brought up in order and torn down in reverse.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]

pub mod config;
pub mod debug;
pub mod error;
pub mod event_loop;
pub mod instance;
pub mod lifecycle;
pub mod setup;
pub mod window;

pub use config::AppConfig;
pub use error::BootstrapError;
pub use setup::Bootstrap;
