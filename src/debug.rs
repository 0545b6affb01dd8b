//! Validation layer detection and the debug messenger that forwards its
//! messages to [`tracing`].
//!
//! Diagnostics are opt-in by availability: when the configured validation
//! layer is installed and the loader exposes `VK_EXT_debug_utils`, the
//! instance is created with both enabled and a messenger is attached.
//! Otherwise the instance is created bare and no messenger ever exists.

use std::sync::Arc;

use vulkano::instance::{
    debug::{
        DebugUtilsMessageSeverity, DebugUtilsMessageType, DebugUtilsMessengerCreateInfo, Message,
    },
    InstanceExtensions,
};

/// Returns `true` when `layer` is among `available` and the debug utils
/// extension can be enabled alongside it.
pub fn diagnostics_available<'a>(
    available: impl IntoIterator<Item = &'a str>,
    layer: &str,
    debug_utils_supported: bool,
) -> bool {
    debug_utils_supported && available.into_iter().any(|name| name == layer)
}

/// Extensions and layers to request at instance creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    pub extensions: InstanceExtensions,
    pub layers: Vec<String>,
}

impl InstanceRequest {
    /// `required` is what the windowing system needs to present. Passing a
    /// validation layer appends `VK_EXT_debug_utils` and enables that layer.
    pub fn new(required: InstanceExtensions, validation_layer: Option<&str>) -> Self {
        match validation_layer {
            Some(layer) => Self {
                extensions: required.union(&InstanceExtensions {
                    ext_debug_utils: true,
                    ..InstanceExtensions::empty()
                }),
                layers: vec![layer.to_owned()],
            },
            None => Self {
                extensions: required,
                layers: Vec::new(),
            },
        }
    }

    pub fn diagnostics_enabled(&self) -> bool {
        !self.layers.is_empty()
    }
}

/// All severities and all message types, routed to [`log_message`].
///
/// Built fresh for each use: once chained into instance creation, once for
/// the long-lived messenger.
pub fn messenger_create_info() -> DebugUtilsMessengerCreateInfo {
    DebugUtilsMessengerCreateInfo {
        message_severity: DebugUtilsMessageSeverity {
            error: true,
            warning: true,
            verbose: true,
            ..DebugUtilsMessageSeverity::empty()
        },
        message_type: DebugUtilsMessageType {
            general: true,
            validation: true,
            performance: true,
            ..DebugUtilsMessageType::empty()
        },
        ..DebugUtilsMessengerCreateInfo::user_callback(Arc::new(log_message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Warning,
    Info,
    Verbose,
}

impl MessageLevel {
    /// Most severe flag wins when several are set.
    pub fn from_severity(severity: &DebugUtilsMessageSeverity) -> Self {
        if severity.error {
            MessageLevel::Error
        } else if severity.warning {
            MessageLevel::Warning
        } else if severity.information {
            MessageLevel::Info
        } else {
            MessageLevel::Verbose
        }
    }
}

pub fn message_kind(ty: &DebugUtilsMessageType) -> &'static str {
    if ty.validation {
        "VALIDATION"
    } else if ty.performance {
        "PERFORMANCE"
    } else if ty.general {
        "GENERAL"
    } else {
        "UNKNOWN"
    }
}

/// Messenger callback. Never aborts the call that produced the message.
fn log_message(msg: &Message<'_>) {
    let kind = message_kind(&msg.ty);
    let layer = msg.layer_prefix.unwrap_or("unknown");

    match MessageLevel::from_severity(&msg.severity) {
        MessageLevel::Error => {
            tracing::error!(target: "validation_layer", "[{}] {}: {}", kind, layer, msg.description)
        }
        MessageLevel::Warning => {
            tracing::warn!(target: "validation_layer", "[{}] {}: {}", kind, layer, msg.description)
        }
        MessageLevel::Info => {
            tracing::info!(target: "validation_layer", "[{}] {}: {}", kind, layer, msg.description)
        }
        MessageLevel::Verbose => {
            tracing::debug!(target: "validation_layer", "[{}] {}: {}", kind, layer, msg.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VALIDATION_LAYER;

    fn window_extensions() -> InstanceExtensions {
        InstanceExtensions {
            khr_surface: true,
            khr_xlib_surface: true,
            ..InstanceExtensions::empty()
        }
    }

    #[test]
    fn detects_layer_only_with_debug_utils() {
        let layers = ["VK_LAYER_MESA_device_select", VALIDATION_LAYER];

        assert!(diagnostics_available(layers, VALIDATION_LAYER, true));
        assert!(!diagnostics_available(layers, VALIDATION_LAYER, false));
        assert!(!diagnostics_available(
            ["VK_LAYER_MESA_device_select"],
            VALIDATION_LAYER,
            true
        ));
        assert!(!diagnostics_available([], VALIDATION_LAYER, true));
    }

    #[test]
    fn request_without_layer_is_window_extensions_only() {
        let request = InstanceRequest::new(window_extensions(), None);

        assert!(request.layers.is_empty());
        assert!(!request.diagnostics_enabled());
        assert_eq!(request.extensions, window_extensions());
        assert!(!request.extensions.ext_debug_utils);
    }

    #[test]
    fn request_with_layer_adds_one_layer_and_debug_utils() {
        let request = InstanceRequest::new(window_extensions(), Some(VALIDATION_LAYER));

        assert_eq!(request.layers, vec![VALIDATION_LAYER.to_owned()]);
        assert!(request.diagnostics_enabled());
        assert!(request.extensions.ext_debug_utils);
        assert!(request.extensions.khr_surface);
        assert!(request.extensions.khr_xlib_surface);
    }

    #[test]
    fn messenger_listens_to_every_severity_and_type() {
        let info = messenger_create_info();

        assert!(info.message_severity.error);
        assert!(info.message_severity.warning);
        assert!(info.message_severity.verbose);
        assert!(info.message_type.general);
        assert!(info.message_type.validation);
        assert!(info.message_type.performance);
    }

    #[test]
    fn most_severe_flag_wins() {
        let severity = DebugUtilsMessageSeverity {
            warning: true,
            verbose: true,
            ..DebugUtilsMessageSeverity::empty()
        };
        assert_eq!(MessageLevel::from_severity(&severity), MessageLevel::Warning);

        let severity = DebugUtilsMessageSeverity {
            error: true,
            warning: true,
            ..DebugUtilsMessageSeverity::empty()
        };
        assert_eq!(MessageLevel::from_severity(&severity), MessageLevel::Error);

        assert_eq!(
            MessageLevel::from_severity(&DebugUtilsMessageSeverity::empty()),
            MessageLevel::Verbose
        );
    }

    #[test]
    fn kind_prefers_validation() {
        let ty = DebugUtilsMessageType {
            general: true,
            validation: true,
            ..DebugUtilsMessageType::empty()
        };
        assert_eq!(message_kind(&ty), "VALIDATION");
        assert_eq!(message_kind(&DebugUtilsMessageType::empty()), "UNKNOWN");
    }
}
