use std::sync::Arc;

use vulkano::instance::{Instance, InstanceCreateInfo, InstanceExtensions};
use vulkano::{Version, VulkanLibrary};

use crate::config::AppConfig;
use crate::debug::{self, InstanceRequest};
use crate::error::BootstrapError;

/// Extensions the windowing system needs to present, failing if the
/// platform cannot provide a surface at all.
pub fn required_window_extensions(
    library: &VulkanLibrary,
) -> Result<InstanceExtensions, BootstrapError> {
    let extensions = vulkano_win::required_extensions(library);
    check_window_extensions(&extensions)?;
    Ok(extensions)
}

pub fn check_window_extensions(extensions: &InstanceExtensions) -> Result<(), BootstrapError> {
    if extensions.khr_surface {
        Ok(())
    } else {
        Err(BootstrapError::MissingExtensions(vec!["VK_KHR_surface"]))
    }
}

/// Decides what to request from the loader: the window extensions, plus the
/// validation layer and debug utils when both are installed.
pub fn instance_request(
    library: &VulkanLibrary,
    config: &AppConfig,
) -> Result<InstanceRequest, BootstrapError> {
    let layers = library.layer_properties()?;
    let layer_names: Vec<String> = layers.map(|l| l.name().to_owned()).collect();
    tracing::debug!("available instance layers: {:?}", layer_names);

    let use_validation = debug::diagnostics_available(
        layer_names.iter().map(String::as_str),
        &config.validation_layer,
        library.supported_extensions().ext_debug_utils,
    );
    if !use_validation {
        tracing::info!(
            "{} not available, running without validation",
            config.validation_layer
        );
    }

    let required = required_window_extensions(library)?;
    Ok(InstanceRequest::new(
        required,
        use_validation.then_some(config.validation_layer.as_str()),
    ))
}

pub fn create_info(config: &AppConfig, request: &InstanceRequest) -> InstanceCreateInfo {
    InstanceCreateInfo {
        application_name: Some(config.title.clone()),
        application_version: Version::major_minor(0, 0),
        engine_name: Some(config.engine_name.clone()),
        engine_version: Version::major_minor(0, 0),
        enabled_extensions: request.extensions,
        enabled_layers: request.layers.clone(),
        enumerate_portability: true, // required for MoltenVK on macOS
        max_api_version: Some(config.api_version),
        ..Default::default()
    }
}

pub fn instance_for_window(
    library: Arc<VulkanLibrary>,
    config: &AppConfig,
    request: &InstanceRequest,
) -> Result<Arc<Instance>, BootstrapError> {
    let create_info = create_info(config, request);

    let instance = if request.diagnostics_enabled() {
        //SAFETY: the chained messenger only formats and logs, it never calls
        //back into Vulkan
        unsafe {
            Instance::with_debug_utils_messengers(
                library,
                create_info,
                [debug::messenger_create_info()],
            )
        }?
    } else {
        Instance::new(library, create_info)?
    };

    Ok(instance)
}
