use vulkano::Version;

pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Window and instance settings. Fixed once the bootstrap is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub engine_name: String,
    pub api_version: Version,
    pub validation_layer: String,
}

impl AppConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "test".to_owned(),
            width: 800,
            height: 600,
            engine_name: "no engine".to_owned(),
            api_version: Version::V1_0,
            validation_layer: VALIDATION_LAYER.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_entry_point_literals() {
        let config = AppConfig::default();

        assert_eq!(config.title, "test");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.engine_name, "no engine");
        assert_eq!(config.api_version, Version::V1_0);
        assert_eq!(config.validation_layer, "VK_LAYER_KHRONOS_validation");
    }

    #[test]
    fn setters_only_touch_their_field() {
        let config = AppConfig::default()
            .with_title("demo")
            .with_size(1024, 768);

        assert_eq!(config.title, "demo");
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.engine_name, "no engine");
        assert_eq!(config.validation_layer, VALIDATION_LAYER);
    }
}
