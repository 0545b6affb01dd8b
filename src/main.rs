use tracing_subscriber::EnvFilter;

use vulkan_bootstrap::{AppConfig, Bootstrap};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,vulkan_bootstrap=debug,validation_layer=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::default();

    let mut bootstrap = match Bootstrap::new(config) {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    bootstrap.run();
    let released = bootstrap.shutdown();
    tracing::info!("released {} resource(s)", released.len());
}
