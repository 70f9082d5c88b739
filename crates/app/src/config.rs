use input_core::{AppConfig, InputConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Config file used when `ICON_INPUT_CONFIG` is not set.
const CONFIG_PATH: &str = "config.toml";

fn config_path() -> String {
    std::env::var("ICON_INPUT_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string())
}

/// Read the config file once and keep it for the process lifetime. Safe to
/// call repeatedly; only the first call reads the file.
///
/// A missing or unparseable file leaves every widget on its built-in
/// defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let path = config_path();
        match AppConfig::read(&path) {
            Ok(config) => {
                tracing::info!(%path, style = %config.input.style.inline_style(), "loaded widget config");
                config
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "using default widget config");
                AppConfig::default()
            }
        }
    })
}

/// Widget defaults. Falls back to built-ins if `load_config()` never ran.
pub fn input_config() -> InputConfig {
    CONFIG
        .get()
        .map(|c| c.input.clone())
        .unwrap_or_default()
}
