//! Build-time configuration for the API base URL and log level, with an
//! optional runtime override read from `window.STUDYBUDDY_CONFIG` so a static
//! deployment can point at another backend without rebuilding. Values here
//! are public; never put secrets in them.

/// Log level used when neither the build nor the page sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base_url: String,
    /// Level name, number (0-5) or `tracing` filter directives such as
    /// `studybuddy_web=debug,warn`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("STUDYBUDDY_API_BASE_URL")
                .unwrap_or("")
                .to_string(),
            log_level: option_env!("STUDYBUDDY_LOG_LEVEL")
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

/// Page-level global holding runtime overrides.
#[cfg(target_arch = "wasm32")]
const RUNTIME_GLOBAL: &str = "STUDYBUDDY_CONFIG";

/// Overrides found on the page. Blank values count as absent.
#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

impl RuntimeConfig {
    /// Collects overrides through `lookup`, which returns the raw string
    /// stored under a key of the runtime object.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).as_deref().and_then(non_blank);
        Self {
            api_base_url: value("api_base_url"),
            log_level: value("log_level"),
        }
    }
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let overrides = Reflect::get(&window, &JsValue::from_str(RUNTIME_GLOBAL)).ok()?;
    if !overrides.is_object() {
        return None;
    }

    Some(RuntimeConfig::from_lookup(|key| {
        Reflect::get(&overrides, &JsValue::from_str(key))
            .ok()?
            .as_string()
    }))
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
