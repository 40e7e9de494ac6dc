use std::sync::OnceLock;

/// Id of the element every view is mounted into
pub const DEFAULT_MOUNT_ID: &str = "root";
/// Local storage key holding the serialized [`billed_types::Session`]
pub const DEFAULT_SESSION_KEY: &str = "user";

const DEV_API_BASE: &str = "http://localhost:8080";

/// Runtime settings shared by the router and the browser adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mount_id: String,
    pub session_key: String,
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            api_base: String::new(),
        }
    }
}

impl AppConfig {
    /// Configuration for the page currently loaded in the browser
    pub fn from_location() -> Self {
        Self {
            api_base: api_base().to_string(),
            ..Self::default()
        }
    }
}

/// Pick the API base URL for a page served from `hostname`
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
pub fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE.to_string()
    } else {
        String::new()
    }
}

fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    api_base_for_host(&hostname)
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}
