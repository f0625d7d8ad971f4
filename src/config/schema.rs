use serde::Deserialize;

/// Default API base address when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// The TOML file structure for agenthub.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api: Option<ApiSection>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

impl ConfigFile {
    pub fn to_partial(self) -> PartialConfig {
        PartialConfig {
            api_base_url: self.api.and_then(|a| a.base_url),
        }
    }
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub api_base_url: Option<String>,
}
