use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the recipe finder
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the recipe API (search.php, filter.php and lookup.php live under it)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whether result items are enriched with category and source URL
    #[serde(default = "default_true")]
    pub enrich: bool,
    /// Whether the interactive shell runs a query as soon as it starts
    #[serde(default = "default_true")]
    pub fetch_on_start: bool,
    /// Address shown on the contact page
    pub contact_email: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            enrich: true,
            fetch_on_start: true,
            contact_email: None,
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-finder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`FinderConfig::load`] for the layering order.
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
