use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Deployed web-app URL of the spreadsheet API.
    #[serde(default = "ConfigHelper::default_api_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: ConfigHelper::default_api_url(),
        }
    }
}
