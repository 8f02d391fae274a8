use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "ConfigHelper::default_site_name")]
    pub name: String,

    #[serde(default = "ConfigHelper::default_site_tagline")]
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: ConfigHelper::default_site_name(),
            tagline: ConfigHelper::default_site_tagline(),
        }
    }
}
