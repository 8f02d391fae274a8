use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::contact_config::ContactConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::site_config::SiteConfig;
use crate::structs::config::social_links::SocialLinks;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(default)]
    pub server: ServerConfig,
}
