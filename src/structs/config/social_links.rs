use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SocialLinks {
    #[serde(default = "ConfigHelper::default_social_link")]
    pub facebook: String,

    #[serde(default = "ConfigHelper::default_social_link")]
    pub twitter: String,

    #[serde(default = "ConfigHelper::default_social_link")]
    pub instagram: String,

    #[serde(default = "ConfigHelper::default_social_link")]
    pub linkedin: String,

    #[serde(default = "ConfigHelper::default_social_link")]
    pub youtube: String,
}

impl SocialLinks {
    /// Label/URL pairs in footer order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Facebook", self.facebook.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("YouTube", self.youtube.as_str()),
        ]
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: ConfigHelper::default_social_link(),
            twitter: ConfigHelper::default_social_link(),
            instagram: ConfigHelper::default_social_link(),
            linkedin: ConfigHelper::default_social_link(),
            youtube: ConfigHelper::default_social_link(),
        }
    }
}
