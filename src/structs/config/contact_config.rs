use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ContactConfig {
    /// Address the remote API notifies on new enrollments and messages.
    #[serde(default = "ConfigHelper::default_admin_email")]
    pub admin_email: String,

    /// Country code plus number, digits only.
    #[serde(default = "ConfigHelper::default_whatsapp_number")]
    pub whatsapp_number: String,

    #[serde(default = "ConfigHelper::default_whatsapp_message")]
    pub whatsapp_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            admin_email: ConfigHelper::default_admin_email(),
            whatsapp_number: ConfigHelper::default_whatsapp_number(),
            whatsapp_message: ConfigHelper::default_whatsapp_message(),
        }
    }
}
