use crate::config::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_API_URL, DEFAULT_SERVER_PORT, DEFAULT_SITE_NAME,
    DEFAULT_SITE_TAGLINE, DEFAULT_WHATSAPP_MESSAGE, DEFAULT_WHATSAPP_NUMBER,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    pub fn default_admin_email() -> String {
        DEFAULT_ADMIN_EMAIL.to_string()
    }

    pub fn default_whatsapp_number() -> String {
        DEFAULT_WHATSAPP_NUMBER.to_string()
    }

    pub fn default_whatsapp_message() -> String {
        DEFAULT_WHATSAPP_MESSAGE.to_string()
    }

    pub fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    pub fn default_site_tagline() -> String {
        DEFAULT_SITE_TAGLINE.to_string()
    }

    pub fn default_social_link() -> String {
        "#".to_string()
    }

    pub fn default_server_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_open_browser() -> bool {
        false
    }
}
