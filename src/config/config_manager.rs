use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ResultExt, SchoolError, SchoolResult};
use crate::helpers::validators::validate_email;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_dir() -> PathBuf {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME)).unwrap_or_default()
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn load() -> SchoolResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// Missing file means built-in defaults.
    pub fn load_from(path: &Path) -> SchoolResult<Config> {
        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(path).map_err(|e| SchoolError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn create_sample_config() -> SchoolResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> SchoolResult<()> {
        if path.exists() {
            return Err(SchoolError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_operation("create config directory")?;
        }
        fs::write(path, SAMPLE_CONFIG).with_operation("write sample config")?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.api.url) {
            Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
            Ok(url) => errors.push(format!("API url must use http(s), got scheme '{}'", url.scheme())),
            Err(e) => errors.push(format!("API url '{}' is not a valid URL: {}", config.api.url, e)),
        }

        if !validate_email(&config.contact.admin_email) {
            errors.push(format!("Admin email is invalid: {}", config.contact.admin_email));
        }

        let number = &config.contact.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            errors.push(format!("WhatsApp number must be digits only with country code: '{}'", number));
        }

        if config.site.name.trim().is_empty() {
            errors.push("Site name must not be empty".to_string());
        }

        if config.server.port == 0 {
            errors.push("Server port must be non-zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

const SAMPLE_CONFIG: &str = r##"# Coding school site configuration

[api]
# Spreadsheet web-app deployment URL
url = "https://script.google.com/macros/s/REPLACE_WITH_DEPLOYMENT_ID/exec"

[site]
name = "Kunal's Coding School"
tagline = "Learn to Code, Build Your Future"

[contact]
# Receives enrollment and contact notifications
admin_email = "admin@example.com"
# Country code + number, no '+'
whatsapp_number = "919000000000"
whatsapp_message = "Hi! I am interested in learning more about Kunal's Coding School courses."

[social]
facebook = "#"
twitter = "#"
instagram = "#"
linkedin = "#"
youtube = "#"

[server]
port = 8080
open_browser = false
"##;
