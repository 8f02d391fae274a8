pub mod api_config;
pub mod config;
pub mod contact_config;
pub mod server_config;
pub mod site_config;
pub mod social_links;
