pub mod site_renderer;
pub mod site_server;
pub mod view_models;
