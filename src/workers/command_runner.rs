use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{SchoolError, SchoolResult};
use crate::helpers::terminal_prompt::TerminalPrompt;
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::table_logger::TableLogger;
use crate::logger::toast_logger::ToastLogger;
use crate::services::api_client::ApiClient;
use crate::services::course_manager::CourseManager;
use crate::services::form_controller::FormController;
use crate::structs::config::config::Config;
use crate::structs::forms::contact_form::ContactForm;
use crate::structs::forms::enrollment_form::EnrollmentForm;
use crate::structs::submit_outcome::SubmitOutcome;
use crate::traits::form::Form;
use crate::ui::site_renderer::SiteRenderer;
use crate::ui::site_server::{SiteServer, CONTACT_LABEL, ENROLL_LABEL};
use crate::ui::view_models::SiteView;
use crate::workers::admin_console::AdminConsole;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> SchoolResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Courses { featured } => self.courses_command(featured).await,
            Commands::Contact { name, email, message } => {
                self.submit_command(ContactForm { name, email, message }, CONTACT_LABEL).await
            }
            Commands::Enroll { name, email, phone, course } => {
                self.submit_command(EnrollmentForm { name, email, phone, course }, ENROLL_LABEL).await
            }
            Commands::Admin => self.admin_command().await,
            Commands::Serve { port, open } => self.serve_command(port, open).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SchoolResult<()> {
        log::info!("🚀 Initializing codeschool configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Set api.url to your deployed spreadsheet endpoint.");
                log::info!("🔧 Run 'codeschool validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> SchoolResult<()> {
        log::info!("🔍 Validating codeschool configuration...");
        let config = load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 API endpoint: {}", config.api.url);
                log::info!("🏫 Site: {}", config.site.name);
                Ok(())
            }
            Err(issues) => {
                log::error!("❌ Configuration has {} issue(s):", issues.len());
                for issue in &issues {
                    log::error!("   • {}", issue);
                }
                Err(SchoolError::MultipleErrors {
                    errors: issues
                        .into_iter()
                        .map(|issue| SchoolError::config_error(&issue, None, None))
                        .collect(),
                    context: "configuration validation".to_string(),
                })
            }
        }
    }

    async fn courses_command(&self, featured: bool) -> SchoolResult<()> {
        let config = load_config()?;
        let manager = CourseManager::new(Arc::new(ApiClient::from_config(&config.api)));

        let mut spinner = AnimatedLogger::new("📚 Loading courses");
        spinner.start();
        let courses = if featured { manager.featured().await } else { manager.list().await };

        match courses {
            Ok(courses) => {
                spinner.stop(&format!("Loaded {} course(s)", courses.len())).await;
                TableLogger::print_courses(&courses);
                Ok(())
            }
            Err(e) => {
                spinner.error("Failed to Load Courses").await;
                Err(e)
            }
        }
    }

    async fn submit_command<F: Form>(&self, form: F, label: &str) -> SchoolResult<()> {
        let config = load_config()?;
        let api = Arc::new(ApiClient::from_config(&config.api));
        let mut controller = FormController::new(api, label)
            .with_busy_indicator(Box::new(AnimatedLogger::new(label)));

        let outcome = controller.submit(&form).await;
        ToastLogger::show_outcome(&outcome);

        match outcome {
            SubmitOutcome::Succeeded { .. } => Ok(()),
            SubmitOutcome::Rejected { .. } => Err(SchoolError::validation_error(form.action().as_str(), "form has invalid fields")),
            SubmitOutcome::Failed { message, .. } => Err(SchoolError::request_error(form.action().as_str(), &message)),
            SubmitOutcome::Ignored => Ok(()),
        }
    }

    async fn admin_command(&self) -> SchoolResult<()> {
        let config = load_config()?;
        let api = Arc::new(ApiClient::from_config(&config.api));
        let mut console = AdminConsole::new(api, TerminalPrompt::stdin(), &config.contact.admin_email);
        console.run().await
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> SchoolResult<()> {
        let config = load_config()?;
        let api = Arc::new(ApiClient::from_config(&config.api));
        let renderer = SiteRenderer::new(SiteView::from_config(&config))?;
        let mut server = SiteServer::new(api, renderer);

        let address = server.start(port.unwrap_or(config.server.port)).await?;
        let url = format!("http://{}", address);
        log::info!("🚀 Site available at {}", url);
        log::info!("⏹️ Press Ctrl+C to stop the server");

        if open || config.server.open_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open a browser: {}", e);
            }
        }

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| SchoolError::system_error("ctrl_c", &e.to_string()))?;
        server.shutdown().await
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn load_config() -> SchoolResult<Config> {
    ConfigManager::load().map_err(|e| {
        log::error!("❌ Failed to load configuration: {}", e);
        log::error!("💡 Run 'codeschool init' to create a configuration file.");
        e
    })
}
