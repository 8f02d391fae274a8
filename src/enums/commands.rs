use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// List courses from the API
    Courses {
        /// Only the homepage selection
        #[clap(short, long)]
        featured: bool,
    },
    /// Send a message through the contact form
    Contact {
        #[clap(short, long)]
        name: String,
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        message: String,
    },
    /// Enroll in a course
    Enroll {
        #[clap(short, long)]
        name: String,
        #[clap(short, long)]
        email: String,
        #[clap(short, long)]
        phone: String,
        #[clap(short, long)]
        course: String,
    },
    /// Interactive admin panel
    Admin,
    /// Serve the public site locally
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        open: bool,
    },
}
