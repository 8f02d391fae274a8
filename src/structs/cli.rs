use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "codeschool")]
#[clap(about = "Courses, enrollments and admin tools for the coding school site", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
