use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(version, about = "Password-gated outfit and exercise catalog", long_about = None)]
pub struct Args {
    /// Category to show
    #[arg(long)]
    pub category: Option<String>,

    /// Show the dedicated muscle catalog
    #[arg(long)]
    pub muscles: bool,

    /// Muscle group to show, within a muscle category or the muscle catalog
    #[arg(long)]
    pub muscle_group: Option<String>,

    /// List all the categories
    #[arg(long)]
    pub list_categories: bool,

    /// List all the muscle groups
    #[arg(long)]
    pub list_muscle_groups: bool,

    /// Password to unlock the catalog (read from stdin when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the page to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}
