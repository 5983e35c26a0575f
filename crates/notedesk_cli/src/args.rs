use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notedesk", bin_name = "notedesk", version)]
#[command(about = "Terminal client for a remote notes API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL (overrides NOTEDESK_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Accept notes with an empty body
    #[arg(long, global = true)]
    pub allow_empty_content: bool,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rolling log files to this absolute directory instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes
    List,
    /// Show one note in the editor pane
    Show { id: String },
    /// Create a note
    New {
        #[arg(long, short)]
        title: String,
        #[arg(long, short, default_value = "")]
        content: String,
    },
    /// Edit a note; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long, short)]
        title: Option<String>,
        #[arg(long, short)]
        content: Option<String>,
    },
    /// Delete a note
    Delete { id: String },
}
