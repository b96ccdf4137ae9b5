use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use plexdupes::{FailurePolicy, OutputFormat, ScanOptions, TableOptions};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find duplicate movies and episodes on a Plex server",
    long_about = None
)]
pub struct Cli {
    /// Plex server address, `host:port` or a full URL
    #[arg(short, long, env = "PLEX_SERVER", global = true)]
    pub server: Option<String>,

    /// Plex access token (X-Plex-Token)
    #[arg(short, long, env = "PLEX_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds, 0 waits forever
    #[arg(long, env = "PLEX_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find all duplicate videos
    #[command(visible_alias = "dups")]
    Duplicates(DuplicatesArgs),

    /// List library sections
    #[command(visible_alias = "libs")]
    Libraries,
}

#[derive(Args, Debug)]
pub struct DuplicatesArgs {
    /// Report a failing library and continue with the next one
    #[arg(long)]
    pub keep_going: bool,

    /// Only scan this library key (repeatable)
    #[arg(long = "section", value_name = "KEY")]
    pub sections: Vec<String>,

    /// Show each file path
    #[arg(long)]
    pub paths: bool,

    /// Print sizes in KiB/MiB/GiB
    #[arg(long)]
    pub human: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Json,
}

impl DuplicatesArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            policy: if self.keep_going {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
            sections: self.sections.clone(),
            format: match self.format {
                Format::Table => OutputFormat::Table,
                Format::Json => OutputFormat::Json,
            },
            table: TableOptions {
                show_paths: self.paths,
                human_sizes: self.human,
            },
        }
    }
}
