use clap::{Parser, Subcommand, ValueEnum};

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "postline")]
#[command(version, about = "Paginated blog listing client for hosted content APIs")]
#[command(after_help = "Examples:
  postline list
  postline list --all --format jsonl > posts.jsonl
  postline list --pages 2")]
pub struct Config {
    /// Base URL of the content API repository
    #[arg(long, env = "POSTLINE_API_URL")]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the post listing, following pagination on demand
    #[command(after_help = "Examples:
  postline list                  # First page only
  postline list --pages 2        # First page plus two load-more rounds
  postline list --all            # Keep loading until the cursor runs out")]
    List {
        /// Number of additional pages to load after the first
        #[arg(short, long, default_value = "0", conflicts_with = "all")]
        pages: usize,

        /// Follow the cursor until no more pages are available
        #[arg(short, long)]
        all: bool,

        /// Output format for the listing
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Page size for the first page (subsequent page sizes are decided
        /// by the cursor target)
        #[arg(long, default_value = "20")]
        page_size: u32,
    },
}

/// Supported output formats
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing with localized dates
    Text,
    /// Standard JSON array format
    Json,
    /// JSON Lines format (one post per line)
    Jsonl,
}
