use anyhow::anyhow;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use postline_cli::{Command, Config, OutputFormat};
use postline_client::{ListingSession, PrismicClient};
use postline_core::{AppError, DateFormatter, ListingQuery, PostSummary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Setup logging (stderr to keep stdout clean for exports)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Parse command line arguments
    let config = Config::parse();

    match config.command {
        Command::List {
            pages,
            all,
            format,
            page_size,
        } => {
            list(&config.api_url, pages, all, format, page_size)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
        }
    }

    Ok(())
}

/// Fetch the listing and print it in the requested format
async fn list(
    api_url: &str,
    pages: usize,
    all: bool,
    format: OutputFormat,
    page_size: u32,
) -> Result<(), AppError> {
    let client = PrismicClient::new(api_url)?;
    let query = ListingQuery::default().with_page_size(page_size);

    info!("Fetching first page from: {}", api_url);
    let mut session = ListingSession::open(client, &query).await?;

    // Strictly sequential load-more rounds, one fetch at a time.
    let mut remaining = if all { usize::MAX } else { pages };
    while remaining > 0 && session.has_more() {
        let appended = session.load_next().await?;
        info!(
            "Loaded {} more posts ({} total)",
            appended,
            session.entries().len()
        );
        remaining -= 1;
    }

    if session.has_more() {
        info!("More posts available; re-run with --all or a higher --pages");
    }

    match format {
        OutputFormat::Text => print_text(session.entries()),
        OutputFormat::Json => print_json(session.entries())?,
        OutputFormat::Jsonl => print_jsonl(session.entries())?,
    }

    Ok(())
}

/// Print posts as a human-readable listing with localized dates
fn print_text(posts: &[PostSummary]) {
    let formatter = DateFormatter::default();

    if posts.is_empty() {
        println!("\nNo posts found.\n");
        return;
    }

    println!();
    for post in posts {
        println!("{}", post.title);
        println!("  {}", post.subtitle);
        println!(
            "  {}  ·  {}",
            formatter.format_publication(post.first_publication_date.as_ref()),
            post.author
        );
        println!();
    }
}

/// Print posts as a JSON array
fn print_json(posts: &[PostSummary]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(posts)?;
    println!("{}", json);
    Ok(())
}

/// Print posts in JSON Lines format (one JSON object per line)
fn print_jsonl(posts: &[PostSummary]) -> Result<(), AppError> {
    for post in posts {
        let json = serde_json::to_string(post)?;
        println!("{}", json);
    }
    Ok(())
}
