mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tweetmood")]
#[command(about = "Classify the sentiment of text or of a user's recent posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single piece of text
    Text {
        /// Text to classify
        text: String,
    },
    /// Fetch a user's recent posts and classify each one
    User {
        /// Username, with or without a leading '@'
        username: String,

        /// Number of posts to fetch (defaults to `TWEETMOOD_DEFAULT_COUNT`)
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        count: Option<i64>,

        /// Print results as a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// List the configured content sources in priority order
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tweetmood_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        sources = %config.sources_path.display(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Text { text } => commands::run_text(&config, &text)?,
        Commands::User {
            username,
            count,
            json,
        } => {
            let count = count.unwrap_or_else(|| i64::from(config.default_count));
            commands::run_user(&config, &username, count, json).await?;
        }
        Commands::Sources => commands::run_sources(&config)?,
    }

    Ok(())
}
