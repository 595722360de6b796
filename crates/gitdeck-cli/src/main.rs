use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitdeck_api::GitHubClient;
use gitdeck_core::{issues, Config, ExplorerSession, GitHubBackend, QueryState, SearchBackend};
use gitdeck_tui::{run_explorer, run_issues, ExplorerApp, IssuesApp};

#[derive(Parser)]
#[command(name = "gitdeck")]
#[command(version, about = "Terminal browser for starred GitHub repositories, plus a local issue table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse the most starred repositories interactively
    Explore {
        /// Page to start on (1-34)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Search term, combined with the star filter
        #[arg(long, default_value = "")]
        search: String,

        /// Restore a shared view, e.g. "page=3&search=rust".
        /// Explicit --page/--search win over the restored state.
        #[arg(long)]
        state: Option<String>,
    },
    /// Show the issue table
    Issues {
        /// Path to a JSON issue fixture; defaults to the bundled one
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Run one search and print the results to stdout
    Search {
        /// Search term
        term: String,

        /// Page of results to print
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Explore {
            page,
            search,
            state,
        }) => {
            let mut query = state
                .as_deref()
                .map(QueryState::parse)
                .unwrap_or_default();
            if page != 1 {
                query.page = page;
            }
            if !search.is_empty() {
                query.search = search;
            }

            let session = ExplorerSession::with_state(backend(&config), &query);
            run_explorer(ExplorerApp::new(), session, config.ui.mouse_enabled).await?;
        }
        Some(Commands::Issues { file }) => {
            let issues = match file {
                Some(path) => issues::from_path(&path)?,
                None => issues::load_builtin()?,
            };
            tracing::info!("loaded {} issues", issues.len());
            run_issues(IssuesApp::new(issues), config.ui.mouse_enabled)?;
        }
        Some(Commands::Search { term, page }) => {
            let state = QueryState::new(page, term);
            let mut session = ExplorerSession::with_state(backend(&config), &state);

            let results = session.fetch().await?;
            for repo in &results.items {
                println!(
                    "{:>8} ★  {:<45} {}",
                    repo.stars,
                    repo.full_name(),
                    repo.description.as_deref().unwrap_or("")
                );
            }
            println!(
                "page {} of {} ({} repositories total)",
                session.page(),
                session.page_count(),
                session.total_count()
            );
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn backend(config: &Config) -> Box<dyn SearchBackend> {
    let client = GitHubClient::with_base_url(config.api.api_url.clone());
    Box::new(GitHubBackend::with_client(client))
}
