use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use storefront::analytics::TracingImpressions;
use storefront::auth::AuthStatus;
use storefront::catalog::Collection;
use storefront::config::{Config, ConfigStore};
use storefront::logging::init_tracing;
use storefront::router::{NavigationIntent, RouteQuery, Router, PAGE_PARAM, RESET_TOKEN_PARAM};
use storefront::ui::credential::FlowMode;
use storefront::ui::grid::{GridSection, SortKey};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Preview storefront section view state", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page of a product grid as JSON.
    Grid {
        /// Collection JSON: {"name": ..., "products": [...]}.
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long, default_value = "relevance")]
        sort: SortKey,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Products per page, overriding the config. 0 disables pagination.
        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, default_value = "/collections/all")]
        path: String,
    },

    /// Decide whether the password form renders for a session.
    Guard {
        /// Reset token from the password reset email; omit for a password change.
        #[arg(long)]
        reset_token: Option<String>,

        #[arg(long, default_value = "authenticated")]
        session: AuthStatus,
    },
}

/// Fixed location for one CLI invocation.
struct CliRouter {
    pathname: String,
    query: RouteQuery,
}

impl Router for CliRouter {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn query(&self) -> &RouteQuery {
        &self.query
    }

    fn push(&mut self, intent: NavigationIntent) {
        tracing::info!(?intent, "navigation requested");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(config_path).context("Failed to load configuration")?;
    let config = store.get();

    match cli.command {
        Commands::Grid {
            catalog,
            sort,
            page,
            page_size,
            path,
        } => {
            let raw = fs::read_to_string(&catalog)
                .with_context(|| format!("Failed to read catalog '{}'", catalog.display()))?;
            let collection: Collection = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse catalog '{}'", catalog.display()))?;

            let mut grid_config = config.grid.clone();
            if page_size.is_some() {
                grid_config.products_per_page = page_size;
            }

            let router = CliRouter {
                pathname: path,
                query: RouteQuery::new().with(PAGE_PARAM, page.to_string()),
            };
            let mut section = GridSection::new(&grid_config, Arc::new(TracingImpressions));
            section.select_sort(sort);
            let render = section.render(&Arc::new(collection), &router);

            println!("{}", serde_json::to_string_pretty(&render)?);
        }

        Commands::Guard {
            reset_token,
            session,
        } => {
            let mut query = RouteQuery::new();
            if let Some(token) = reset_token {
                query.append(RESET_TOKEN_PARAM, token);
            }
            let mode = FlowMode::from_query(&query);
            let guard = mode.guard(&config.routes);
            let output = json!({
                "heading": mode.heading(),
                "allowed_auth_status": guard.allowed_auth_status,
                "result": guard.evaluate(session),
            });

            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
