use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use nf_client::{render_page, HttpGateway, NewsController};
use nf_core::{CATEGORIES, DEFAULT_CATEGORY};
use nf_proxy::{create_app, AppState, ProxyConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the news proxy endpoint
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        listen: String,
    },
    /// Fetch one page of headlines through the proxy and render it
    Fetch {
        /// Category to fetch
        #[arg(default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Proxy endpoint to fetch through
        #[arg(long, default_value = "http://127.0.0.1:3000/api/news")]
        proxy: String,
        /// Write the rendered page to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the known categories
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => {
            let config = ProxyConfig::from_env()?;
            let app = create_app(AppState::new(config));
            let listener = TcpListener::bind(&listen)
                .await
                .with_context(|| format!("failed to bind {}", listen))?;
            info!("📰 Proxy listening on {}", listen);
            axum::serve(listener, app).await?;
        }
        Commands::Fetch {
            category,
            proxy,
            out,
        } => {
            let gateway = Arc::new(HttpGateway::new(proxy));
            let mut controller = NewsController::new(gateway);
            controller.select_category(&category).await;

            let page = render_page(&controller);
            match out {
                Some(path) => {
                    std::fs::write(&path, page)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("📰 Wrote {}", path.display());
                }
                None => println!("{}", page),
            }
        }
        Commands::Categories => {
            for category in CATEGORIES {
                println!("{} - {}", category.key, category.label);
            }
        }
    }

    Ok(())
}
