use anyhow::Result;
use clap::Parser;
use tracing::info;

use sumd_inference::{create_provider, Config};
use sumd_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(name = "sumd", version, about = "HTTP summarization service backed by an LLM completion provider")]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "SUMD_BIND_ADDR", default_value = "0.0.0.0:8000")]
    bind_addr: String,

    /// Upstream API key; when absent the service serves mock summaries
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// Override for the completion API base URL
    #[arg(long, env = "SUMD_BASE_URL")]
    base_url: Option<String>,

    /// Model used when requests do not override it
    #[arg(long, env = "SUMD_MODEL", default_value = sumd_core::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_key: cli.api_key,
        base_url: cli.base_url,
    };
    let provider = create_provider(&config);
    match &provider {
        Some(provider) => info!("using {} completion provider", provider.name()),
        None => info!("no API key configured, serving mock summaries"),
    }

    let app = create_app(AppState {
        provider,
        default_model: cli.model,
    });

    let listener = tokio::net::TcpListener::bind(&cli.bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
