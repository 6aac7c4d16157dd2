//! Campaign API - CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use campaign_api::ApiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Plain HTTP server: stdout is free for logs, unlike the stdio MCP servers
    let filter = EnvFilter::from_default_env()
        .add_directive("campaign_api=info".parse()?)
        .add_directive("tower_http=info".parse()?);

    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = ApiConfig::parse();
    campaign_api::serve(config).await
}
