//! Design System MCP - component metadata and code generation over stdio

use std::path::PathBuf;

use clap::Parser;
use design_system_mcp::{DesignSystemConfig, DesignSystemMcpServer};
use rmcp::{transport::stdio, ServiceExt};

#[derive(Debug, Parser)]
#[command(name = "design-system-mcp", version, about)]
struct Args {
    /// Config file (default: ~/.design-system-mcp/config.toml)
    #[arg(long, env = "DESIGN_SYSTEM_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Props JSON file
    #[arg(long)]
    props: Option<PathBuf>,

    /// Directory of MDX component docs
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Package components are imported from
    #[arg(long)]
    package: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("design_system_mcp")?;

    let args = Args::parse();
    let mut config = DesignSystemConfig::load(args.config.as_deref())?;
    if let Some(props) = args.props {
        config.data.props_path = props;
    }
    if let Some(docs) = args.docs {
        config.data.docs_dir = docs;
    }
    if let Some(package) = args.package {
        config.data.package_name = package;
    }

    tracing::info!(
        props = %config.data.props_path.display(),
        docs = %config.data.docs_dir.display(),
        "Starting Design System MCP server"
    );
    if config.llm.api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY not set, generation tools will be unavailable");
    }

    // The index is built on the first tool call
    let server = DesignSystemMcpServer::new(config);

    let service = server.serve(stdio()).await?;

    tracing::info!("Design System MCP server running");

    service.waiting().await?;

    tracing::info!("Design System MCP server stopped");

    Ok(())
}
