//! Command-line and environment configuration

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "campaign-api")]
#[command(about = "Mock-backed API for the campaign dashboard")]
pub struct ApiConfig {
    /// Port to listen on
    #[arg(long, env = "CAMPAIGN_API_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Directory holding the JSON fixtures
    #[arg(long, env = "CAMPAIGN_FIXTURES_DIR", default_value = "fixtures")]
    pub fixtures_dir: PathBuf,

    /// Bearer secret required on every route except /api/health
    #[arg(long, env = "CAMPAIGN_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    /// Allow unauthenticated requests when no secret is set
    #[arg(long, env = "CAMPAIGN_DEV_MODE")]
    pub dev: bool,

    /// How long a loaded fixture stays cached, in seconds
    #[arg(long, env = "CAMPAIGN_CACHE_TTL_SECS", default_value_t = 300)]
    pub cache_ttl_secs: u64,
}
