use clap::Parser;

/// Serve the playstyle synergy search API over HTTP.
#[derive(Parser, Debug)]
#[command(name = "casting-destiny")]
#[command(about = "Playstyle-driven item synergy search for Destiny 2 builds", long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,

    /// Bungie.net API key sent as `X-API-Key` on every manifest request.
    #[arg(long, env = "BUNGIE_API_KEY")]
    pub api_key: String,

    /// Base URL of the Bungie.net platform (overridable for testing).
    #[arg(long, default_value = "https://www.bungie.net")]
    pub base_url: String,

    /// Minutes a corpus snapshot stays fresh before a refresh is attempted.
    #[arg(long, default_value = "30")]
    pub cache_ttl_minutes: u64,
}
