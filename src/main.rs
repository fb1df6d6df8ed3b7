use casting_destiny::cli::Cli;
use casting_destiny::corpus::{BungieSource, CorpusCache};
use casting_destiny::server;
use casting_destiny::service::SearchService;
use clap::Parser;
use std::sync::Arc;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    casting_destiny::tracing::init();

    let cli = Cli::parse();

    let source = Arc::new(BungieSource::new(&cli.base_url, &cli.api_key)?);
    let ttl = Duration::from_secs(cli.cache_ttl_minutes * 60);
    let cache = Arc::new(CorpusCache::with_ttl(source, ttl));
    let service = Arc::new(SearchService::new(cache));

    server::serve(&cli.bind, service).await
}
