use cryptonews_demos::common;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,cryptonews=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let news = common::client().await;

    let latest = news.get_latest(3, None).await?;
    tracing::info!(count = latest.len(), "latest news");

    let sources = news.get_sources().await?;
    tracing::info!(count = sources.len(), "sources");

    Ok(())
}
