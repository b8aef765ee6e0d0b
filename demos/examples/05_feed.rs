use cryptonews::{DEFAULT_LIMIT, Endpoint};
use cryptonews_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let news = common::client().await;

    let feed = news
        .feed(&Endpoint::Latest {
            limit: DEFAULT_LIMIT,
            source: None,
        })
        .await?;

    let from = feed
        .sources
        .as_ref()
        .filter(|s| !s.is_empty())
        .map_or_else(|| "various sources".to_string(), |s| s.join(", "));
    println!(
        "Found {} articles from {from}:",
        feed.total_count.unwrap_or(feed.len() as u64)
    );
    for (i, article) in feed.articles.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            article.title().unwrap_or("(untitled)"),
            article.source().unwrap_or("unknown source")
        );
    }
    Ok(())
}
