use cryptonews::KnownSource;
use cryptonews_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let news = common::client().await;

    for source in news.get_sources().await? {
        println!("- {}", source.name().unwrap_or("(unnamed)"));
    }

    // Filter the latest listing by one outlet.
    let outlet = KnownSource::TheBlock;
    let articles = news.get_latest(3, Some(outlet.slug())).await?;
    println!("\n{} latest from {}", articles.len(), outlet.display_name());
    Ok(())
}
