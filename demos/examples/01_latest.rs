use cryptonews_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let news = common::client().await;

    println!("Latest Crypto News\n{}", "=".repeat(50));
    for article in news.get_latest(5, None).await?.iter().take(5) {
        common::print_article(article);
    }
    Ok(())
}
