use cryptonews::DEFAULT_LIMIT;
use cryptonews_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let news = common::client().await;

    let keywords = "bitcoin,etf";
    let articles = news.search(keywords, DEFAULT_LIMIT).await?;
    println!("{} results for {keywords:?}", articles.len());
    for article in &articles {
        common::print_article(article);
    }
    Ok(())
}
