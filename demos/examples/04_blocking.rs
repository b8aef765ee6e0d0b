use cryptonews::{DEFAULT_BREAKING_LIMIT, DEFAULT_LIMIT};
use cryptonews_demos::common;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let news = common::blocking_client();

    println!("Breaking");
    for article in news.get_breaking(DEFAULT_BREAKING_LIMIT)? {
        common::print_article(&article);
    }

    println!("\nDeFi");
    for article in news.get_defi(DEFAULT_LIMIT)?.iter().take(3) {
        common::print_article(article);
    }

    println!("\nBitcoin");
    for article in news.get_bitcoin(DEFAULT_LIMIT)?.iter().take(3) {
        common::print_article(article);
    }
    Ok(())
}
