use serde_json::{Value, json};

fn article(title: &str, slug: &str, source: &str, time_ago: &str) -> Value {
    json!({
        "title": title,
        "link": format!("https://news.example.com/{slug}"),
        "description": format!("{title}. Full story at {source}."),
        "pubDate": "2026-10-19T08:00:00.000Z",
        "source": source,
        "timeAgo": time_ago,
    })
}

fn listing(articles: Vec<Value>) -> Value {
    let mut sources: Vec<Value> = Vec::new();
    for a in &articles {
        if !sources.contains(&a["source"]) {
            sources.push(a["source"].clone());
        }
    }
    let total = articles.len();
    json!({
        "articles": articles,
        "totalCount": total,
        "sources": sources,
        "fetchedAt": "2026-10-19T08:15:00.000Z",
    })
}

/// Body of `/api/news`.
#[must_use]
pub fn latest_body() -> Value {
    listing(vec![
        article(
            "Bitcoin reclaims $70K as ETF inflows resume",
            "btc-70k-etf-inflows",
            "CoinDesk",
            "5m ago",
        ),
        article(
            "Ethereum developers set date for next network upgrade",
            "eth-upgrade-date",
            "The Block",
            "18m ago",
        ),
        article(
            "Solana DEX volume tops $4B in a single day",
            "solana-dex-volume",
            "Decrypt",
            "32m ago",
        ),
        article(
            "SEC delays decision on spot Solana ETF",
            "sec-solana-etf-delay",
            "CoinTelegraph",
            "1h ago",
        ),
        article(
            "Miners move record hashrate to renewable sites",
            "miners-renewables",
            "Bitcoin Magazine",
            "2h ago",
        ),
        article(
            "Tokenized treasuries pass $3B in on-chain value",
            "tokenized-treasuries-3b",
            "Blockworks",
            "3h ago",
        ),
    ])
}

/// Body of `/api/search`.
#[must_use]
pub fn search_body() -> Value {
    listing(vec![
        article(
            "Bitcoin reclaims $70K as ETF inflows resume",
            "btc-70k-etf-inflows",
            "CoinDesk",
            "5m ago",
        ),
        article(
            "ETF issuers file amended S-1s ahead of approval",
            "etf-amended-s1",
            "The Block",
            "4h ago",
        ),
    ])
}

/// Body of `/api/defi`.
#[must_use]
pub fn defi_body() -> Value {
    listing(vec![
        article(
            "Aave governance approves new risk parameters",
            "aave-risk-params",
            "The Defiant",
            "25m ago",
        ),
        article(
            "Uniswap v4 hooks see first production deployments",
            "uniswap-v4-hooks",
            "Decrypt",
            "1h ago",
        ),
        article(
            "Lending protocol TVL climbs back above $40B",
            "lending-tvl-40b",
            "The Defiant",
            "2h ago",
        ),
    ])
}

/// Body of `/api/bitcoin`.
#[must_use]
pub fn bitcoin_body() -> Value {
    listing(vec![
        article(
            "Lightning Network capacity hits all-time high",
            "lightning-capacity-ath",
            "Bitcoin Magazine",
            "40m ago",
        ),
        article(
            "Ordinals inscriptions rebound after fee drop",
            "ordinals-rebound",
            "CoinDesk",
            "2h ago",
        ),
    ])
}

/// Body of `/api/breaking`.
#[must_use]
pub fn breaking_body() -> Value {
    listing(vec![article(
        "Exchange halts withdrawals pending security review",
        "exchange-halts-withdrawals",
        "CoinTelegraph",
        "3m ago",
    )])
}
