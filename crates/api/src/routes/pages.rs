//! Server-rendered marketing pages.
//!
//! Every page is a list of presentational sections dropped into one shared layout.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const SITE_NAME: &str = "Meridian";

const FAQ: &[(&str, &str)] = &[
    (
        "What is Meridian?",
        "Meridian is a dashboard for tracking crypto and NFT holdings across EVM chains and Solana.",
    ),
    (
        "Do you hold my assets?",
        "No. Meridian only reads public wallet data; your keys never leave your wallet.",
    ),
    (
        "Which wallets are supported?",
        "Any EVM address can be looked up directly. On Solana you can connect Phantom or Solflare.",
    ),
    (
        "Where do prices come from?",
        "Token prices and NFT listings are fetched live from third-party data providers.",
    ),
    (
        "Is the AI assistant financial advice?",
        "No. The assistant answers general questions and should not be treated as investment advice.",
    ),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/faq", get(faq))
        .route("/test", get(test_page))
}

async fn home() -> Html<String> {
    Html(layout(
        "Home",
        &[
            hero_section(),
            features_section(),
            steps_section(),
        ],
    ))
}

async fn faq() -> Html<String> {
    Html(layout("FAQ", &[faq_section()]))
}

async fn test_page() -> Html<String> {
    let section = r#"<section class="test">
  <h1>Test page</h1>
  <ul>
    <li><a href="/api/test">/api/test</a></li>
    <li><a href="/api/anything">/api/anything</a> (fallback)</li>
  </ul>
</section>"#;
    Html(layout("Test", &[section.to_string()]))
}

fn layout(title: &str, sections: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {SITE_NAME}</title>
</head>
<body>
  <header><nav><a href="/">{SITE_NAME}</a> <a href="/faq">FAQ</a></nav></header>
  <main>
{body}
  </main>
  <footer>&copy; {SITE_NAME}</footer>
</body>
</html>"#,
        body = sections.join("\n"),
    )
}

fn hero_section() -> String {
    format!(
        r#"<section class="hero">
  <h1>{SITE_NAME}</h1>
  <p>Track your tokens and NFTs in one place.</p>
  <a class="cta" href="/faq">Learn more</a>
</section>"#
    )
}

fn features_section() -> String {
    let features = [
        ("Multi-chain NFTs", "Browse NFTs held on Ethereum, Polygon, BNB Chain and Solana."),
        ("Live prices", "Follow token prices pulled straight from market data providers."),
        ("AI assistant", "Ask questions about your portfolio and the market."),
    ];
    let items: String = features
        .iter()
        .map(|(title, text)| format!("    <li><h3>{title}</h3><p>{text}</p></li>\n"))
        .collect();
    format!("<section class=\"features\">\n  <ul>\n{items}  </ul>\n</section>")
}

fn steps_section() -> String {
    let steps = ["Connect your wallet", "Review your holdings", "Track what matters"];
    let items: String = steps
        .iter()
        .map(|step| format!("    <li>{step}</li>\n"))
        .collect();
    format!("<section class=\"how-it-works\">\n  <ol>\n{items}  </ol>\n</section>")
}

fn faq_section() -> String {
    let items: String = FAQ
        .iter()
        .map(|(q, a)| format!("    <dt>{q}</dt>\n    <dd>{a}</dd>\n"))
        .collect();
    format!(
        "<section class=\"faq\">\n  <h1>Frequently asked questions</h1>\n  <dl>\n{items}  </dl>\n</section>"
    )
}
