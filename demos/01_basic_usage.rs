use std::time::Duration;

use jquants_rs::{JqClient, Stock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client from a pre-obtained ID token.
    let token = std::env::var("JQUANTS_ID_TOKEN")?;
    let client = JqClient::builder()
        .id_token(token)
        .timeout(Duration::from_secs(30))
        .build()?;

    // 2. Look up an issue in the listing master.
    let issues = client.listed_info().code("7203").fetch().await?;
    if let Some(issue) = issues.first() {
        println!("--- {} ({}) ---", issue.company_name, issue.code);
        println!("Sector: {}", issue.sector33_code_name);
        println!("Market: {}", issue.market_code_name);
    }
    println!();

    // 3. Daily bars for a date range. Withheld prices come back as `None`.
    let bars = client
        .daily_quotes()
        .code("7203")
        .between("2023-01-04", "2023-01-31")
        .fetch()
        .await?;
    println!("--- Daily bars ({}) ---", bars.len());
    for bar in bars.iter().take(5) {
        match bar.close {
            Some(close) => println!("  {}: close {close:.1}", bar.date),
            None => println!("  {}: no trades", bar.date),
        }
    }
    println!();

    // 4. The same code through the per-security façade.
    let toyota = Stock::new(&client, "7203");
    let statements = toyota.statements().await?;
    if let Some(latest) = statements.last() {
        println!("--- Latest disclosure ---");
        println!("Type: {}", latest.type_of_document);
        println!(
            "Net sales: {}",
            latest
                .net_sales
                .map_or_else(|| "n/a".to_string(), |v| v.to_string())
        );
    }

    // 5. Is today a trading day?
    let today = chrono::Local::now().date_naive();
    let days = client
        .trading_calendar()
        .between(today, today)
        .fetch()
        .await?;
    if let Some(day) = days.first() {
        println!();
        println!("{} is a trading day: {}", day.date, day.is_trading_day());
    }

    Ok(())
}
