use std::time::Duration;

use futures::StreamExt;
use jquants_rs::{CancelToken, JqClient, JqError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = JqClient::new(std::env::var("JQUANTS_ID_TOKEN")?)?;

    // 1. Drive the continuation token by hand.
    let request = client.daily_quotes().date("2023-03-24");
    let mut token: Option<String> = None;
    let mut pages = 0;
    let mut rows = 0;
    loop {
        let page = request.fetch_page(token.as_deref()).await?;
        pages += 1;
        rows += page.records.len();
        match page.pagination_key {
            Some(next) => token = Some(next),
            None => break,
        }
    }
    println!("Manual walk: {rows} bars over {pages} page(s).");

    // 2. Process pages as they arrive, stopping after three.
    let mut stream = Box::pin(client.statements().date("2023-01-30").max_pages(3).pages()?);
    while let Some(page) = stream.next().await {
        let page = page?;
        println!(
            "Streamed {} statement(s); more pages: {}",
            page.records.len(),
            !page.is_last()
        );
    }

    // 3. Abort a long walk from another task.
    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });
    match client
        .listed_info()
        .cancel_on(cancel)
        .fetch()
        .await
    {
        Ok(issues) => println!("Fetched {} issues before the deadline.", issues.len()),
        Err(JqError::Cancelled) => println!("Listing walk cancelled."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
