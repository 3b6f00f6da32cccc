use jquants_rs::{JqClient, JqError};

/// Print a one-line summary, treating plan gates as a skip rather than a failure.
fn report<T>(name: &str, result: Result<Vec<T>, JqError>) -> Result<(), JqError> {
    match result {
        Ok(rows) => println!("{name:<28} {} row(s)", rows.len()),
        Err(e) if e.is_subscription_denied() => println!("{name:<28} skipped (not on this plan)"),
        Err(e) => return Err(e),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JqClient::new(std::env::var("JQUANTS_ID_TOKEN")?)?;
    let date = "2023-03-24";

    report(
        "listed/info",
        client.listed_info().date(date).max_pages(1).fetch().await,
    )?;
    report(
        "prices/prices_am",
        client.prices_am().max_pages(1).fetch().await,
    )?;
    report("indices", client.indices().date(date).fetch().await)?;
    report(
        "markets/breakdown",
        client.breakdown().date(date).max_pages(1).fetch().await,
    )?;
    report(
        "markets/short_selling",
        client.short_selling().date(date).fetch().await,
    )?;
    report(
        "fins/dividend",
        client.dividends().date(date).fetch().await,
    )?;
    report(
        "derivatives/futures",
        client.futures().date(date).max_pages(1).fetch().await,
    )?;
    report(
        "option/index_option",
        client.index_option().date(date).max_pages(1).fetch().await,
    )?;

    Ok(())
}
