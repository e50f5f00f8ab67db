//! Example of creating a client and checking the API is reachable

use wusul::{Config, Wusul};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let account_id = std::env::var("WUSUL_ACCOUNT_ID")?;
    let shared_secret = std::env::var("WUSUL_SHARED_SECRET")?;

    let client = Wusul::with_config(Config::new(account_id, shared_secret).with_timeout_ms(10_000))?;
    println!("Using {}", client.transport().base_url());

    match client.health().await {
        Ok(value) => println!("API is healthy: {value}"),
        Err(err) => println!("Health check failed ({}): {err}", err.kind()),
    }

    Ok(())
}
