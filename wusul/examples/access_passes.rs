//! Example of issuing an access pass and walking it through its states
//!
//! Reads WUSUL_ACCOUNT_ID, WUSUL_SHARED_SECRET and WUSUL_TEMPLATE_ID from env.

use wusul::types::{Classification, IssueAccessPassParams, UpdateAccessPassParams};
use wusul::Wusul;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let client = Wusul::from_env()?;
    let template_id = std::env::var("WUSUL_TEMPLATE_ID")?;

    let pass = client
        .access_passes()
        .issue(&IssueAccessPassParams {
            card_template_id: template_id,
            employee_id: Some("123456789".to_string()),
            card_number: Some("42069".to_string()),
            full_name: "Employee name".to_string(),
            email: Some("employee@yourwebsite.com".to_string()),
            phone_number: Some("+19547212241".to_string()),
            classification: Some(Classification::FullTime),
            start_date: "2025-01-01T00:00:00Z".to_string(),
            expiration_date: "2026-01-01T00:00:00Z".to_string(),
            ..Default::default()
        })
        .await?;
    println!("Issued {} ({}), install link: {:?}", pass.id, pass.state, pass.url);

    let pass = client
        .access_passes()
        .update(&UpdateAccessPassParams {
            access_pass_id: pass.id.clone(),
            title: Some("Senior engineer".to_string()),
            ..Default::default()
        })
        .await?;
    println!("Updated {}", pass.id);

    for (action, resp) in [
        ("suspend", client.access_passes().suspend(&pass.id).await?),
        ("resume", client.access_passes().resume(&pass.id).await?),
        ("unlink", client.access_passes().unlink(&pass.id).await?),
        ("delete", client.access_passes().delete(&pass.id).await?),
    ] {
        println!("{action}: success={} {:?}", resp.success, resp.message);
    }

    Ok(())
}
