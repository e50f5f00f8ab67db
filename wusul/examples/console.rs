//! Example of managing card templates, ENTERPRISE accounts only

use wusul::types::{
    CardTemplateDesign, CreateCardTemplateParams, EventLogFilters, EventType, Platform, Protocol,
    ReadEventLogParams, SupportInfo, UseCase,
};
use wusul::Wusul;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let client = Wusul::from_env()?;

    let template = client
        .console()
        .create_template(&CreateCardTemplateParams {
            allow_on_multiple_devices: Some(true),
            watch_count: Some(2),
            iphone_count: Some(3),
            design: Some(CardTemplateDesign {
                background_color: Some("#FFFFFF".to_string()),
                label_color: Some("#000000".to_string()),
                ..Default::default()
            }),
            support_info: Some(SupportInfo {
                support_email: Some("support@yourwebsite.com".to_string()),
                ..Default::default()
            }),
            ..CreateCardTemplateParams::new(
                "Employee NFC key",
                Platform::Apple,
                UseCase::EmployeeBadge,
                Protocol::Desfire,
            )
        })
        .await?;
    println!("Created template {}", template.id);

    let resp = client.console().publish_template(&template.id).await?;
    println!("Published: {}", resp.success);

    let template = client.console().read_template(&template.id).await?;
    println!("{} on {} ({})", template.name, template.platform, template.protocol);

    let events = client
        .console()
        .event_log(&ReadEventLogParams {
            card_template_id: template.id.clone(),
            filters: Some(EventLogFilters {
                event_type: Some(EventType::Install),
                ..Default::default()
            }),
        })
        .await?;
    for event in events {
        println!("{} {} {:?}", event.timestamp, event.event_type, event.device);
    }

    Ok(())
}
