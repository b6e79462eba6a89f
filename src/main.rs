use teaching_events::api::collect_upcoming_events;
use teaching_events::config::env_loader::load_config;
use teaching_events::page::update_page;
use teaching_events::render::render_events;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config();

    info!("Fetching events...");
    let events = collect_upcoming_events().await;

    info!("Total events found: {}", events.len());
    events.iter().for_each(|event| info!("  - {}", event.title));

    let events_html = render_events(&events);
    update_page(&config.page, &events_html)?;

    info!("Done! Don't forget to commit and push changes.");

    Ok(())
}
