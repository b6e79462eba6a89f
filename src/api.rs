use crate::dharma_collective::api::DharmaCollectiveAPI;
use crate::esalen::api::EsalenAPI;
use crate::events::model::{Event, Venue};
use tracing::info;

const VENUES: [Venue; 2] = [Venue::Esalen, Venue::DharmaCollective];

/// Collects events from every venue in a fixed order and concatenates them.
///
/// No dedup, no sorting: a venue that fails contributes nothing and the
/// rest are kept as-is.
pub async fn collect_upcoming_events() -> Vec<Event> {
    let mut all_events = Vec::new();

    for venue in VENUES {
        let events = fetch_venue(venue).await;
        let name: &'static str = venue.into();

        info!("  {}: {} events", name, events.len());
        all_events.extend(events);
    }

    all_events
}

async fn fetch_venue(venue: Venue) -> Vec<Event> {
    match venue {
        Venue::Esalen => EsalenAPI::get_events().await,
        Venue::DharmaCollective => DharmaCollectiveAPI::get_events().await,
    }
}
