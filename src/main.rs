mod error;
mod event;
mod usgs;

use tracing::{Instrument, info, span, warn};
use tracing_subscriber::EnvFilter;

use event::Event;

/// The main function initializes the tracing subscriber, spawns a single
/// background task that fetches and parses the earthquake data, and presents
/// the resulting event. When the task yields no event the presentation step
/// is simply skipped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let url = usgs::request_url();

    // Perform the network request and the parse step off the main task.
    // The awaited join handle is the only synchronization point: the worker
    // publishes its single result once and never hears back.
    let worker = tokio::spawn(
        fetch_earthquake_event(url).instrument(span!(tracing::Level::INFO, "fetch_event")),
    );

    match worker.await? {
        Some(event) => present(&event),
        None => info!("No earthquake event to present"),
    }

    Ok(())
}

/// Fetches the fixed USGS query and maps the response into an [`Event`].
///
/// Every failure mode (transport error, unsuccessful status, malformed JSON,
/// empty feature list) collapses into `None`; the parse step is never reached
/// after a fetch failure.
async fn fetch_earthquake_event(url: String) -> Option<Event> {
    let body = match usgs::fetch(&url).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Skipping presentation, fetch failed: {}", e);
            return None;
        }
    };

    event::parse_event(&body)
}

/// Renders the three event fields: title, felt count, perceived strength.
fn present(event: &Event) {
    println!("{}", event.title);
    println!("{} people felt it", event.num_of_people);
    println!("Perceived strength: {}", event.perceived_strength);
}
