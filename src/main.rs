use chrono::{Datelike, Local};
use eventosemfoco::agenda::api::AgendaAPI;
use eventosemfoco::config::env_loader::load_config;
use eventosemfoco::tracing::setup_loki;
use eventosemfoco::vitrine::calendar::CalendarIndex;
use eventosemfoco::vitrine::dates::parse_display_date;
use eventosemfoco::vitrine::filter::{distinct_categories, FilterState};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let _loki = setup_loki().await;

    let config = load_config();
    let api = AgendaAPI::new(config.events_url);

    let categories: Vec<&str> = config.categories.iter().map(String::as_str).collect();
    let events = api
        .get_events_for_categories(&categories, config.debug_config.event_limit)
        .await
        .unwrap();

    info!("Loaded {} events", events.len());

    if config.debug_config.log_unparseable {
        events
            .iter()
            .filter(|event| parse_display_date(&event.display_date).is_none())
            .for_each(|event| {
                warn!(
                    "Event '{}' has an unreadable date: '{}'",
                    event.name, event.display_date
                )
            });
    }

    let today = Local::now().date_naive();
    let index = CalendarIndex::build(&events);

    info!("{}", index.month_summary(today.year(), today.month()));
    info!("Categorias: {}", distinct_categories(&events).join(", "));

    let mut filters = FilterState::default();
    filters.select_day(today, &events);

    let upcoming = filters.apply(&events);

    info!("{}", upcoming.summary());

    upcoming.events.iter().for_each(|event| {
        info!(
            "{}: {} ({}, {})",
            event.display_date, event.name, event.mode, event.price
        )
    });
}
