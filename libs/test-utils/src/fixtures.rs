use chrono::{DateTime, Duration, Utc};
use events_models::Event;
use uuid::Uuid;

/// An event in `category` created `minutes_ago` minutes before now
pub fn sample_event(title: &str, category: &str, minutes_ago: i64) -> Event {
    let created_at = Utc::now() - Duration::minutes(minutes_ago);
    sample_event_at(title, category, created_at)
}

pub fn sample_event_at(
    title: &str, category: &str, created_at: DateTime<Utc>,
) -> Event {
    Event::builder()
        .id(Uuid::now_v7())
        .title(title)
        .description(format!("{title} description"))
        .category(category)
        .date("2025-07-20")
        .time("21:00")
        .location("Plaza Mayor")
        .created_at(created_at)
        .build()
}

/// The "Jazz Night" music event used across relationship scenarios
pub fn jazz_night() -> Event {
    Event::builder()
        .title("Noche de Jazz en Vivo")
        .description("Jazz en vivo con copa de bienvenida")
        .category("music")
        .date("2025-07-20")
        .time("21:00")
        .location("Jazz Bar La Cava")
        .build()
}
