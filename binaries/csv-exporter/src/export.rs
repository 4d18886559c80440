use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use events_dao::EventStore;
use events_models::{CategoryFilter, Event};
use relationships_dao::RelationshipStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::csv::CsvDocument;

pub struct Exporter {
    events: Arc<dyn EventStore>,
    relationships: Arc<dyn RelationshipStore>,
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(
        events: Arc<dyn EventStore>, relationships: Arc<dyn RelationshipStore>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            events,
            relationships,
            output_dir,
        }
    }

    pub async fn export_events(
        &self, filter: &CategoryFilter,
    ) -> Result<usize> {
        info!("Exporting events...");
        let events = self.events.list(filter).await?;

        let mut doc = CsvDocument::with_header(&[
            "id",
            "title",
            "description",
            "category",
            "image",
            "date",
            "time",
            "location",
            "created_at",
        ]);
        for event in events {
            doc.push(&[
                event.id.to_string(),
                event.title,
                event.description,
                event.category,
                event.image.unwrap_or_default(),
                event.date.unwrap_or_default(),
                event.time.unwrap_or_default(),
                event.location.unwrap_or_default(),
                timestamp(event.created_at),
            ]);
        }

        self.write("events.csv", &doc)
    }

    pub async fn export_saved(&self, filter: &CategoryFilter) -> Result<usize> {
        info!("Exporting saved events...");
        let saved = self.relationships.list_saved().await?;
        let ids: Vec<Uuid> = saved.iter().map(|s| s.event_id).collect();
        let events = self.load_events(&ids).await?;

        let mut doc = CsvDocument::with_header(&[
            "id",
            "event_id",
            "event_title",
            "category",
            "saved_at",
        ]);
        for record in saved {
            let Some(event) = matching(&events, record.event_id, filter)
            else {
                continue;
            };
            doc.push(&[
                record.id.to_string(),
                record.event_id.to_string(),
                event.title.clone(),
                event.category.clone(),
                timestamp(record.saved_at),
            ]);
        }

        self.write("saved.csv", &doc)
    }

    pub async fn export_attended(
        &self, filter: &CategoryFilter,
    ) -> Result<usize> {
        info!("Exporting attended events...");
        let attended = self.relationships.list_attended().await?;
        let ids: Vec<Uuid> = attended.iter().map(|a| a.event_id).collect();
        let events = self.load_events(&ids).await?;

        let mut doc = CsvDocument::with_header(&[
            "id",
            "event_id",
            "event_title",
            "category",
            "emoji_rating",
            "attended_at",
        ]);
        for record in attended {
            let Some(event) = matching(&events, record.event_id, filter)
            else {
                continue;
            };
            doc.push(&[
                record.id.to_string(),
                record.event_id.to_string(),
                event.title.clone(),
                event.category.clone(),
                record.emoji_rating.unwrap_or_default(),
                timestamp(record.attended_at),
            ]);
        }

        self.write("attended.csv", &doc)
    }

    async fn load_events(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Event>> {
        let found = self.events.find_by_ids(ids).await?;
        Ok(found.into_iter().map(|e| (e.id, e)).collect())
    }

    fn write(&self, file_name: &str, doc: &CsvDocument) -> Result<usize> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("creating {}", self.output_dir.display())
        })?;
        let path = self.output_dir.join(file_name);
        write_file(&path, doc)?;

        info!("Exported {} rows to: {}", doc.rows(), path.display());
        Ok(doc.rows())
    }
}

fn write_file(path: &Path, doc: &CsvDocument) -> Result<()> {
    std::fs::write(path, doc.as_str())
        .with_context(|| format!("writing {}", path.display()))
}

/// The joined event, when it still exists and passes the filter.
fn matching<'a>(
    events: &'a HashMap<Uuid, Event>, event_id: Uuid, filter: &CategoryFilter,
) -> Option<&'a Event> {
    match events.get(&event_id) {
        Some(event) if filter.matches(&event.category) => Some(event),
        Some(_) => None,
        None => {
            warn!(%event_id, "Skipping relationship of deleted event");
            None
        }
    }
}

fn timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}
