use events_models::CategoryFilter;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GetEventQuery {
    pub event_id: Uuid,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListEventsQuery {
    pub category: Option<String>,
}

impl ListEventsQuery {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_param(self.category.as_deref())
    }
}
