use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::DEFAULT_CATEGORY;

/// A catalog entry. `id` and `created_at` never change after creation.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct Event {
    #[builder(default = Uuid::now_v7())]
    pub id: Uuid,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default = DEFAULT_CATEGORY.to_string(), setter(into))]
    pub category: String,
    /// Base64 encoded image, stored untouched
    #[builder(default, setter(strip_option, into))]
    pub image: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub date: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub time: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub location: Option<String>,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}

/// Caller supplied fields of an event that does not exist yet
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct NewEvent {
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default = DEFAULT_CATEGORY.to_string(), setter(into))]
    pub category: String,
    #[builder(default, setter(strip_option, into))]
    pub image: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub date: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub time: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub location: Option<String>,
}

impl NewEvent {
    pub fn into_event(self, id: Uuid, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            image: self.image,
            date: self.date,
            time: self.time,
            location: self.location,
            created_at,
        }
    }
}
