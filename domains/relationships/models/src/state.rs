use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{AttendedEvent, SavedEvent};

pub const STATE_SAVED: &str = "saved";
pub const STATE_ATTENDED: &str = "attended";

/// State of a stored relationship row. No row at all is the untouched state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationshipState {
    Saved {
        saved_at: DateTime<Utc>,
    },
    Attended {
        emoji_rating: Option<String>,
        attended_at: DateTime<Utc>,
    },
}

impl RelationshipState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saved { .. } => STATE_SAVED,
            Self::Attended { .. } => STATE_ATTENDED,
        }
    }

    /// Rebuilds a state from its column form. Returns `None` when the
    /// columns do not describe a valid state.
    pub fn from_columns(
        state: &str, emoji_rating: Option<String>,
        saved_at: Option<DateTime<Utc>>, attended_at: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        match (state, saved_at, attended_at) {
            (STATE_SAVED, Some(saved_at), None) => {
                Some(Self::Saved { saved_at })
            }
            (STATE_ATTENDED, None, Some(attended_at)) => {
                Some(Self::Attended {
                    emoji_rating,
                    attended_at,
                })
            }
            _ => None,
        }
    }
}

/// The single relationship row kept per event. Saved and attended records
/// are projections of it, so an event can never be both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRelationship {
    pub event_id: Uuid,
    pub record_id: Uuid,
    pub state: RelationshipState,
}

impl EventRelationship {
    /// Save transition. A saved row is left untouched; anything else is
    /// replaced by a fresh saved row carrying `record_id`.
    pub fn save(
        current: Option<&Self>, event_id: Uuid, record_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        match current {
            Some(existing) if existing.is_saved() => existing.clone(),
            _ => {
                Self {
                    event_id,
                    record_id,
                    state: RelationshipState::Saved { saved_at: now },
                }
            }
        }
    }

    /// Attend transition. An attended row keeps its id and `attended_at`
    /// and only takes the new rating; anything else is replaced by a fresh
    /// attended row carrying `record_id`.
    pub fn attend(
        current: Option<&Self>, event_id: Uuid, record_id: Uuid,
        emoji_rating: Option<String>, now: DateTime<Utc>,
    ) -> Self {
        match current {
            Some(Self {
                record_id: kept_id,
                state: RelationshipState::Attended { attended_at, .. },
                ..
            }) => {
                Self {
                    event_id,
                    record_id: *kept_id,
                    state: RelationshipState::Attended {
                        emoji_rating,
                        attended_at: *attended_at,
                    },
                }
            }
            _ => {
                Self {
                    event_id,
                    record_id,
                    state: RelationshipState::Attended {
                        emoji_rating,
                        attended_at: now,
                    },
                }
            }
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self.state, RelationshipState::Saved { .. })
    }

    pub fn is_attended(&self) -> bool {
        matches!(self.state, RelationshipState::Attended { .. })
    }

    pub fn saved(&self) -> Option<SavedEvent> {
        match &self.state {
            RelationshipState::Saved { saved_at } => {
                Some(SavedEvent {
                    id: self.record_id,
                    event_id: self.event_id,
                    saved_at: *saved_at,
                })
            }
            RelationshipState::Attended { .. } => None,
        }
    }

    pub fn attended(&self) -> Option<AttendedEvent> {
        match &self.state {
            RelationshipState::Attended {
                emoji_rating,
                attended_at,
            } => {
                Some(AttendedEvent {
                    id: self.record_id,
                    event_id: self.event_id,
                    emoji_rating: emoji_rating.clone(),
                    attended_at: *attended_at,
                })
            }
            RelationshipState::Saved { .. } => None,
        }
    }
}

/// Result of a save: whether this call created the saved record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SavedEvent),
    AlreadySaved(SavedEvent),
}

impl SaveOutcome {
    /// Classifies the row left behind by a save. A row that carries the
    /// id proposed by this call was written by it.
    pub fn resolve(row: &EventRelationship, proposed_id: Uuid) -> Option<Self> {
        let saved = row.saved()?;
        if saved.id == proposed_id {
            Some(Self::Saved(saved))
        }
        else {
            Some(Self::AlreadySaved(saved))
        }
    }

    pub fn is_new(&self) -> bool { matches!(self, Self::Saved(_)) }

    pub fn saved(&self) -> &SavedEvent {
        match self {
            Self::Saved(saved) | Self::AlreadySaved(saved) => saved,
        }
    }

    pub fn into_saved(self) -> SavedEvent {
        match self {
            Self::Saved(saved) | Self::AlreadySaved(saved) => saved,
        }
    }
}

/// Result of an attend: a new attendance or a rating update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttendOutcome {
    Created(AttendedEvent),
    Updated(AttendedEvent),
}

impl AttendOutcome {
    pub fn resolve(row: &EventRelationship, proposed_id: Uuid) -> Option<Self> {
        let attended = row.attended()?;
        if attended.id == proposed_id {
            Some(Self::Created(attended))
        }
        else {
            Some(Self::Updated(attended))
        }
    }

    pub fn is_new(&self) -> bool { matches!(self, Self::Created(_)) }

    pub fn attended(&self) -> &AttendedEvent {
        match self {
            Self::Created(attended) | Self::Updated(attended) => attended,
        }
    }

    pub fn into_attended(self) -> AttendedEvent {
        match self {
            Self::Created(attended) | Self::Updated(attended) => attended,
        }
    }
}

/// Read-only view of an event's relationship
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum RelationshipStatus {
    #[default]
    None,
    Saved,
    Attended {
        emoji_rating: Option<String>,
    },
}

impl RelationshipStatus {
    pub fn of(row: Option<&EventRelationship>) -> Self {
        match row.map(|r| &r.state) {
            None => Self::None,
            Some(RelationshipState::Saved { .. }) => Self::Saved,
            Some(RelationshipState::Attended { emoji_rating, .. }) => {
                Self::Attended {
                    emoji_rating: emoji_rating.clone(),
                }
            }
        }
    }

    pub fn is_saved(&self) -> bool { matches!(self, Self::Saved) }

    pub fn is_attended(&self) -> bool { matches!(self, Self::Attended { .. }) }

    pub fn emoji_rating(&self) -> Option<&str> {
        match self {
            Self::Attended { emoji_rating } => emoji_rating.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn ids() -> (Uuid, Uuid) { (Uuid::now_v7(), Uuid::now_v7()) }

    #[test]
    fn save_from_none_creates_saved_row() {
        let (event_id, record_id) = ids();
        let now = Utc::now();

        let row = EventRelationship::save(None, event_id, record_id, now);
        let outcome = SaveOutcome::resolve(&row, record_id).unwrap();

        assert!(outcome.is_new());
        assert_eq!(outcome.saved().saved_at, now);
        assert_eq!(
            RelationshipStatus::of(Some(&row)),
            RelationshipStatus::Saved
        );
    }

    #[test]
    fn save_twice_keeps_first_record() {
        let (event_id, first_id) = ids();
        let now = Utc::now();
        let first = EventRelationship::save(None, event_id, first_id, now);

        let second_id = Uuid::now_v7();
        let later = now + Duration::seconds(5);
        let second =
            EventRelationship::save(Some(&first), event_id, second_id, later);
        let outcome = SaveOutcome::resolve(&second, second_id).unwrap();

        assert!(!outcome.is_new());
        assert_eq!(outcome.saved().id, first_id);
        assert_eq!(outcome.saved().saved_at, now);
        assert_eq!(second, first);
    }

    #[test]
    fn attend_on_saved_replaces_saved_row() {
        let (event_id, saved_id) = ids();
        let now = Utc::now();
        let saved = EventRelationship::save(None, event_id, saved_id, now);

        let attend_id = Uuid::now_v7();
        let row = EventRelationship::attend(
            Some(&saved),
            event_id,
            attend_id,
            Some("🎷".to_string()),
            now,
        );
        let outcome = AttendOutcome::resolve(&row, attend_id).unwrap();

        assert!(outcome.is_new());
        assert!(row.saved().is_none());
        assert_eq!(outcome.attended().emoji_rating.as_deref(), Some("🎷"));
    }

    #[test]
    fn reattend_updates_rating_in_place() {
        let (event_id, first_id) = ids();
        let first_at = Utc::now();
        let first = EventRelationship::attend(
            None,
            event_id,
            first_id,
            Some("🎷".to_string()),
            first_at,
        );

        let retry_id = Uuid::now_v7();
        let row = EventRelationship::attend(
            Some(&first),
            event_id,
            retry_id,
            Some("🔥".to_string()),
            first_at + Duration::minutes(10),
        );
        let outcome = AttendOutcome::resolve(&row, retry_id).unwrap();

        assert!(!outcome.is_new());
        let attended = outcome.into_attended();
        assert_eq!(attended.id, first_id);
        assert_eq!(attended.attended_at, first_at);
        assert_eq!(attended.emoji_rating.as_deref(), Some("🔥"));
    }

    #[test]
    fn reattend_without_rating_clears_it() {
        let (event_id, record_id) = ids();
        let now = Utc::now();
        let first = EventRelationship::attend(
            None,
            event_id,
            record_id,
            Some("👍".to_string()),
            now,
        );
        let row = EventRelationship::attend(
            Some(&first),
            event_id,
            Uuid::now_v7(),
            None,
            now,
        );
        assert_eq!(
            RelationshipStatus::of(Some(&row)),
            RelationshipStatus::Attended { emoji_rating: None }
        );
    }

    #[test]
    fn save_on_attended_replaces_with_fresh_saved_row() {
        let (event_id, attend_id) = ids();
        let now = Utc::now();
        let attended =
            EventRelationship::attend(None, event_id, attend_id, None, now);

        let save_id = Uuid::now_v7();
        let row =
            EventRelationship::save(Some(&attended), event_id, save_id, now);

        assert!(row.attended().is_none());
        assert!(SaveOutcome::resolve(&row, save_id).unwrap().is_new());
    }

    #[test]
    fn status_is_never_both_saved_and_attended() {
        let event_id = Uuid::now_v7();
        let now = Utc::now();
        let mut row: Option<EventRelationship> = None;

        for step in 0..12 {
            let next = match step % 4 {
                0 => {
                    Some(EventRelationship::save(
                        row.as_ref(),
                        event_id,
                        Uuid::now_v7(),
                        now,
                    ))
                }
                1 => {
                    Some(EventRelationship::attend(
                        row.as_ref(),
                        event_id,
                        Uuid::now_v7(),
                        Some("⭐".to_string()),
                        now,
                    ))
                }
                2 => row.filter(|r| !r.is_attended()),
                _ => row.filter(|r| !r.is_saved()),
            };
            row = next;

            let status = RelationshipStatus::of(row.as_ref());
            assert!(!(status.is_saved() && status.is_attended()));
        }
    }

    #[test]
    fn from_columns_rejects_mixed_state() {
        let now = Utc::now();
        assert!(
            RelationshipState::from_columns("saved", None, Some(now), None)
                .is_some()
        );
        assert!(
            RelationshipState::from_columns(
                "saved",
                None,
                Some(now),
                Some(now)
            )
            .is_none()
        );
        assert!(
            RelationshipState::from_columns("attended", None, None, None)
                .is_none()
        );
        assert!(
            RelationshipState::from_columns("archived", None, Some(now), None)
                .is_none()
        );
    }
}
