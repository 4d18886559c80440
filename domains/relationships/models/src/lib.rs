pub mod records;
pub mod state;

pub use records::{AttendedEvent, SavedEvent};
pub use state::{
    AttendOutcome, EventRelationship, RelationshipState, RelationshipStatus,
    SaveOutcome,
};
