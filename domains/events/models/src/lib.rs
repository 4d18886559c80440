pub mod category;
pub mod events;
pub mod samples;

pub use category::{
    CATEGORY_ALL, CategoryFilter, DEFAULT_CATEGORY, KNOWN_CATEGORIES,
};
pub use events::{Event, NewEvent};
pub use samples::sample_events;
