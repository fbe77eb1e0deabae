pub mod event;
pub mod row;
pub mod view;

pub use event::{AppEvent, EventKind, EventType, FieldValue, NewEventInput};
pub use row::{EventRow, NewEventRow};
pub use view::EventDetailView;
