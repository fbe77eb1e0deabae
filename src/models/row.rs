use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::event::{AppEvent, EventKind, EventType, FieldValue, NewEventInput};

/// Flat persisted shape of the `events` table. The union-typed date collapses
/// into three nullable text columns: `kind == Festival` ⇔ `date` NULL and both
/// range bounds set; every other kind keeps the range columns NULL.
///
/// Date columns are deliberately opaque text. Nothing here checks that
/// `start_date <= end_date` or that a value parses as a calendar date;
/// malformed rows pass through unchanged.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub section_value: Option<String>,
    pub row_value: Option<String>,
    pub seat_value: Option<String>,
    pub notes: Option<String>,
}

/// Column values for an insert or full-row update, before the store has
/// assigned (or re-used) an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEventRow {
    pub name: String,
    pub kind: String,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub section_value: Option<String>,
    pub row_value: Option<String>,
    pub seat_value: Option<String>,
    pub notes: Option<String>,
}

impl NewEventRow {
    /// Maps a domain input onto the flat columns. A Festival's range is
    /// destructured into `start_date`/`end_date` and `date` stays NULL; every
    /// other kind writes the single `date` and leaves the range NULL.
    pub fn from_input(input: &NewEventInput) -> Self {
        let (date, start_date, end_date) = match &input.event_type {
            EventType::Festival { date_range } => {
                (None, Some(date_range.0.clone()), Some(date_range.1.clone()))
            }
            _ => (input.date.clone(), None, None),
        };

        NewEventRow {
            name: input.name.clone(),
            kind: input.event_type.kind().as_str().to_string(),
            date,
            start_date,
            end_date,
            venue: input.venue.clone(),
            location: input.location.clone(),
            section_value: input.section.as_ref().map(|v| v.to_string()),
            row_value: input.row.as_ref().map(|v| v.to_string()),
            seat_value: input.seat.as_ref().map(|v| v.to_string()),
            notes: input.notes.clone(),
        }
    }
}

impl From<EventRow> for AppEvent {
    /// Rebuilds the domain event from a row. The `kind` text keys which date
    /// representation to reconstruct; a Festival row missing a range bound
    /// surfaces it as an empty string instead of failing.
    fn from(row: EventRow) -> Self {
        let kind = EventKind::from_label(&row.kind);
        let event_type = match kind {
            EventKind::Festival => EventType::Festival {
                date_range: (
                    row.start_date.unwrap_or_default(),
                    row.end_date.unwrap_or_default(),
                ),
            },
            EventKind::Concert => EventType::Concert,
            EventKind::Sports => EventType::Sports,
            EventKind::Theater => EventType::Theater,
            EventKind::Conference => EventType::Conference,
            EventKind::Wedding => EventType::Wedding,
            EventKind::Museum => EventType::Museum,
            EventKind::Other => EventType::Other,
        };

        AppEvent {
            id: row.id,
            name: row.name,
            event_type,
            date: row.date,
            venue: row.venue,
            location: row.location,
            section: row.section_value.map(FieldValue::Text),
            row: row.row_value.map(FieldValue::Text),
            seat: row.seat_value.map(FieldValue::Text),
            notes: row.notes,
        }
    }
}
