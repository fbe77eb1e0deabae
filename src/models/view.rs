use serde::{Deserialize, Serialize};

use super::event::{AppEvent, EventType, FieldValue};

/// Display-only projection of an event for the table view. Never persisted;
/// rebuilt from the current event collection on every render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetailView {
    pub id: i64,
    pub name: String,
    #[serde(rename = "kindLabel")]
    pub kind_label: String,
    #[serde(rename = "dateText")]
    pub date_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Human-readable date text: a Festival joins both formatted range bounds with
/// `" - "`, anything else formats its single optional date.
pub fn event_date_text(event: &AppEvent) -> String {
    match &event.event_type {
        EventType::Festival { date_range } => format!(
            "{} - {}",
            format_date(Some(date_range.0.as_str())),
            format_date(Some(date_range.1.as_str()))
        ),
        _ => format_date(event.date.as_deref()),
    }
}

/// Re-renders a `YYYY-MM-DD` value as `MM/DD/YYYY`, dropping any `T...` time
/// suffix first. Lossy and display-only; never used as a storage format. An
/// absent or empty date renders as an empty string, and a value without three
/// dash-separated parts is passed through with only the time suffix stripped.
pub fn format_date(date_str: Option<&str>) -> String {
    let Some(raw) = date_str else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }
    let mut parts = raw.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day_with_time)) => {
            let day = day_with_time.split('T').next().unwrap_or(day_with_time);
            format!("{}/{}/{}", month, day, year)
        }
        _ => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}

/// Truncates a date to its `YYYY-MM-DD` prefix, for feeding date inputs.
pub fn format_for_input_date(date_str: Option<&str>) -> String {
    match date_str {
        Some(raw) => raw.split('T').next().unwrap_or(raw).to_string(),
        None => String::new(),
    }
}

pub fn build_event_detail_view(event: &AppEvent) -> EventDetailView {
    EventDetailView {
        id: event.id,
        name: event.name.clone(),
        kind_label: event.event_type.kind().to_string(),
        date_text: event_date_text(event),
        venue: event.venue.clone(),
        location: event.location.clone(),
        section: event.section.clone(),
        row: event.row.clone(),
        seat: event.seat.clone(),
        notes: event.notes.clone(),
    }
}

pub fn build_all_event_detail_views(events: &[AppEvent]) -> Vec<EventDetailView> {
    events.iter().map(build_event_detail_view).collect()
}
