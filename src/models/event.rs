use serde::{Deserialize, Serialize};

/// Fixed category enumeration. Stored as text in the `kind` column; never
/// serialized directly — JSON travels through `EventType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Concert,
    Festival,
    Sports,
    Theater,
    Conference,
    Wedding,
    Museum,
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Concert => "Concert",
            EventKind::Festival => "Festival",
            EventKind::Sports => "Sports",
            EventKind::Theater => "Theater",
            EventKind::Conference => "Conference",
            EventKind::Wedding => "Wedding",
            EventKind::Museum => "Museum",
            EventKind::Other => "Other",
        }
    }

    /// Parses the stored text. Unknown text maps to `Other` rather than failing
    /// the whole read.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Concert" => EventKind::Concert,
            "Festival" => EventKind::Festival,
            "Sports" => EventKind::Sports,
            "Theater" => EventKind::Theater,
            "Conference" => EventKind::Conference,
            "Wedding" => EventKind::Wedding,
            "Museum" => EventKind::Museum,
            _ => EventKind::Other,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Tagged union keyed by `kind`. Only `Festival` carries a date payload: an
/// ordered (start, end) pair. Every other kind relies on the event's single
/// optional `date`.
///
/// Wire shape matches the original API: `{"kind":"Festival","dateRange":[a,b]}`,
/// `{"kind":"Concert"}` etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EventType {
    Concert,
    Festival {
        #[serde(rename = "dateRange")]
        date_range: (String, String),
    },
    Sports,
    Theater,
    Conference,
    Wedding,
    Museum,
    Other,
}

impl EventType {
    pub fn kind(&self) -> EventKind {
        match self {
            EventType::Concert => EventKind::Concert,
            EventType::Festival { .. } => EventKind::Festival,
            EventType::Sports => EventKind::Sports,
            EventType::Theater => EventKind::Theater,
            EventType::Conference => EventKind::Conference,
            EventType::Wedding => EventKind::Wedding,
            EventType::Museum => EventKind::Museum,
            EventType::Other => EventKind::Other,
        }
    }
}

/// Section/row/seat values may be entered as numbers or free text ("12", "GA",
/// "Lawn"). Untagged so JSON `5` and `"5"` both deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(t) => f.write_str(t),
        }
    }
}

/// The domain entity. Exactly one of {Festival `dateRange`, bare `date`}
/// applies, keyed on `type.kind` — a Festival never carries a bare `date`, and
/// no other kind carries a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppEvent {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
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

/// Request body for create and update: the event without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEventInput {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
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

impl AppEvent {
    /// Rebuilds a full event from an input plus an id. Create and update
    /// return this instead of re-reading the row they just wrote.
    pub fn from_input(id: i64, input: NewEventInput) -> Self {
        AppEvent {
            id,
            name: input.name,
            event_type: input.event_type,
            date: input.date,
            venue: input.venue,
            location: input.location,
            section: input.section,
            row: input.row,
            seat: input.seat,
            notes: input.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn festival_type_serializes_with_date_range() {
        let t = EventType::Festival {
            date_range: ("2024-03-01".to_string(), "2024-03-05".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!({"kind": "Festival", "dateRange": ["2024-03-01", "2024-03-05"]})
        );
    }

    #[test]
    fn plain_type_serializes_as_kind_only() {
        assert_eq!(
            serde_json::to_value(EventType::Concert).unwrap(),
            json!({"kind": "Concert"})
        );
    }

    #[test]
    fn event_json_uses_original_field_names() {
        let event = AppEvent {
            id: 7,
            name: "Open Mic".to_string(),
            event_type: EventType::Other,
            date: Some("2024-07-04".to_string()),
            venue: None,
            location: None,
            section: Some(FieldValue::Number(101)),
            row: Some(FieldValue::Text("AA".to_string())),
            seat: None,
            notes: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], json!({"kind": "Other"}));
        assert_eq!(value["section"], json!(101));
        assert_eq!(value["row"], json!("AA"));
        assert!(value.get("venue").is_none());
    }

    #[test]
    fn field_value_accepts_number_or_text() {
        let n: FieldValue = serde_json::from_value(json!(12)).unwrap();
        let t: FieldValue = serde_json::from_value(json!("GA")).unwrap();
        assert_eq!(n, FieldValue::Number(12));
        assert_eq!(t, FieldValue::Text("GA".to_string()));
    }

    #[test]
    fn from_input_attaches_id_and_keeps_fields() {
        let input = NewEventInput {
            name: "Derby".to_string(),
            event_type: EventType::Sports,
            date: Some("2025-05-03".to_string()),
            venue: Some("Churchill Downs".to_string()),
            location: None,
            section: None,
            row: None,
            seat: Some(FieldValue::Number(4)),
            notes: None,
        };
        let event = AppEvent::from_input(42, input.clone());
        assert_eq!(event.id, 42);
        assert_eq!(event.name, input.name);
        assert_eq!(event.seat, input.seat);
    }

    #[test]
    fn unknown_kind_label_falls_back_to_other() {
        assert_eq!(EventKind::from_label("Rodeo"), EventKind::Other);
        assert_eq!(EventKind::from_label("Festival"), EventKind::Festival);
    }

    #[test]
    fn kind_parses_through_from_str() {
        let kind: EventKind = "Museum".parse().unwrap();
        assert_eq!(kind, EventKind::Museum);
        let fallback: EventKind = "Rodeo".parse().unwrap();
        assert_eq!(fallback, EventKind::Other);
    }
}
