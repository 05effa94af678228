use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

const TITLE_MAX_CHARS: usize = 100;

/// Custom validator for event titles
fn validate_title(title: &str) -> Result<(), validator::ValidationError> {
    if title.is_empty() {
        return Err(validator::ValidationError::new("required")
            .with_message("Field title is required".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(validator::ValidationError::new("max_length")
            .with_message("Field title cannot exceed 100 characters".into()));
    }
    Ok(())
}

/// Event entity - a scheduled calendar event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (server-assigned, time-ordered)
    pub id: Uuid,
    /// Event title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the event starts
    pub start_time: DateTime<Utc>,
    /// When the event ends (strictly after start_time)
    pub end_time: DateTime<Utc>,
    /// Creation timestamp (server-set)
    pub created_at: DateTime<Utc>,
}

/// Validated event data, ready for identifier assignment
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new event.
///
/// The time fields are options so a missing field surfaces as a field
/// validation error rather than a body decode failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(required(message = "Field start_time is required"))]
    pub start_time: Option<DateTime<Utc>>,
    #[validate(required(message = "Field end_time is required"))]
    pub end_time: Option<DateTime<Utc>>,
}

impl CreateEventRequest {
    /// Run field validation and return a field-name to message map.
    ///
    /// An empty map means the request is valid. The map is what create
    /// responds with on a 400, without any envelope.
    pub fn validation_errors(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        if let Err(failures) = self.validate() {
            for (field, field_errors) in failures.field_errors() {
                if let Some(first) = field_errors.first() {
                    let message = first
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Field {} is invalid", field));
                    errors.insert(field.to_string(), message);
                }
            }
        }

        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end <= start {
                errors
                    .entry("end_time".to_string())
                    .or_insert_with(|| "Field end_time must be greater than start_time".to_string());
            }
        }

        errors
    }
}

impl Event {
    /// Create a new event from validated input, assigning a time-ordered id
    pub fn new(input: NewEvent) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: input.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> CreateEventRequest {
        let start = Utc::now();
        CreateEventRequest {
            title: "Team standup".to_string(),
            description: Some("Daily sync".to_string()),
            start_time: Some(start),
            end_time: Some(start + Duration::minutes(30)),
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(valid_request().validation_errors().is_empty());
    }

    #[test]
    fn test_empty_title_is_required() {
        let mut request = valid_request();
        request.title = String::new();

        let errors = request.validation_errors();
        assert_eq!(
            errors.get("title").map(String::as_str),
            Some("Field title is required")
        );
    }

    #[test]
    fn test_title_over_100_chars_rejected() {
        let mut request = valid_request();
        request.title = "x".repeat(101);

        let errors = request.validation_errors();
        assert_eq!(
            errors.get("title").map(String::as_str),
            Some("Field title cannot exceed 100 characters")
        );
    }

    #[test]
    fn test_title_at_100_chars_accepted() {
        let mut request = valid_request();
        request.title = "x".repeat(100);

        assert!(request.validation_errors().is_empty());
    }

    #[test]
    fn test_missing_times_reported_per_field() {
        let mut request = valid_request();
        request.start_time = None;
        request.end_time = None;

        let errors = request.validation_errors();
        assert_eq!(
            errors.get("start_time").map(String::as_str),
            Some("Field start_time is required")
        );
        assert_eq!(
            errors.get("end_time").map(String::as_str),
            Some("Field end_time is required")
        );
    }

    #[test]
    fn test_end_time_equal_to_start_time_rejected() {
        let mut request = valid_request();
        request.end_time = request.start_time;

        let errors = request.validation_errors();
        assert_eq!(
            errors.get("end_time").map(String::as_str),
            Some("Field end_time must be greater than start_time")
        );
    }

    #[test]
    fn test_end_time_before_start_time_rejected() {
        let mut request = valid_request();
        request.end_time = request.start_time.map(|t| t - Duration::hours(1));

        let errors = request.validation_errors();
        assert!(errors.contains_key("end_time"));
    }

    #[test]
    fn test_event_new_assigns_time_ordered_id() {
        let now = Utc::now();
        let input = NewEvent {
            title: "Planning".to_string(),
            description: None,
            start_time: now,
            end_time: now + Duration::hours(1),
            created_at: now,
        };

        let first = Event::new(input.clone());
        let second = Event::new(input);

        assert_eq!(first.id.get_version_num(), 7);
        assert!(second.id > first.id, "v7 ids should be ordered by creation");
    }
}
