use std::fmt;

use chrono::{DateTime, Datelike, Duration, Utc};
use uuid::Uuid;

/// A mail address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub name: String,
    pub email: String,
}

impl Address {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Name when present, bare address otherwise.
    pub fn display(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

/// One displayable message.
///
/// Messages are immutable once constructed; the UI only changes which one
/// is selected, never the records themselves.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub sender: Address,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub labels: Vec<String>,
}

impl Message {
    pub fn new(
        sender: Address,
        subject: impl Into<String>,
        body: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let body = body.into();
        let preview = snippet(&body, 160);
        Self {
            id: Uuid::new_v4(),
            sender,
            subject: subject.into(),
            preview,
            body,
            timestamp,
            read: true,
            labels: Vec::new(),
        }
    }

    pub fn unread(mut self) -> Self {
        self.read = false;
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = preview.into();
        self
    }
}

/// An account shown in the switcher strip. Display only.
#[derive(Debug, Clone)]
pub struct Account {
    pub label: String,
    pub email: String,
    pub icon: char,
}

impl Account {
    pub fn new(label: impl Into<String>, email: impl Into<String>, icon: char) -> Self {
        Self {
            label: label.into(),
            email: email.into(),
            icon,
        }
    }
}

/// Short relative form of a timestamp for list rows.
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let today = now.date_naive();
    let date = timestamp.date_naive();

    if date == today {
        format!("Today {}", timestamp.format("%H:%M"))
    } else if Some(date) == today.pred_opt() {
        format!("Yesterday {}", timestamp.format("%H:%M"))
    } else if now.signed_duration_since(timestamp) < Duration::days(7) {
        timestamp.format("%a %H:%M").to_string()
    } else if date.year() == today.year() {
        timestamp.format("%b %d").to_string()
    } else {
        timestamp.format("%b %d %Y").to_string()
    }
}

/// First characters of a body flattened onto one line.
fn snippet(body: &str, max_chars: usize) -> String {
    let flat: String = body
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let trimmed = flat.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Address {
        Address::new("Ada Park", "ada@example.com")
    }

    #[test]
    fn test_message_defaults_to_read() {
        let msg = Message::new(sender(), "Hello", "Body text", Utc::now());
        assert!(msg.read);
        assert!(msg.labels.is_empty());
    }

    #[test]
    fn test_unread_builder() {
        let msg = Message::new(sender(), "Hello", "Body text", Utc::now()).unread();
        assert!(!msg.read);
    }

    #[test]
    fn test_labels_builder() {
        let msg = Message::new(sender(), "Hello", "Body", Utc::now())
            .with_labels(&["work", "important"]);
        assert_eq!(msg.labels, vec!["work".to_string(), "important".to_string()]);
    }

    #[test]
    fn test_preview_flattens_newlines() {
        let msg = Message::new(sender(), "Hello", "First line\nSecond line", Utc::now());
        assert_eq!(msg.preview, "First line Second line");
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let body = "x".repeat(500);
        let msg = Message::new(sender(), "Hello", body, Utc::now());
        assert!(msg.preview.ends_with("..."));
        assert!(msg.preview.chars().count() <= 163);
    }

    #[test]
    fn test_address_display_prefers_name() {
        assert_eq!(sender().display(), "Ada Park");
        let bare = Address::new("", "ops@example.com");
        assert_eq!(bare.display(), "ops@example.com");
        assert_eq!(sender().to_string(), "Ada Park <ada@example.com>");
    }

    #[test]
    fn test_relative_time_today() {
        let formatted = format_relative_time(Utc::now());
        assert!(formatted.starts_with("Today "));
    }

    #[test]
    fn test_relative_time_old_messages_show_year() {
        let old = Utc::now() - Duration::days(400);
        let formatted = format_relative_time(old);
        assert!(formatted.contains(&old.format("%Y").to_string()));
    }
}
