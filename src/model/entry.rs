use chrono::Local;
use serde::{Deserialize, Serialize};

/// Urgency level of an entry, ordered Low < Medium < High.
///
/// Persisted as the integers 0/1/2; any other value is rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn from_index(value: u8) -> Option<Self> {
        match value {
            0 => Some(Priority::Low),
            1 => Some(Priority::Medium),
            2 => Some(Priority::High),
            _ => None,
        }
    }

    /// Cycle forward: Low → Medium → High → Low.
    pub fn advance(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

/// A single task in the list.
///
/// `editing` and `edit_buffer` are per-frame UI state and never reach disk;
/// the wire record is exactly `{completed, desc, date, priority}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub completed: bool,
    #[serde(rename = "desc")]
    pub description: String,
    /// Creation timestamp as display text, captured once and never recomputed.
    pub date: String,
    #[serde(with = "priority_serde")]
    pub priority: Priority,
    #[serde(skip)]
    pub editing: bool,
    #[serde(skip)]
    pub edit_buffer: String,
}

impl Entry {
    /// Create a new entry, stamping it with the current local time.
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        let description = description.into();
        Self {
            completed: false,
            edit_buffer: description.clone(),
            description,
            date: Local::now().format("%d.%m.%Y, %H:%M").to_string(),
            priority,
            editing: false,
        }
    }
}

/// View categories selectable from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFilter {
    #[default]
    All,
    InProgress,
    Completed,
    Low,
    Medium,
    High,
}

impl EntryFilter {
    pub const ALL: [EntryFilter; 6] = [
        EntryFilter::All,
        EntryFilter::InProgress,
        EntryFilter::Completed,
        EntryFilter::Low,
        EntryFilter::Medium,
        EntryFilter::High,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EntryFilter::All => "ALL",
            EntryFilter::InProgress => "IN PROGRESS",
            EntryFilter::Completed => "COMPLETED",
            EntryFilter::Low => "LOW",
            EntryFilter::Medium => "MEDIUM",
            EntryFilter::High => "HIGH",
        }
    }

    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::InProgress => !entry.completed,
            EntryFilter::Completed => entry.completed,
            EntryFilter::Low => entry.priority == Priority::Low,
            EntryFilter::Medium => entry.priority == Priority::Medium,
            EntryFilter::High => entry.priority == Priority::High,
        }
    }
}

/// Serde helper for `Priority`.
mod priority_serde {
    use super::Priority;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(priority: &Priority, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (*priority as u8).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Priority, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Priority::from_index(value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid priority value: {}", value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_cycles_with_period_three() {
        for p in Priority::ALL {
            assert_eq!(p.advance().advance().advance(), p);
        }
        assert_eq!(Priority::Low.advance(), Priority::Medium);
        assert_eq!(Priority::Medium.advance(), Priority::High);
        assert_eq!(Priority::High.advance(), Priority::Low);
    }

    #[test]
    fn priority_ordering_is_low_medium_high() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn new_entry_defaults() {
        let entry = Entry::new("write tests", Priority::Medium);
        assert!(!entry.completed);
        assert!(!entry.editing);
        assert_eq!(entry.edit_buffer, "write tests");
        assert!(!entry.date.is_empty());
    }

    #[test]
    fn wire_record_has_exactly_four_keys() {
        let entry = Entry::new("x", Priority::High);
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["completed", "desc", "date", "priority"] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object["priority"], 2);
    }

    #[test]
    fn deserializes_regardless_of_key_order() {
        let json = r#"{"priority":1,"date":"02.03.2024, 09:15","completed":true,"desc":"rotated keys"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.completed);
        assert_eq!(entry.description, "rotated keys");
        assert_eq!(entry.date, "02.03.2024, 09:15");
        assert_eq!(entry.priority, Priority::Medium);
        assert!(!entry.editing);
    }

    #[test]
    fn rejects_out_of_range_priority() {
        let json = r#"{"completed":false,"desc":"bad","date":"x","priority":3}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn filter_predicates() {
        let mut done = Entry::new("done", Priority::Low);
        done.completed = true;
        let open = Entry::new("open", Priority::High);

        assert!(EntryFilter::All.matches(&done));
        assert!(EntryFilter::All.matches(&open));
        assert!(EntryFilter::Completed.matches(&done));
        assert!(!EntryFilter::Completed.matches(&open));
        assert!(EntryFilter::InProgress.matches(&open));
        assert!(!EntryFilter::InProgress.matches(&done));
        assert!(EntryFilter::Low.matches(&done));
        assert!(EntryFilter::High.matches(&open));
        assert!(!EntryFilter::Medium.matches(&open));
    }
}
