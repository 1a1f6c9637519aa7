pub mod escape;
pub mod services;
pub mod store;

use serde::{Deserialize, Serialize};

// --- Types ---

/// A user-added project card. Field names match the persisted JSON payload
/// (`name`/`url`/`img`/`desc`), so stored lists from earlier versions of the
/// site load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub url: String,
    pub img: String,
    pub desc: String,
}

impl ProjectRecord {
    /// Build a record from raw form input. Every field is trimmed; returns
    /// `None` if any field is empty after trimming. This is the only
    /// validation gate, so a `Some` record is always safe to persist.
    pub fn from_input(name: &str, url: &str, img: &str, desc: &str) -> Option<Self> {
        let name = name.trim();
        let url = url.trim();
        let img = img.trim();
        let desc = desc.trim();
        if name.is_empty() || url.is_empty() || img.is_empty() || desc.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            url: url.to_string(),
            img: img.to_string(),
            desc: desc.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_trims_fields() {
        let rec = ProjectRecord::from_input("  Foo ", "http://x ", " http://y.png", " Bar ")
            .expect("all fields present");
        assert_eq!(rec.name, "Foo");
        assert_eq!(rec.url, "http://x");
        assert_eq!(rec.img, "http://y.png");
        assert_eq!(rec.desc, "Bar");
    }

    #[test]
    fn from_input_rejects_any_blank_field() {
        assert!(ProjectRecord::from_input("", "u", "i", "d").is_none());
        assert!(ProjectRecord::from_input("n", "   ", "i", "d").is_none());
        assert!(ProjectRecord::from_input("n", "u", "\t", "d").is_none());
        assert!(ProjectRecord::from_input("n", "u", "i", "").is_none());
    }

    #[test]
    fn record_json_round_trip() {
        let rec = ProjectRecord {
            name: "Foo".into(),
            url: "http://x".into(),
            img: "http://y.png".into(),
            desc: "Bar".into(),
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"name\":\"Foo\""));
        assert!(json.contains("\"desc\":\"Bar\""));
        let back: ProjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }
}
