use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// One entry of the copilot knowledge base, rendered as-is by the display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points: Vec<String>,
    pub confidence: u8, // editorial percentage, not a match score
    pub tags: IndexSet<String>,
}

impl Suggestion {
    pub fn new<P, T>(title: impl Into<String>, points: P, confidence: u8, tags: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            id: None,
            title: title.into(),
            description: None,
            points: points.into_iter().map(Into::into).collect(),
            confidence,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_keep_insertion_order_and_drop_duplicates() {
        let suggestion = Suggestion::new(
            "REST vs GraphQL",
            ["REST: Standard HTTP methods."],
            92,
            ["Backend", "API", "Backend", "Architecture"],
        );

        let tags: Vec<&str> = suggestion.tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["Backend", "API", "Architecture"]);
    }

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let suggestion = Suggestion::new("General Interview Tip", ["Use STAR."], 85, ["General"]);
        let json = serde_json::to_value(&suggestion).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["confidence"], 85);
        assert_eq!(json["tags"], serde_json::json!(["General"]));
    }
}
