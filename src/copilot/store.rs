use std::sync::Arc;

use super::{Suggestion, TopicMatch};

/// Holds the single suggestion currently shown by the copilot panel.
#[derive(Debug, Clone)]
pub struct SuggestionStore {
    topic: String,
    active: Arc<Suggestion>,
    revision: u64,
}

impl SuggestionStore {
    pub fn new(initial: TopicMatch<'_>) -> Self {
        Self {
            topic: initial.topic.to_string(),
            active: Arc::clone(initial.suggestion),
            revision: 0,
        }
    }

    /// Replaces the active suggestion. Returns `true` when the topic changed;
    /// re-setting the same topic only bumps the revision.
    pub fn set_active(&mut self, matched: TopicMatch<'_>) -> bool {
        self.revision += 1;

        if self.topic == matched.topic {
            return false;
        }

        self.topic.clear();
        self.topic.push_str(matched.topic);
        self.active = Arc::clone(matched.suggestion);
        true
    }

    pub fn get_active(&self) -> &Arc<Suggestion> {
        &self.active
    }

    pub fn active_topic(&self) -> &str {
        &self.topic
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
