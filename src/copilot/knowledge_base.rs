use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};

use super::{KeywordClassifier, RuleTable, Suggestion};
use crate::error::{CopilotError, Result};

/// Topic key every knowledge base must define; the classifier falls back to it.
pub const DEFAULT_TOPIC: &str = "default";

/// Read-only mapping from topic key to suggestion. Built once and shared
/// between sessions behind an `Arc`.
#[derive(Debug)]
pub struct KnowledgeBase {
    entries: IndexMap<String, Arc<Suggestion>>,
    fallback: Arc<Suggestion>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from loaded entries, rejecting tables without a
    /// `default` entry.
    pub fn new(entries: IndexMap<String, Suggestion>) -> Result<Self> {
        let entries: IndexMap<String, Arc<Suggestion>> = entries
            .into_iter()
            .map(|(topic, suggestion)| (topic, Arc::new(suggestion)))
            .collect();

        let fallback = entries
            .get(DEFAULT_TOPIC)
            .cloned()
            .ok_or(CopilotError::MissingDefaultTopic)?;

        Ok(Self { entries, fallback })
    }

    /// Builds a knowledge base whose fallback is given explicitly, so it
    /// cannot be missing.
    pub fn with_fallback<I, K>(fallback: Suggestion, topics: I) -> Self
    where
        I: IntoIterator<Item = (K, Suggestion)>,
        K: Into<String>,
    {
        let mut entries: IndexMap<String, Arc<Suggestion>> = topics
            .into_iter()
            .map(|(topic, suggestion)| (topic.into(), Arc::new(suggestion)))
            .collect();

        let fallback = Arc::new(fallback);
        entries.insert(DEFAULT_TOPIC.to_string(), Arc::clone(&fallback));

        Self { entries, fallback }
    }

    pub fn get(&self, topic: &str) -> Option<&Arc<Suggestion>> {
        self.entries.get(topic)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.contains_key(topic)
    }

    pub fn fallback(&self) -> &Arc<Suggestion> {
        &self.fallback
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk form of a knowledge base together with the rules that select
/// from it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KnowledgeBaseFile {
    pub entries: IndexMap<String, Suggestion>,
    pub rules: RuleTable,
}

impl KnowledgeBaseFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: KnowledgeBaseFile = serde_json::from_str(&contents)?;
        info!(
            "📚 Loaded knowledge base from {} ({} topics, {} rules)",
            path.display(),
            file.entries.len(),
            file.rules.len()
        );
        Ok(file)
    }

    pub fn into_classifier(self) -> Result<KeywordClassifier> {
        let knowledge_base = KnowledgeBase::new(self.entries)?;
        KeywordClassifier::new(Arc::new(knowledge_base), self.rules)
    }
}
