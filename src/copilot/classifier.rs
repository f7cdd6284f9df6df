use std::sync::Arc;

use log::warn;

use super::{KeywordRule, KnowledgeBase, RuleTable, Suggestion, DEFAULT_TOPIC};
use crate::error::{CopilotError, Result};

/// Result of classifying one transcript: the topic key and its suggestion.
#[derive(Debug, Clone, Copy)]
pub struct TopicMatch<'a> {
    pub topic: &'a str,
    pub suggestion: &'a Arc<Suggestion>,
}

#[derive(Debug)]
struct CompiledRule {
    rule: KeywordRule,
    suggestion: Arc<Suggestion>,
}

/// Maps transcript text to a knowledge base entry by ordered substring
/// matching. Stateless; clones share the same tables.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    knowledge_base: Arc<KnowledgeBase>,
    rules: Arc<[CompiledRule]>,
}

impl KeywordClassifier {
    /// Validates `rules` against `knowledge_base` and lower-cases keywords.
    pub fn new(knowledge_base: Arc<KnowledgeBase>, rules: RuleTable) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules.iter() {
            if rule.topic == DEFAULT_TOPIC {
                return Err(CopilotError::ReservedTopic(rule.topic.clone()));
            }

            let suggestion = knowledge_base
                .get(&rule.topic)
                .cloned()
                .ok_or_else(|| CopilotError::UnknownTopic(rule.topic.clone()))?;

            let keywords: Vec<String> = rule
                .keywords
                .iter()
                .filter(|keyword| !keyword.trim().is_empty())
                .map(|keyword| keyword.to_lowercase())
                .collect();

            if keywords.len() != rule.keywords.len() {
                warn!(
                    "⚠️ Dropped {} blank keyword(s) from rule '{}'",
                    rule.keywords.len() - keywords.len(),
                    rule.topic
                );
            }
            if keywords.is_empty() {
                return Err(CopilotError::EmptyRule(rule.topic.clone()));
            }

            compiled.push(CompiledRule {
                rule: KeywordRule::new(rule.topic.clone(), keywords),
                suggestion,
            });
        }

        Ok(Self {
            knowledge_base,
            rules: compiled.into(),
        })
    }

    /// Returns the suggestion of the first rule whose keywords occur in
    /// `text` (case-insensitive), or the fallback entry.
    pub fn classify(&self, text: &str) -> TopicMatch<'_> {
        let normalized = text.to_lowercase();

        self.rules
            .iter()
            .find(|compiled| compiled.rule.matches(&normalized))
            .map(|compiled| TopicMatch {
                topic: &compiled.rule.topic,
                suggestion: &compiled.suggestion,
            })
            .unwrap_or_else(|| self.fallback())
    }

    pub fn classify_topic(&self, text: &str) -> &str {
        self.classify(text).topic
    }

    pub fn fallback(&self) -> TopicMatch<'_> {
        TopicMatch {
            topic: DEFAULT_TOPIC,
            suggestion: self.knowledge_base.fallback(),
        }
    }

    pub fn knowledge_base(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge_base
    }

    /// Normalized rules in priority order.
    pub fn rules(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }
}
