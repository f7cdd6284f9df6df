use serde::{Deserialize, Serialize};

/// Selects `topic` when the lower-cased transcript contains any keyword.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KeywordRule {
    pub topic: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I>(topic: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            topic: topic.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// `normalized` must already be lower-cased, and so must the keywords;
    /// only the classifier's compiled rules satisfy that.
    pub(crate) fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

/// Ordered rule list; earlier rules win when several match.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<KeywordRule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = KeywordRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a KeywordRule;
    type IntoIter = std::slice::Iter<'a, KeywordRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
