use std::sync::Arc;

use mockmate_copilot_lib::copilot::{KeywordClassifier, Preset, DEFAULT_TOPIC};
use proptest::prelude::*;

const PRESETS: [Preset; 2] = [Preset::Interview, Preset::Copilot];

/// `(rule index, keyword)` for every keyword of the preset, in priority order.
fn keywords(classifier: &KeywordClassifier) -> Vec<(usize, String)> {
    classifier
        .rules()
        .enumerate()
        .flat_map(|(index, rule)| rule.keywords.iter().map(move |kw| (index, kw.clone())))
        .collect()
}

/// Arbitrary text around one keyword, with the keyword's letters in random case.
fn keyword_utterance(preset: Preset) -> impl Strategy<Value = (usize, String)> {
    let keywords = keywords(&preset.classifier());
    (
        "\\PC{0,40}",
        prop::sample::select(keywords),
        prop::collection::vec(any::<bool>(), 32),
        "\\PC{0,40}",
    )
        .prop_map(|(prefix, (index, keyword), upper, suffix)| {
            let mixed: String = keyword
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            (index, format!("{}{}{}", prefix, mixed, suffix))
        })
}

fn rule_index(classifier: &KeywordClassifier, topic: &str) -> Option<usize> {
    classifier.rules().position(|rule| rule.topic == topic)
}

proptest! {
    #[test]
    fn classify_returns_the_knowledge_base_entry_for_its_topic(s in "\\PC{0,200}") {
        for preset in PRESETS {
            let classifier = preset.classifier();
            let matched = classifier.classify(&s);
            let entry = classifier.knowledge_base().get(matched.topic);

            prop_assert!(entry.is_some(), "unknown topic {}", matched.topic);
            prop_assert!(Arc::ptr_eq(matched.suggestion, entry.unwrap()));
            if matched.topic == DEFAULT_TOPIC {
                let fallback = classifier.knowledge_base().fallback();
                prop_assert!(Arc::ptr_eq(matched.suggestion, fallback));
            }
        }
    }

    #[test]
    fn classify_is_repeatable(s in "\\PC{0,200}") {
        for preset in PRESETS {
            let classifier = preset.classifier();
            let first = classifier.classify(&s);
            let second = classifier.classify(&s);

            prop_assert_eq!(first.topic, second.topic);
            prop_assert!(Arc::ptr_eq(first.suggestion, second.suggestion));
            let fresh = preset.classifier();
            prop_assert_eq!(first.topic, fresh.classify_topic(&s));
        }
    }

    #[test]
    fn classify_ignores_ascii_case(s in "\\PC{0,200}") {
        for preset in PRESETS {
            let classifier = preset.classifier();
            let topic = classifier.classify_topic(&s);

            prop_assert_eq!(topic, classifier.classify_topic(&s.to_ascii_uppercase()));
            prop_assert_eq!(topic, classifier.classify_topic(&s.to_ascii_lowercase()));
        }
    }

    #[test]
    fn interview_keyword_in_any_case_selects_its_rule_or_an_earlier_one(
        (index, s) in keyword_utterance(Preset::Interview)
    ) {
        let classifier = Preset::Interview.classifier();
        let topic = classifier.classify_topic(&s);

        prop_assert_ne!(topic, DEFAULT_TOPIC);
        prop_assert!(rule_index(&classifier, topic).map_or(false, |matched| matched <= index));
    }

    #[test]
    fn copilot_keyword_in_any_case_selects_its_rule_or_an_earlier_one(
        (index, s) in keyword_utterance(Preset::Copilot)
    ) {
        let classifier = Preset::Copilot.classifier();
        let topic = classifier.classify_topic(&s);

        prop_assert_ne!(topic, DEFAULT_TOPIC);
        prop_assert!(rule_index(&classifier, topic).map_or(false, |matched| matched <= index));
    }
}
