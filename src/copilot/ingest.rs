use log::debug;

use super::{KeywordClassifier, RecognitionWindow, SuggestionStore};

/// What one recognition update did to the copilot state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub topic: String,
    pub suggestion_changed: bool,
}

/// Keeps the latest recognition window as the transcript and re-classifies it
/// on every update.
///
/// Each update replaces the transcript; nothing is appended. The upstream
/// recognizer already reports the whole current window, so earlier text is
/// either repeated in it or intentionally dropped.
#[derive(Debug, Clone)]
pub struct TranscriptIngest {
    transcript: String,
    classifier: KeywordClassifier,
    store: SuggestionStore,
}

impl TranscriptIngest {
    pub fn new(classifier: KeywordClassifier) -> Self {
        let store = SuggestionStore::new(classifier.fallback());
        Self {
            transcript: String::new(),
            classifier,
            store,
        }
    }

    pub fn on_recognition_update(&mut self, latest_window_text: &str) -> IngestOutcome {
        self.transcript.clear();
        self.transcript.push_str(latest_window_text);

        let matched = self.classifier.classify(&self.transcript);
        let topic = matched.topic.to_string();
        let suggestion_changed = self.store.set_active(matched);

        if suggestion_changed {
            debug!("Active suggestion -> {} ({:?})", topic, self.transcript);
        }

        IngestOutcome {
            topic,
            suggestion_changed,
        }
    }

    pub fn on_recognition_result(&mut self, window: &RecognitionWindow) -> IngestOutcome {
        self.on_recognition_update(&window.text())
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn store(&self) -> &SuggestionStore {
        &self.store
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }
}
