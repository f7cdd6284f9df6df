use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One ranked hypothesis for a recognized span.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
    pub is_final: bool,
}

impl RecognitionResult {
    pub fn new(transcript: impl Into<String>, is_final: bool) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative {
                transcript: transcript.into(),
                confidence: 1.0,
            }],
            is_final,
        }
    }
}

/// A result event from a continuous recognizer. Results before
/// `result_index` were already reported by earlier events.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecognitionWindow {
    pub result_index: usize,
    pub results: Vec<RecognitionResult>,
}

impl RecognitionWindow {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            result_index: 0,
            results: vec![RecognitionResult::new(text, true)],
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            result_index: 0,
            results: vec![RecognitionResult::new(text, false)],
        }
    }

    /// Concatenates the top alternative of every result from `result_index`
    /// onwards. Results without alternatives contribute nothing.
    pub fn text(&self) -> String {
        self.results
            .iter()
            .skip(self.result_index)
            .filter_map(|result| result.alternatives.first())
            .map(|alternative| alternative.transcript.as_str())
            .collect()
    }

    pub fn is_final(&self) -> bool {
        self.results
            .iter()
            .skip(self.result_index)
            .all(|result| result.is_final)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecognitionEvent {
    Started,
    Result(RecognitionWindow),
    Ended,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub language: String,
    pub continuous: bool,     // keep listening after a pause
    pub interim_results: bool, // report partial windows while speaking
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

pub type EventSender = crossbeam::channel::Sender<RecognitionEvent>;
pub type EventReceiver = crossbeam::channel::Receiver<RecognitionEvent>;

/// A continuous speech-to-text capability. Implementations deliver events in
/// order on `events` until stopped.
pub trait SpeechRecognizer {
    fn name(&self) -> &str;

    /// `false` when the runtime has no speech capability at all.
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&mut self, options: &RecognitionOptions, events: EventSender) -> Result<()>;

    fn stop(&mut self);
}
