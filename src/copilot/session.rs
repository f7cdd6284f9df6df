use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use uuid::Uuid;

use super::recognizer::{EventReceiver, RecognitionEvent, RecognitionOptions, SpeechRecognizer};
use super::{KeywordClassifier, Suggestion, TranscriptIngest};
use crate::error::{CopilotError, Result};

/// Receives copilot state changes for rendering. The sink performs no logic
/// over what it is given.
pub trait DisplaySink {
    fn transcript_changed(&mut self, transcript: &str);

    fn suggestion_changed(&mut self, topic: &str, suggestion: &Suggestion);

    fn listening_changed(&mut self, _is_listening: bool) {}
}

/// Sink for sessions that are only inspected through [`CopilotSession::view`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn transcript_changed(&mut self, _transcript: &str) {}

    fn suggestion_changed(&mut self, _topic: &str, _suggestion: &Suggestion) {}
}

/// Snapshot of everything the copilot panel shows.
#[derive(Serialize, Clone, Debug)]
pub struct CopilotView {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub transcript: String,
    pub is_listening: bool,
    pub recognition_supported: bool,
    pub topic: String,
    pub suggestion: Suggestion,
}

/// One interview session: a recognizer feeding transcript windows into the
/// keyword classifier, with the result pushed to a display.
///
/// Events are consumed on the caller's thread in delivery order. Once
/// [`end`](Self::end) is called, nothing can mutate the session again.
pub struct CopilotSession<D: DisplaySink = NullDisplay> {
    id: Uuid,
    started_at: DateTime<Utc>,
    options: RecognitionOptions,
    ingest: TranscriptIngest,
    display: D,
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    events: Option<EventReceiver>,
    is_listening: bool,
    recognition_supported: bool,
    ended: bool,
}

impl CopilotSession<NullDisplay> {
    pub fn headless(classifier: KeywordClassifier) -> Self {
        Self::new(classifier, NullDisplay)
    }
}

impl<D: DisplaySink> CopilotSession<D> {
    pub fn new(classifier: KeywordClassifier, display: D) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            options: RecognitionOptions::default(),
            ingest: TranscriptIngest::new(classifier),
            display,
            recognizer: None,
            events: None,
            is_listening: false,
            recognition_supported: true,
            ended: false,
        }
    }

    pub fn with_options(mut self, options: RecognitionOptions) -> Self {
        self.options = options;
        self
    }

    /// Starts `recognizer`. A recognizer the runtime does not support leaves
    /// the session in its idle default state; this is not an error.
    pub fn start(&mut self, mut recognizer: Box<dyn SpeechRecognizer>) -> Result<()> {
        if self.is_ended() {
            return Err(CopilotError::SessionEnded);
        }
        if self.recognizer.is_some() {
            return Err(CopilotError::RecognizerAlreadyStarted);
        }

        if !recognizer.is_supported() {
            warn!("⚠️ Speech recognition not supported; copilot stays on default suggestions");
            self.recognition_supported = false;
            return Ok(());
        }

        let (events_tx, events_rx) = crossbeam::channel::unbounded();
        match recognizer.start(&self.options, events_tx) {
            Ok(()) => {}
            Err(CopilotError::RecognitionUnavailable) => {
                warn!("⚠️ Recognizer '{}' unavailable; copilot stays idle", recognizer.name());
                self.recognition_supported = false;
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        info!(
            "🎬 Copilot session {} listening via '{}' ({})",
            self.id,
            recognizer.name(),
            self.options.language
        );
        self.recognition_supported = true;
        self.recognizer = Some(recognizer);
        self.events = Some(events_rx);
        Ok(())
    }

    /// Applies one recognition event. Returns `false` when the event was
    /// discarded because the session has ended.
    pub fn handle_event(&mut self, event: RecognitionEvent) -> bool {
        if self.is_ended() {
            debug!("Discarding recognition event for ended session {}", self.id);
            return false;
        }

        match event {
            RecognitionEvent::Started => self.set_listening(true),
            RecognitionEvent::Ended => self.set_listening(false),
            RecognitionEvent::Result(window) => {
                let outcome = self.ingest.on_recognition_result(&window);
                self.display.transcript_changed(self.ingest.transcript());
                if outcome.suggestion_changed {
                    self.display
                        .suggestion_changed(&outcome.topic, self.ingest.store().get_active());
                }
            }
        }
        true
    }

    /// Applies every event already delivered, without blocking.
    pub fn poll(&mut self) -> usize {
        let Some(events) = self.events.clone() else {
            return 0;
        };

        let mut handled = 0;
        while let Ok(event) = events.try_recv() {
            if !self.handle_event(event) {
                break;
            }
            handled += 1;
        }
        handled
    }

    /// Blocks applying events until the recognizer reports `Ended`, its
    /// channel closes, or the session is ended.
    pub fn run_until_ended(&mut self) -> usize {
        let Some(events) = self.events.clone() else {
            return 0;
        };

        let mut handled = 0;
        while let Ok(event) = events.recv() {
            let ended = event == RecognitionEvent::Ended;
            if !self.handle_event(event) {
                break;
            }
            handled += 1;
            if ended {
                break;
            }
        }
        handled
    }

    /// Stops the recognizer and detaches from its event stream. Idempotent.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        self.events = None;
        if self.is_listening {
            self.is_listening = false;
            self.display.listening_changed(false);
        }

        if let Some(mut recognizer) = self.recognizer.take() {
            recognizer.stop();
            info!(
                "⏹️ Copilot session {} ended on topic '{}'",
                self.id,
                self.ingest.store().active_topic()
            );
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &str {
        self.ingest.transcript()
    }

    pub fn active_topic(&self) -> &str {
        self.ingest.store().active_topic()
    }

    pub fn active_suggestion(&self) -> &Arc<Suggestion> {
        self.ingest.store().get_active()
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn recognition_supported(&self) -> bool {
        self.recognition_supported
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn view(&self) -> CopilotView {
        CopilotView {
            session_id: self.id,
            started_at: self.started_at,
            transcript: self.transcript().to_string(),
            is_listening: self.is_listening,
            recognition_supported: self.recognition_supported,
            topic: self.active_topic().to_string(),
            suggestion: Suggestion::clone(self.active_suggestion()),
        }
    }

    fn set_listening(&mut self, is_listening: bool) {
        if self.is_listening != is_listening {
            self.is_listening = is_listening;
            self.display.listening_changed(is_listening);
        }
    }
}

impl<D: DisplaySink> Drop for CopilotSession<D> {
    fn drop(&mut self) {
        self.end();
    }
}
