use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use log::{debug, error, info, warn};
use parking_lot::Mutex;

use super::recognizer::{
    EventSender, RecognitionEvent, RecognitionOptions, RecognitionWindow, SpeechRecognizer,
};
use crate::error::{CopilotError, Result};

/// Replays a fixed event sequence on start. Used for tests and demos.
pub struct ScriptedRecognizer {
    script: Vec<RecognitionEvent>,
    feed: ScriptedFeed,
    stopped: bool,
}

/// Handle for pushing extra events into a started [`ScriptedRecognizer`],
/// including after it was stopped.
#[derive(Clone, Default)]
pub struct ScriptedFeed {
    sender: Arc<Mutex<Option<EventSender>>>,
}

impl ScriptedFeed {
    /// Returns `false` when nobody is listening any more.
    pub fn push(&self, event: RecognitionEvent) -> bool {
        match self.sender.lock().as_ref() {
            Some(sender) => sender.send(event).is_ok(),
            None => false,
        }
    }
}

impl ScriptedRecognizer {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            feed: ScriptedFeed::default(),
            stopped: false,
        }
    }

    /// `Started`, one final result per window, then `Ended`.
    pub fn from_windows<I>(windows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut script = vec![RecognitionEvent::Started];
        script.extend(
            windows
                .into_iter()
                .map(|text| RecognitionEvent::Result(RecognitionWindow::from_text(text))),
        );
        script.push(RecognitionEvent::Ended);
        Self::new(script)
    }

    pub fn feed(&self) -> ScriptedFeed {
        self.feed.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn name(&self) -> &str {
        "scripted"
    }

    fn start(&mut self, _options: &RecognitionOptions, events: EventSender) -> Result<()> {
        let mut slot = self.feed.sender.lock();
        if slot.is_some() {
            return Err(CopilotError::RecognizerAlreadyStarted);
        }

        debug!("Replaying {} scripted recognition events", self.script.len());
        for event in self.script.drain(..) {
            if events.send(event).is_err() {
                warn!("Scripted recognizer lost its listener");
                break;
            }
        }

        *slot = Some(events);
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Treats each non-blank line of a reader as one spoken utterance. With
/// interim results enabled, every utterance is first reported word by word.
pub struct LineRecognizer<R> {
    reader: Option<R>,
    stop_signal: Arc<AtomicBool>,
}

impl<R: BufRead + Send + 'static> LineRecognizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    fn run_reader_thread(
        reader: R,
        options: RecognitionOptions,
        events: EventSender,
        stop_signal: Arc<AtomicBool>,
    ) {
        if events.send(RecognitionEvent::Started).is_err() {
            return;
        }

        for line in reader.lines() {
            if stop_signal.load(Ordering::Relaxed) {
                info!("Line recognizer received stop signal");
                break;
            }

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to read utterance: {}", e);
                    break;
                }
            };
            let utterance = line.trim();
            if utterance.is_empty() {
                continue;
            }

            if options.interim_results {
                for partial in interim_prefixes(utterance) {
                    if events
                        .send(RecognitionEvent::Result(RecognitionWindow::interim(partial)))
                        .is_err()
                    {
                        return;
                    }
                }
            }

            if events
                .send(RecognitionEvent::Result(RecognitionWindow::from_text(utterance)))
                .is_err()
            {
                return;
            }

            if !options.continuous {
                debug!("Non-continuous recognition ends after the first utterance");
                break;
            }
        }

        let _ = events.send(RecognitionEvent::Ended);
    }
}

impl<R: BufRead + Send + 'static> SpeechRecognizer for LineRecognizer<R> {
    fn name(&self) -> &str {
        "lines"
    }

    fn start(&mut self, options: &RecognitionOptions, events: EventSender) -> Result<()> {
        let reader = self
            .reader
            .take()
            .ok_or(CopilotError::RecognizerAlreadyStarted)?;

        self.stop_signal.store(false, Ordering::Relaxed);
        let stop_signal = Arc::clone(&self.stop_signal);
        let options = options.clone();

        info!("🎙️ Line recognizer listening ({})", options.language);
        thread::spawn(move || Self::run_reader_thread(reader, options, events, stop_signal));
        Ok(())
    }

    fn stop(&mut self) {
        // A blocked read cannot be interrupted; the thread exits on its next line.
        self.stop_signal.store(true, Ordering::Relaxed);
    }
}

/// Stands in for a runtime without any speech recognition capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self, _options: &RecognitionOptions, _events: EventSender) -> Result<()> {
        Err(CopilotError::RecognitionUnavailable)
    }

    fn stop(&mut self) {}
}

/// Word-by-word prefixes of `utterance`, excluding the full utterance.
fn interim_prefixes(utterance: &str) -> impl Iterator<Item = &str> + '_ {
    let trimmed = utterance.trim_end();
    trimmed
        .char_indices()
        .filter(|&(_, c)| c.is_whitespace())
        .map(move |(end, _)| trimmed[..end].trim_end())
        .filter(|prefix| !prefix.is_empty())
        .scan("", |last, prefix| {
            // consecutive whitespace yields the same prefix twice
            if *last == prefix {
                Some(None)
            } else {
                *last = prefix;
                Some(Some(prefix))
            }
        })
        .flatten()
}
