use std::io::{Cursor, Write};

use mockmate_copilot_lib::copilot::{
    CopilotSession, DisplaySink, KnowledgeBaseFile, LineRecognizer, Preset, RecognitionEvent,
    RecognitionOptions, RecognitionWindow, ScriptedRecognizer, Suggestion, UnsupportedRecognizer,
    DEFAULT_TOPIC,
};

#[derive(Default)]
struct TopicLog {
    topics: Vec<String>,
    transcripts: Vec<String>,
}

impl DisplaySink for TopicLog {
    fn transcript_changed(&mut self, transcript: &str) {
        self.transcripts.push(transcript.to_string());
    }

    fn suggestion_changed(&mut self, topic: &str, _suggestion: &Suggestion) {
        self.topics.push(topic.to_string());
    }
}

#[test]
fn test_documented_classifications() {
    let classifier = Preset::Interview.classifier();

    assert_eq!(classifier.classify("").topic, DEFAULT_TOPIC);
    assert_eq!(classifier.classify("Tell me about React hooks").topic, "react");
    assert_eq!(classifier.classify("How would you optimize a slow API?").topic, "performance");
    assert_eq!(classifier.classify("graphql backend design").topic, "api");

    let first = classifier.classify("How would you optimize a slow API?");
    let second = classifier.classify("How would you optimize a slow API?");
    assert_eq!(first.topic, second.topic);
    assert_eq!(first.suggestion, second.suggestion);
}

#[test]
fn test_sequence_moves_from_default_to_react_to_api() {
    let mut session = CopilotSession::new(Preset::Interview.classifier(), TopicLog::default());
    assert_eq!(session.active_topic(), DEFAULT_TOPIC);

    session
        .start(Box::new(ScriptedRecognizer::from_windows([
            "I use react",
            "now let's discuss rest apis",
        ])))
        .unwrap();
    session.poll();

    assert_eq!(session.display().topics, vec!["react", "api"]);
    assert_eq!(session.transcript(), "now let's discuss rest apis");
    assert_eq!(session.active_suggestion().title, "REST vs GraphQL");
    assert!(!session.is_listening());
}

#[test]
fn test_late_event_after_end_is_never_applied() {
    let mut session = CopilotSession::headless(Preset::Interview.classifier());
    let recognizer = ScriptedRecognizer::new(vec![
        RecognitionEvent::Started,
        RecognitionEvent::Result(RecognitionWindow::from_text("I use react")),
    ]);
    let feed = recognizer.feed();

    session.start(Box::new(recognizer)).unwrap();
    assert_eq!(session.poll(), 2);
    assert!(session.is_listening());

    session.end();
    assert!(session.is_ended());
    assert!(!session.is_listening());

    // The session detached from the stream, so the stray event has nowhere to go.
    assert!(!feed.push(RecognitionEvent::Result(RecognitionWindow::from_text("graphql"))));
    assert_eq!(session.poll(), 0);
    assert_eq!(session.run_until_ended(), 0);
    assert_eq!(session.active_topic(), "react");
    assert_eq!(session.transcript(), "I use react");
}

#[test]
fn test_unsupported_recognition_keeps_default_state() {
    let mut session = CopilotSession::headless(Preset::Copilot.classifier());

    session.start(Box::new(UnsupportedRecognizer)).unwrap();

    assert!(!session.recognition_supported());
    assert_eq!(session.poll(), 0);
    let view = session.view();
    assert_eq!(view.transcript, "");
    assert_eq!(view.topic, DEFAULT_TOPIC);
    assert_eq!(view.suggestion.title, "General Interview Tip");
}

#[test]
fn test_line_recognizer_drives_session_to_completion() {
    let input = Cursor::new("how would you style this page\nwhat about server rendering\n");
    let mut session = CopilotSession::new(Preset::Copilot.classifier(), TopicLog::default())
        .with_options(RecognitionOptions {
            interim_results: false,
            ..RecognitionOptions::default()
        });

    session.start(Box::new(LineRecognizer::new(input))).unwrap();
    session.run_until_ended();

    assert_eq!(
        session.display().transcripts,
        vec!["how would you style this page", "what about server rendering"]
    );
    assert_eq!(session.display().topics, vec!["css", "next"]);
}

#[test]
fn test_interim_windows_update_transcript_before_final() {
    let input = Cursor::new("make it fast\n");
    let mut session = CopilotSession::new(Preset::Interview.classifier(), TopicLog::default());

    session.start(Box::new(LineRecognizer::new(input))).unwrap();
    session.run_until_ended();

    assert_eq!(
        session.display().transcripts,
        vec!["make", "make it", "make it fast"]
    );
    assert_eq!(session.display().topics, vec!["performance"]);
}

#[test]
fn test_custom_knowledge_base_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "entries": {{
                "sql": {{"title": "Indexes", "points": ["Explain the query plan."], "confidence": 88, "tags": ["SQL", "Database"]}},
                "default": {{"title": "Listening", "points": ["Stay calm."], "confidence": 100, "tags": ["Ready"]}}
            }},
            "rules": [{{"topic": "sql", "keywords": ["postgres", "index"]}}]
        }}"#
    )
    .unwrap();

    let classifier = KnowledgeBaseFile::load(file.path())
        .unwrap()
        .into_classifier()
        .unwrap();
    let mut session = CopilotSession::headless(classifier);

    session.start(Box::new(ScriptedRecognizer::from_windows(["Postgres is slow"]))).unwrap();
    session.run_until_ended();

    assert_eq!(session.active_topic(), "sql");
    let tags: Vec<&str> = session.active_suggestion().tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["SQL", "Database"]);
}
