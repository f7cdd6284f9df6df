use std::io::Write;

use log::error;

use crate::copilot::{DisplaySink, Suggestion};

/// Renders the copilot panel as plain text lines.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_suggestion(&mut self, topic: &str, suggestion: &Suggestion) -> std::io::Result<()> {
        let tags: Vec<&str> = suggestion.tags.iter().map(String::as_str).collect();
        writeln!(
            self.out,
            "💡 [{}] {} ({}% match) {}",
            topic,
            suggestion.title,
            suggestion.confidence,
            tags.join(" · ")
        )?;
        if let Some(description) = &suggestion.description {
            writeln!(self.out, "   {}", description)?;
        }
        for point in &suggestion.points {
            writeln!(self.out, "   • {}", point)?;
        }
        self.out.flush()
    }

    fn report(result: std::io::Result<()>) {
        if let Err(e) = result {
            error!("Failed to render copilot output: {}", e);
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn transcript_changed(&mut self, transcript: &str) {
        let result = writeln!(self.out, "🗣️  \"{}\"", transcript)
            .and_then(|_| self.out.flush());
        Self::report(result);
    }

    fn suggestion_changed(&mut self, topic: &str, suggestion: &Suggestion) {
        let result = self.write_suggestion(topic, suggestion);
        Self::report(result);
    }

    fn listening_changed(&mut self, is_listening: bool) {
        let status = if is_listening { "🎙️  listening" } else { "🔇 stopped listening" };
        let result = writeln!(self.out, "{}", status).and_then(|_| self.out.flush());
        Self::report(result);
    }
}
