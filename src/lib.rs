use std::io::BufReader;

use log::info;

pub mod copilot;
pub mod display;
pub mod error;
pub mod settings;

pub use error::{CopilotError, Result};
pub use settings::CopilotConfig;

use copilot::{CopilotSession, LineRecognizer};
use display::TerminalDisplay;

/// Initializes `env_logger` at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Runs one copilot session over stdin, one utterance per line, until EOF.
pub fn run() -> anyhow::Result<()> {
    info!("MockMate Copilot starting...");

    let config = CopilotConfig::load()?;
    let classifier = config.build_classifier()?;

    let mut session = CopilotSession::new(classifier, TerminalDisplay::new(std::io::stdout()))
        .with_options(config.recognition_options());

    session.start(Box::new(LineRecognizer::new(BufReader::new(std::io::stdin()))))?;
    if !session.recognition_supported() {
        println!("⚠️  Speech recognition is unavailable; showing default suggestions only.");
    }

    let handled = session.run_until_ended();
    session.end();

    info!(
        "✅ Session {} finished after {} events on topic '{}'",
        session.id(),
        handled,
        session.active_topic()
    );
    Ok(())
}
