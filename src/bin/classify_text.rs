use std::env;

use mockmate_copilot_lib::CopilotConfig;

fn main() -> anyhow::Result<()> {
    mockmate_copilot_lib::init_logging();

    let text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        eprintln!("usage: classify_text <utterance...>");
        eprintln!(
            "   classifies the utterance with the configured knowledge base \
             (COPILOT_KNOWLEDGE_BASE)"
        );
        std::process::exit(2);
    }

    let config = CopilotConfig::load()?;
    let classifier = config.build_classifier()?;
    let matched = classifier.classify(&text);

    println!("topic: {}", matched.topic);
    println!("{}", serde_json::to_string_pretty(matched.suggestion.as_ref())?);
    Ok(())
}
