fn main() {
    mockmate_copilot_lib::init_logging();

    println!("\n=== MockMate Copilot ===");
    println!("Type what the interviewer says, one utterance per line (Ctrl-D to finish).\n");

    if let Err(e) = mockmate_copilot_lib::run() {
        eprintln!("Error running copilot: {:#}", e);
        std::process::exit(1);
    }
}
