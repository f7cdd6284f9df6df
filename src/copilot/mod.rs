pub mod suggestion;
pub mod knowledge_base;
pub mod rules;
pub mod classifier;
pub mod presets;
pub mod store;
pub mod recognizer;
pub mod sources;
pub mod ingest;
pub mod session;

pub use suggestion::*;
pub use knowledge_base::*;
pub use rules::*;
pub use classifier::*;
pub use presets::Preset;
pub use store::*;
pub use recognizer::*;
pub use sources::*;
pub use ingest::*;
pub use session::*;
