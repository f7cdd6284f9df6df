use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use log::info;
use serde::Deserialize;

use crate::copilot::{KeywordClassifier, KnowledgeBaseFile, Preset, RecognitionOptions};
use crate::error::Result;

const ENV_PREFIX: &str = "COPILOT";

/// Copilot configuration, layered as defaults -> optional file -> `COPILOT_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct CopilotConfig {
    pub knowledge_base: Preset,
    /// JSON knowledge base with its own rules; replaces the preset when set.
    #[serde(default)]
    pub knowledge_base_path: Option<PathBuf>,
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        let options = RecognitionOptions::default();
        Self {
            knowledge_base: Preset::default(),
            knowledge_base_path: None,
            language: options.language,
            continuous: options.continuous,
            interim_results: options.interim_results,
        }
    }
}

impl CopilotConfig {
    /// Loads `.env` if present, then the file named by `COPILOT_CONFIG`, then
    /// the process environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let file = std::env::var(format!("{}_CONFIG", ENV_PREFIX))
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self::load_with(file.as_deref(), None)
    }

    /// `env` replaces the process environment when given.
    pub fn load_with(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("knowledge_base", defaults.knowledge_base.name())?
            .set_default("language", defaults.language)?
            .set_default("continuous", defaults.continuous)?
            .set_default("interim_results", defaults.interim_results)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let config: CopilotConfig = builder.build()?.try_deserialize()?;

        info!(
            "Loaded copilot config: knowledge_base={}, path={:?}, language={}, \
             continuous={}, interim_results={}",
            config.knowledge_base.name(),
            config.knowledge_base_path,
            config.language,
            config.continuous,
            config.interim_results
        );

        Ok(config)
    }

    pub fn recognition_options(&self) -> RecognitionOptions {
        RecognitionOptions {
            language: self.language.clone(),
            continuous: self.continuous,
            interim_results: self.interim_results,
        }
    }

    pub fn build_classifier(&self) -> Result<KeywordClassifier> {
        match &self.knowledge_base_path {
            Some(path) => KnowledgeBaseFile::load(path)?.into_classifier(),
            None => Ok(self.knowledge_base.classifier()),
        }
    }
}
