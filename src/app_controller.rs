use anyhow::{Context, Result};
use log::{info, warn};

use crate::app_config::Config;
use crate::dictionary_service::DictionaryService;
use crate::errors::LookupError;
use crate::providers::wiktionary::WiktionaryClient;
use crate::sentence_aligner::MISSING_TRANSCRIPTION;

/// Application controller
///
/// Wires the configuration to a live upstream client and runs the CLI
/// operations against the lookup service.
pub struct Controller {
    service: DictionaryService<WiktionaryClient>,
    default_language: String,
}

impl Controller {
    /// Create a controller from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let client = WiktionaryClient::with_config(
            config.service.endpoint.clone(),
            config.service.timeout_secs,
            config.service.max_retries,
            config.service.backoff_base_ms,
        );

        Ok(Controller {
            service: DictionaryService::new(client),
            default_language: config.language,
        })
    }

    /// Run a definition lookup and print the result
    pub async fn run_define(&self, word: &str, language: Option<&str>, json: bool) -> Result<()> {
        let language = language.unwrap_or(&self.default_language);
        info!("Looking up '{}' ({})", word, language);

        let response = self.service.get_definition(word, language).await
            .with_context(|| format!("Definition lookup failed for '{}'", word))?;

        if json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.definitions);
            info!("Source: {}", response.source_url);
        }
        Ok(())
    }

    /// Run a pronunciation lookup and print the result
    pub async fn run_pronounce(
        &self,
        phrase: &str,
        language: Option<&str>,
        sentence: bool,
        json: bool,
    ) -> Result<()> {
        let language = language.unwrap_or(&self.default_language);
        info!("Pronunciation for '{}' ({})", phrase, language);

        let response = self.service.get_pronunciation(phrase, language, sentence).await
            .with_context(|| format!("Pronunciation lookup failed for '{}'", phrase))?;

        if !response.pronunciations.is_empty()
            && response.pronunciations.iter().all(|p| p == MISSING_TRANSCRIPTION)
        {
            warn!("No transcription found for any word of '{}'", phrase);
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else if let Some(formatted) = &response.formatted {
            println!("{}", formatted);
            info!("Source: {}", response.source_url);
        } else if response.pronunciations.is_empty() {
            println!("No transcription found");
            info!("Source: {}", response.source_url);
        } else {
            println!("{}", response.pronunciations.join(" "));
            info!("Source: {}", response.source_url);
        }
        Ok(())
    }
}

/// Map a lookup error to a process exit code for the CLI boundary
pub fn exit_code_for(error: &LookupError) -> i32 {
    match error {
        LookupError::UnresolvedLanguage(_) => 2,
        LookupError::NotFound { .. } => 3,
        LookupError::MalformedDocument(_) => 4,
        LookupError::Provider(_) => 5,
    }
}
