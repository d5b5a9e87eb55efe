//! Process configuration read from the environment at startup.

use std::env;
use std::path::PathBuf;

use crate::domain::WordList;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Shared credential expected in `x-api-key` on `/api/**`.
    pub api_key: String,
    pub words_file: Option<PathBuf>,
    pub cors_allowed_origins: Vec<String>,
    pub max_json_payload_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let api_key = must_var("QUIZWORDZ_API_KEY")?;

        let words_file = env::var("QUIZWORDZ_WORDS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_json_payload_size = env::var("MAX_JSON_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD_SIZE);

        Ok(Self {
            host,
            port,
            api_key,
            words_file,
            cors_allowed_origins,
            max_json_payload_size,
        })
    }

    /// Load the configured word list, if any.
    pub fn load_word_list(&self) -> Result<Option<WordList>, AppError> {
        let Some(path) = &self.words_file else {
            return Ok(None);
        };
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read word list {}: {e}", path.display()))
        })?;
        let words = WordList::from_text(&text);
        if words.is_empty() {
            return Err(AppError::config(format!(
                "Word list {} contains no valid five-letter words",
                path.display()
            )));
        }
        Ok(Some(words))
    }
}

/// Required, non-blank environment variable.
fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(AppError::config(format!("{name} must not be empty"))),
        Err(_) => Err(AppError::config(format!("{name} must be set"))),
    }
}
