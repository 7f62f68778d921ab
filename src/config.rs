use std::path::PathBuf;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Holds `templates.json` and the `json/` deck directory.
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Keep loaded decks in memory. Turn off while authoring decks.
    pub cache_decks: bool,
    pub session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "127.0.0.1:8080".to_string(),
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            cache_decks: true,
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            bind_addr: lookup("DECKVIEW_BIND").unwrap_or(defaults.bind_addr),
            content_dir: lookup("DECKVIEW_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            static_dir: lookup("DECKVIEW_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cache_decks: lookup("DECKVIEW_CACHE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_decks),
            session_key: lookup("SESSION_KEY"),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
