use finchat_common::{ChatConfig, NumberFormat, PaletteChoice};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Query endpoint and chart presentation
    pub chat: ChatConfig,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Settings baked in at build time, before any browser overrides.
    pub fn from_build_env() -> Self {
        let mut settings = Self::default();

        if let Some(url) = option_env!("FINCHAT_BACKEND_URL") {
            settings.chat.backend_url = url.to_string();
        }
        if let Some(palette) = option_env!("FINCHAT_PALETTE").and_then(PaletteChoice::parse) {
            settings.chat.palette = palette;
        }
        if let Some(format) = option_env!("FINCHAT_NUMBER_FORMAT").and_then(NumberFormat::parse) {
            settings.chat.number_format = format;
        }

        settings
    }

    /// Create settings from build env, window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::from_build_env();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Try to read from localStorage for custom settings
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(backend_url)) = storage.get_item("finchat_backend_url") {
                settings.chat.backend_url = backend_url;
            }

            if let Ok(Some(palette)) = storage.get_item("finchat_palette") {
                if let Some(palette) = PaletteChoice::parse(&palette) {
                    settings.chat.palette = palette;
                }
            }

            if let Ok(Some(format)) = storage.get_item("finchat_number_format") {
                if let Some(format) = NumberFormat::parse(&format) {
                    settings.chat.number_format = format;
                }
            }

            if let Ok(Some(log_level)) = storage.get_item("finchat_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
