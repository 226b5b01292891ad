use mystic_client::{ClientSettings, DEFAULT_BASE_URL};

/// Environment variable overriding the remote service base URL.
pub const BASE_URL_ENV: &str = "HOROSCOPE_API_URL";

pub fn client_settings() -> ClientSettings {
    let base_url = std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ClientSettings {
        base_url,
        ..ClientSettings::default()
    }
}
