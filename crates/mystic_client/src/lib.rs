//! Mystic client: remote service plumbing and response normalization.
mod horoscope;
mod http;
mod normalize;
mod service;
mod tarot;
mod types;

pub use horoscope::{HoroscopeApi, RemoteHoroscopeClient};
pub use http::{ClientSettings, DEFAULT_BASE_URL};
pub use normalize::{prediction_text, safe_field};
pub use service::{ServiceCommand, ServiceEvent, ServiceHandle};
pub use tarot::{TarotApi, TarotClient};
pub use types::{ClientError, Horoscope, SavedHoroscope, TarotCard, TarotReading};
