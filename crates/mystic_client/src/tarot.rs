use async_trait::async_trait;
use mystic_logging::mystic_info;
use serde_json::Value;

use crate::http::{
    build_client, error_flag, join_endpoint, parse_base_url, parse_body, send_request,
    ClientSettings,
};
use crate::normalize::safe_field;
use crate::{ClientError, TarotCard, TarotReading};

/// The single remote tarot operation, under the same error contract as the
/// horoscope client.
#[async_trait]
pub trait TarotApi: Send + Sync {
    async fn fetch_daily_tarot(&self, sign: &str) -> Result<TarotReading, ClientError>;
}

#[derive(Debug, Clone)]
pub struct TarotClient {
    client: reqwest::Client,
    base_url: url::Url,
}

impl TarotClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(settings)?,
            base_url: parse_base_url(settings)?,
        })
    }
}

#[async_trait]
impl TarotApi for TarotClient {
    async fn fetch_daily_tarot(&self, sign: &str) -> Result<TarotReading, ClientError> {
        mystic_info!("GET /tarot/daily sign={}", sign);
        let url = join_endpoint(&self.base_url, "/tarot/daily")?;
        let request = self.client.get(url).query(&[("sign", sign)]);

        let (status, body) = send_request(request).await?;
        if !status.is_success() {
            return Err(ClientError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let payload = parse_body(&body)?;
        if let Some(message) = error_flag(&payload) {
            return Err(ClientError::DomainError(message));
        }

        let cards = match payload.get("cards").and_then(Value::as_array) {
            Some(cards) => cards.iter().map(card_entry).collect(),
            None => Vec::new(),
        };

        Ok(TarotReading {
            sign: safe_field(&payload, "sign", sign),
            cards,
            // A bare string body still yields a displayable reading.
            reading: safe_field(&payload, "reading", ""),
        })
    }
}

/// Cards arrive either structured or as bare strings; a bare string becomes
/// a card with that string as its name and no upright meaning.
fn card_entry(card: &Value) -> TarotCard {
    match card {
        Value::String(name) => TarotCard {
            name: name.clone(),
            meaning_upright: String::new(),
        },
        Value::Object(_) => TarotCard {
            name: safe_field(card, "name", "Unknown card"),
            meaning_upright: safe_field(card, "meaning_upright", ""),
        },
        other => TarotCard {
            name: other.to_string(),
            meaning_upright: String::new(),
        },
    }
}
