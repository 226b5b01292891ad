use async_trait::async_trait;
use chrono::Local;
use mystic_logging::mystic_info;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::http::{
    build_client, error_flag, join_endpoint, parse_base_url, parse_body, send_request,
    ClientSettings,
};
use crate::normalize::{prediction_text, safe_field};
use crate::{ClientError, Horoscope, SavedHoroscope};

/// The four remote horoscope operations. No retries; every failure surfaces
/// as a typed result.
#[async_trait]
pub trait HoroscopeApi: Send + Sync {
    async fn fetch_horoscope(&self, sign: &str, category: &str) -> Result<Horoscope, ClientError>;
    async fn save_prediction(
        &self,
        sign: &str,
        category: &str,
        text: &str,
    ) -> Result<(), ClientError>;
    async fn list_saved(&self) -> Result<Vec<SavedHoroscope>, ClientError>;
    async fn delete_prediction(&self, id: &str) -> Result<(), ClientError>;
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    sign: &'a str,
    prediction: &'a str,
    category: &'a str,
}

#[derive(Debug, Clone)]
pub struct RemoteHoroscopeClient {
    client: reqwest::Client,
    base_url: url::Url,
}

impl RemoteHoroscopeClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(settings)?,
            base_url: parse_base_url(settings)?,
        })
    }
}

#[async_trait]
impl HoroscopeApi for RemoteHoroscopeClient {
    async fn fetch_horoscope(&self, sign: &str, category: &str) -> Result<Horoscope, ClientError> {
        mystic_info!("GET /horoscope sign={} category={}", sign, category);
        let url = join_endpoint(&self.base_url, "/horoscope")?;
        let request = self
            .client
            .get(url)
            .query(&[("sign", sign), ("category", category)]);

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

        let text = match payload.get("prediction") {
            Some(prediction) => prediction_text(prediction),
            // Tolerate a missing field; render the whole body rather than fail.
            None => prediction_text(&payload),
        };
        let lucky_number = payload
            .get("lucky_number")
            .and_then(Value::as_u64)
            .map(|n| n as u32)
            .unwrap_or_else(|| rand::thread_rng().gen_range(1..=100));
        let date = payload
            .get("date")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        Ok(Horoscope {
            sign: sign.to_string(),
            category: category.to_string(),
            text,
            lucky_number,
            date,
        })
    }

    async fn save_prediction(
        &self,
        sign: &str,
        category: &str,
        text: &str,
    ) -> Result<(), ClientError> {
        mystic_info!("POST /horoscope/save sign={} category={}", sign, category);
        let url = join_endpoint(&self.base_url, "/horoscope/save")?;
        let request = self.client.post(url).json(&SaveRequest {
            sign,
            prediction: text,
            category,
        });

        let (status, body) = send_request(request).await?;
        // Only a creation status counts as success.
        if status != reqwest::StatusCode::CREATED {
            return Err(ClientError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn list_saved(&self) -> Result<Vec<SavedHoroscope>, ClientError> {
        mystic_info!("GET /horoscope/saved");
        let url = join_endpoint(&self.base_url, "/horoscope/saved")?;

        let (status, body) = send_request(self.client.get(url)).await?;
        if !status.is_success() {
            return Err(ClientError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let payload = parse_body(&body)?;
        // A missing list, `count: 0`, and an empty array are all the valid
        // empty state, not errors.
        let entries = match payload.get("horoscopes").and_then(Value::as_array) {
            Some(entries) => entries.iter().map(saved_entry).collect(),
            None => Vec::new(),
        };
        Ok(entries)
    }

    async fn delete_prediction(&self, id: &str) -> Result<(), ClientError> {
        mystic_info!("DELETE /horoscope/delete/{}", id);
        let url = join_endpoint(&self.base_url, &format!("/horoscope/delete/{id}"))?;

        let (status, body) = send_request(self.client.delete(url)).await?;
        // Only an explicit OK counts as success.
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

fn saved_entry(entry: &Value) -> SavedHoroscope {
    SavedHoroscope {
        id: safe_field(entry, "id", "0"),
        sign: safe_field(entry, "sign", "Unknown"),
        category: safe_field(entry, "category", "general"),
        text: safe_field(entry, "prediction", "No prediction text"),
        saved_at: entry
            .get("saved_at")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}
