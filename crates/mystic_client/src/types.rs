use thiserror::Error;

/// Failure taxonomy shared by every remote operation.
///
/// All variants render as messages fit for direct display; nothing here
/// terminates the session, and every failure permits a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure or timeout.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// Non-success HTTP status.
    #[error("service error (status {status}): {body}")]
    ServiceError { status: u16, body: String },
    /// A syntactically successful response carrying an explicit error flag.
    #[error("{0}")]
    DomainError(String),
}

/// A horoscope as returned by the remote service, with the client-side
/// defaults for lucky number and date already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horoscope {
    pub sign: String,
    pub category: String,
    pub text: String,
    pub lucky_number: u32,
    pub date: String,
}

/// One entry of the service-owned saved list. Missing fields have already
/// been replaced with display defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedHoroscope {
    pub id: String,
    pub sign: String,
    pub category: String,
    pub text: String,
    pub saved_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotCard {
    pub name: String,
    pub meaning_upright: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotReading {
    pub sign: String,
    pub cards: Vec<TarotCard>,
    pub reading: String,
}
