use serde::{Deserialize, Serialize};

use crate::domain::errors::{CardError, PlayerError};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битая карта в команде).
    BadRequest(String),

    /// Операция игрока отклонена (нехватка фишек, отрицательная ставка).
    PlayerError(String),
}

impl From<PlayerError> for ApiError {
    fn from(err: PlayerError) -> Self {
        ApiError::PlayerError(err.to_string())
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::PlayerError(msg) => write!(f, "player error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
