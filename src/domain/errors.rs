use thiserror::Error;

use crate::domain::chips::Chips;

/// Ошибки построения карты.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Недопустимый ранг карты: {0} (ожидается 2..=14)")]
    InvalidRank(u8),

    #[error("Не удалось разобрать карту из строки {0:?}")]
    Parse(String),
}

/// Ошибки операций игрока.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Недостаточно фишек: ставка {requested}, в стеке {available}")]
    InsufficientChips { requested: Chips, available: Chips },

    #[error("Ставка не может быть отрицательной: {0}")]
    NegativeBet(Chips),
}
