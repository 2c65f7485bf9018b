//! Модель игрока в карточной игре.
//!
//! `domain` – карты, фишки и сам игрок; `api` – команды и запросы поверх
//! игрока с DTO для клиента; `infra` – конфиг и логи для dev-CLI.

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::{Card, CardError, Chips, HandView, Player, PlayerError, Rank, Suit};
