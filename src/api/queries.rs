use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;

use super::dto::{HandView, PlayerViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerQuery {
    /// Текущий стек.
    GetChips,

    /// Рука игрока в порядке раздачи.
    GetHand,

    /// Сбросил ли игрок карты.
    IsFolded,

    /// Полное представление игрока.
    GetPlayer,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Chips(Chips),
    Hand(HandView),
    Folded(bool),
    Player(PlayerViewDto),
}

pub fn handle_query(player: &Player, query: PlayerQuery) -> QueryResponse {
    match query {
        PlayerQuery::GetChips => QueryResponse::Chips(player.chips()),
        PlayerQuery::GetHand => QueryResponse::Hand(player.hand_view()),
        PlayerQuery::IsFolded => QueryResponse::Folded(player.is_folded()),
        PlayerQuery::GetPlayer => QueryResponse::Player(build_player_view(player)),
    }
}

/// Сформировать DTO игрока.
pub fn build_player_view(player: &Player) -> PlayerViewDto {
    PlayerViewDto::from(player)
}
