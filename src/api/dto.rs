use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;

pub use crate::domain::hand::HandView;

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub name: String,
    pub chips: Chips,
    pub hand: Vec<Card>,
    pub folded: bool,
}

impl From<&Player> for PlayerViewDto {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            chips: player.chips(),
            hand: player.hand().to_vec(),
            folded: player.is_folded(),
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Карта добавлена, в руке теперь `hand_len` карт.
    CardReceived { hand_len: usize },

    /// Ставка принята.
    BetPlaced { amount: Chips, chips_left: Chips },
}
