use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда над игроком – всё, что меняет его состояние.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Выдать карту игроку.
    ReceiveCard { card: Card },

    /// Поставить `amount` фишек.
    Bet { amount: Chips },

    /// Поставить весь стек.
    AllIn,

    /// Сбросить карты.
    Fold,
}

/// Применить команду к игроку.
///
/// Отклонённая ставка не меняет состояние игрока и возвращается как `ApiError`.
pub fn apply_command(
    player: &mut Player,
    command: PlayerCommand,
) -> Result<CommandResponse, ApiError> {
    match command {
        PlayerCommand::ReceiveCard { card } => {
            player.receive_card(card);
            Ok(CommandResponse::CardReceived {
                hand_len: player.hand().len(),
            })
        }
        PlayerCommand::Bet { amount } => {
            let chips_left = player.bet(amount)?;
            Ok(CommandResponse::BetPlaced { amount, chips_left })
        }
        PlayerCommand::AllIn => {
            let amount = player.all_in();
            Ok(CommandResponse::BetPlaced {
                amount,
                chips_left: player.chips(),
            })
        }
        PlayerCommand::Fold => {
            player.fold();
            Ok(CommandResponse::Ok)
        }
    }
}
