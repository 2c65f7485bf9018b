use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::errors::PlayerError;
use crate::domain::hand::HandView;

/// Игрок: имя, стек, рука и флаг фолда.
///
/// Игрок единолично владеет своими картами. Рука только растёт,
/// а `folded` меняется лишь из `false` в `true`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: Chips,
    hand: Vec<Card>,
    folded: bool,
}

impl Player {
    /// Новый игрок с пустой рукой. Стартовый стек не проверяется.
    pub fn new(name: impl Into<String>, starting_chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips: starting_chips,
            hand: Vec::new(),
            folded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// Карты в порядке раздачи.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Добавить карту в конец руки.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
        debug!(player = %self.name, card = %card, hand_len = self.hand.len(), "card received");
    }

    /// Списать ставку со стека и вернуть новый остаток.
    ///
    /// При ошибке состояние игрока не меняется. Стек может дойти ровно до нуля,
    /// но ниже нуля ставкой не уходит.
    pub fn bet(&mut self, amount: Chips) -> Result<Chips, PlayerError> {
        if amount.is_negative() {
            warn!(player = %self.name, %amount, "negative bet rejected");
            return Err(PlayerError::NegativeBet(amount));
        }
        if amount > self.chips {
            warn!(player = %self.name, %amount, chips = %self.chips, "bet rejected: not enough chips");
            return Err(PlayerError::InsufficientChips {
                requested: amount,
                available: self.chips,
            });
        }

        self.chips -= amount;
        debug!(player = %self.name, %amount, chips = %self.chips, "bet placed");
        Ok(self.chips)
    }

    /// То же, что `bet`, но с булевым ответом: `true` – ставка прошла.
    pub fn try_bet(&mut self, amount: Chips) -> bool {
        self.bet(amount).is_ok()
    }

    /// Поставить весь стек. Возвращает фактически поставленную сумму.
    ///
    /// При отрицательном стеке ставить нечего – возвращается ноль.
    pub fn all_in(&mut self) -> Chips {
        if self.chips.is_negative() {
            debug!(player = %self.name, chips = %self.chips, "all-in with negative stack, nothing moved");
            return Chips::ZERO;
        }
        let amount = self.chips;
        self.chips = Chips::ZERO;
        debug!(player = %self.name, %amount, "all-in");
        amount
    }

    /// Сбросить карты. Повторный вызов ничего не меняет.
    pub fn fold(&mut self) {
        if !self.folded {
            debug!(player = %self.name, "folded");
        }
        self.folded = true;
    }

    /// Рука игрока в виде данных, без печати.
    pub fn hand_view(&self) -> HandView {
        HandView {
            player_name: self.name.clone(),
            cards: self.hand.clone(),
        }
    }

    /// Записать руку в текстовом виде:
    ///
    /// ```text
    /// Bob's hand:
    ///   K of Hearts
    ///   2 of Clubs
    /// ```
    pub fn show_hand<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.hand_view())
    }

    /// `show_hand` в stdout.
    pub fn print_hand(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.show_hand(&mut lock)?;
        lock.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Rank, Suit};

    #[test]
    fn failed_bet_leaves_state_untouched() {
        let mut p = Player::new("Alice", Chips(50));
        p.receive_card(Card::new(Suit::Spades, Rank::Ace));
        let before = p.clone();

        assert!(p.bet(Chips(51)).is_err());
        assert!(p.bet(Chips(-1)).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn all_in_with_negative_stack_moves_nothing() {
        let mut p = Player::new("Debtor", Chips(-10));
        assert_eq!(p.all_in(), Chips::ZERO);
        assert_eq!(p.chips(), Chips(-10));
    }
}
