use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Снимок руки игрока: имя владельца и карты в порядке раздачи.
///
/// `Display` даёт текстовый формат для вывода пользователю; разбирать этот
/// текст обратно не нужно, для данных есть сами поля.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandView {
    pub player_name: String,
    pub cards: Vec<Card>,
}

impl HandView {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s hand:", self.player_name)?;
        for card in &self.cards {
            writeln!(f, "  {card}")?;
        }
        Ok(())
    }
}
