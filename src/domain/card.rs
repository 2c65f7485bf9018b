use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CardError;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Однобуквенный код для компактной записи (`h`, `d`, `c`, `s`).
    pub fn code(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    fn from_code(ch: char) -> Option<Suit> {
        match ch {
            'h' | 'H' => Some(Suit::Hearts),
            'd' | 'D' => Some(Suit::Diamonds),
            'c' | 'C' => Some(Suit::Clubs),
            's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ранг карты. Дискриминант совпадает с числовой силой карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Числовая сила ранга: 2..=14, туз старший.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value`. Всё вне 2..=14 – ошибка.
    pub fn from_value(value: u8) -> Result<Rank, CardError> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }

    /// Однобуквенный код для компактной записи (`T` для десятки).
    pub fn code(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => char::from(b'0' + r.value()),
        }
    }

    fn from_code(code: &str) -> Option<Rank> {
        let rank = match code {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// Игральная карта: масть, ранг и числовая сила.
///
/// Значение неизменяемое (`Copy`). `value` хранится отдельно от ранга и
/// никак не проверяется, если карту собрали через `with_value`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub value: u8,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            value: rank as u8,
        }
    }

    pub const fn with_value(suit: Suit, rank: Rank, value: u8) -> Self {
        Self { suit, rank, value }
    }

    /// Карта по числовой силе 2..=14.
    pub fn from_value(suit: Suit, value: u8) -> Result<Self, CardError> {
        Ok(Card::new(suit, Rank::from_value(value)?))
    }

    /// Компактная запись вида `Ah`, `Td`, `7c`.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            Rank::Ace => f.write_str("A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `K of Hearts`, `10 of Clubs`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Парсинг компактной записи: "Ah", "Td", "10d".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| CardError::Parse(s.to_string()))?;
        let rank_part = chars.as_str();

        let suit = Suit::from_code(suit_ch).ok_or_else(|| CardError::Parse(s.to_string()))?;
        let rank = Rank::from_code(rank_part).ok_or_else(|| CardError::Parse(s.to_string()))?;

        Ok(Card::new(suit, rank))
    }
}
