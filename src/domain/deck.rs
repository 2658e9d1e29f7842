use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::errors::DomainError;
use crate::engine::RandomSource;

/// Колода карт — упорядоченный список. Верх колоды = конец вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Two ♥♦♠♣, Three ♥♦♠♣, ..., Ace ♥♦♠♣.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(Rank::ALL.len() * Suit::ALL.len());
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Синоним `standard_52()`.
    pub fn new() -> Self {
        Self::standard_52()
    }

    /// Заранее сложенная колода: первая карта — низ, последняя — верх
    /// (её `deal()` выдаст первой).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Сколько карт осталось.
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Равномерная перестановка всей колоды.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn deal(&mut self) -> Result<Card, DomainError> {
        let card = self.cards.pop().ok_or(DomainError::EmptyDeck)?;
        trace!(card = %card, remaining = self.cards.len(), "deal");
        Ok(card)
    }

    /// Взять карту из случайной позиции `[0, len)`.
    pub fn deal_random<R: RandomSource>(&mut self, rng: &mut R) -> Result<Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::EmptyDeck);
        }
        let idx = rng.index_below(self.cards.len());
        let card = self.cards.remove(idx);
        trace!(card = %card, index = idx, remaining = self.cards.len(), "deal_random");
        Ok(card)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard_52()
    }
}
