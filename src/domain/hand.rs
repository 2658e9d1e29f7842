use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::rules::{ScoringPolicy, BLACKJACK};

/// Рука блэкджека.
///
/// Карты только добавляются; параллельно копятся сумма не-тузов и число тузов.
/// Очки не хранятся — каждый раз считаются по `ScoringPolicy`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    nonace_total: u32,
    ace_count: u32,
    scoring: ScoringPolicy,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(scoring: ScoringPolicy) -> Self {
        Self {
            scoring,
            ..Self::default()
        }
    }

    /// Рука из готового набора карт (удобно для тестов и реплея).
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        if card.rank.is_ace() {
            self.ace_count += 1;
        } else {
            self.nonace_total += card.rank.points();
        }
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    pub fn nonace_total(&self) -> u32 {
        self.nonace_total
    }

    pub fn ace_count(&self) -> u32 {
        self.ace_count
    }

    pub fn score(&self) -> u32 {
        self.scoring.score(self.nonace_total, self.ace_count)
    }

    /// Ровно 21 очко (не обязательно двумя картами).
    pub fn is_blackjack(&self) -> bool {
        self.score() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Один из тузов сейчас считается за 11.
    pub fn is_soft(&self) -> bool {
        self.ace_count > 0 && self.score() > self.nonace_total + self.ace_count
    }

    /// Сбросить руку перед новым раундом. Политика подсчёта сохраняется.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.nonace_total = 0;
        self.ace_count = 0;
    }
}

impl fmt::Display for Hand {
    /// Карты по одной на строку.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
