use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::domain::rules::ScoringPolicy;

/// Кто принимает решения за участника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParticipantKind {
    /// Живой игрок: hit/stay приходят через границу ввода.
    Human,
    /// Компьютерный дилер с фиксированной политикой.
    Dealer,
}

/// Участник раунда со своей рукой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub kind: ParticipantKind,
    pub hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>, kind: ParticipantKind, scoring: ScoringPolicy) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Hand::with_scoring(scoring),
        }
    }

    pub fn human(name: impl Into<String>, scoring: ScoringPolicy) -> Self {
        Self::new(name, ParticipantKind::Human, scoring)
    }

    pub fn dealer(name: impl Into<String>, scoring: ScoringPolicy) -> Self {
        Self::new(name, ParticipantKind::Dealer, scoring)
    }

    /// Положить розданную карту в руку.
    pub fn deal_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn score(&self) -> u32 {
        self.hand.score()
    }

    pub fn is_dealer(&self) -> bool {
        self.kind == ParticipantKind::Dealer
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
