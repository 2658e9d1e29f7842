use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::actions::Decision;
use crate::engine::outcome::{RoundOutcome, Side};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался, колода готова.
    RoundStarted {
        player: String,
        dealer: String,
        shuffled: bool,
    },

    /// Карта ушла из колоды в руку.
    CardDealt {
        to: Side,
        card: Card,
        score_after: u32,
    },

    /// Игрок ответил hit/stay.
    PlayerDecided { decision: Decision },

    /// Игрок ввёл что-то невнятное, переспросили.
    ResponseRejected { raw: String },

    /// Ход перешёл к дилеру.
    DealerTurnStarted,

    /// Дилер остановился по политике StandOn.
    DealerStood { score: u32 },

    /// Раунд завершён.
    RoundFinished { outcome: RoundOutcome },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Сколько карт получила сторона за раунд.
    pub fn cards_dealt_to(&self, side: Side) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(&e.kind, RoundEventKind::CardDealt { to, .. } if *to == side))
            .count()
    }

    pub fn dealer_turn_started(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.kind == RoundEventKind::DealerTurnStarted)
    }
}
