use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Сторона стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Dealer,
}

/// Чем закончился раунд. Каждому варианту соответствует терминальное состояние.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Игрок набрал 21 на своём ходу — дилер не играет.
    PlayerBlackjack,
    /// Игрок перебрал — дилер не играет.
    PlayerBust,
    /// Дилер набрал 21.
    DealerBlackjack,
    /// Дилер перебрал.
    DealerBust,
    /// Дилер обогнал игрока по очкам.
    DealerWinsByScore,
    /// Дилер остановился (StandOn) ниже игрока.
    PlayerWinsOnDealerExhaustion,
    /// Дилер остановился (StandOn) на тех же очках.
    Push,
}

impl RoundOutcome {
    /// Победитель; `None` для ничьей.
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerBlackjack
            | RoundOutcome::DealerBust
            | RoundOutcome::PlayerWinsOnDealerExhaustion => Some(Side::Player),
            RoundOutcome::PlayerBust
            | RoundOutcome::DealerBlackjack
            | RoundOutcome::DealerWinsByScore => Some(Side::Dealer),
            RoundOutcome::Push => None,
        }
    }

    /// Раунд закончился ещё на ходу игрока.
    pub fn decided_on_player_turn(self) -> bool {
        matches!(self, RoundOutcome::PlayerBlackjack | RoundOutcome::PlayerBust)
    }

    /// Текст для объявления результата.
    pub fn message(self) -> &'static str {
        match self {
            RoundOutcome::PlayerBlackjack => "Blackjack!  You win!",
            RoundOutcome::PlayerBust => "Sorry, you busted!",
            RoundOutcome::DealerBlackjack => "Blackjack!  The dealer wins!",
            RoundOutcome::DealerBust => "The dealer busted...you win!",
            RoundOutcome::DealerWinsByScore => "The dealer wins!",
            RoundOutcome::PlayerWinsOnDealerExhaustion => "The dealer stands...you win!",
            RoundOutcome::Push => "The dealer stands on the same score. Push.",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Краткое описание завершённого раунда. Удобно для логов и `--summary-json`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub player_name: String,
    pub player_cards: Vec<Card>,
    pub player_score: u32,
    pub dealer_name: String,
    pub dealer_cards: Vec<Card>,
    pub dealer_score: u32,
    pub outcome: RoundOutcome,
    pub winner: Option<Side>,
    pub cards_left: usize,
}
