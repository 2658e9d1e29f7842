use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::player::Participant;
use crate::domain::rules::{DealerPolicy, RoundConfig};
use crate::engine::actions::{Decision, PlayerResponse};
use crate::engine::errors::EngineError;
use crate::engine::io::TableIo;
use crate::engine::outcome::{RoundOutcome, RoundSummary, Side};
use crate::engine::round_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;

/// Сколько карт получает каждый участник на старте.
pub const INITIAL_CARDS: usize = 2;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    /// Игрок решает hit/stay.
    PlayerTurn,
    /// Дилер добирает по своей политике.
    DealerTurn,
    /// Терминальное состояние.
    Finished(RoundOutcome),
}

/// Статус раунда для внешнего кода.
pub enum RoundStatus {
    Ongoing(RoundPhase),
    Finished(RoundSummary),
}

/// Состояние одного раунда: колода, два участника, фаза, история.
///
/// Всё принадлежит одному движку, общих ссылок нет.
pub struct RoundEngine {
    pub config: RoundConfig,
    pub deck: Deck,
    pub player: Participant,
    pub dealer: Participant,
    pub history: RoundHistory,
    phase: RoundPhase,
}

impl RoundEngine {
    /// Раунд на уже готовой колоде (без перемешивания).
    ///
    /// Раздаёт по две карты поочерёдно: игрок, дилер, игрок, дилер.
    pub fn from_deck(deck: Deck, config: RoundConfig) -> Result<Self, EngineError> {
        Self::setup(deck, config, false)
    }

    fn setup(deck: Deck, config: RoundConfig, shuffled: bool) -> Result<Self, EngineError> {
        let player = Participant::human(config.player_name.clone(), config.scoring);
        let dealer = Participant::dealer(config.dealer_name.clone(), config.scoring);

        let mut engine = Self {
            config,
            deck,
            player,
            dealer,
            history: RoundHistory::new(),
            phase: RoundPhase::PlayerTurn,
        };

        engine.history.push(RoundEventKind::RoundStarted {
            player: engine.player.name.clone(),
            dealer: engine.dealer.name.clone(),
            shuffled,
        });
        info!(
            player = %engine.player.name,
            dealer = %engine.dealer.name,
            shuffled,
            "round started"
        );

        for _ in 0..INITIAL_CARDS {
            engine.deal_to(Side::Player)?;
            engine.deal_to(Side::Dealer)?;
        }

        Ok(engine)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn participant(&self, side: Side) -> &Participant {
        match side {
            Side::Player => &self.player,
            Side::Dealer => &self.dealer,
        }
    }

    pub fn status(&self) -> RoundStatus {
        match self.phase {
            RoundPhase::Finished(_) => match self.summary() {
                Some(summary) => RoundStatus::Finished(summary),
                None => RoundStatus::Ongoing(self.phase),
            },
            phase => RoundStatus::Ongoing(phase),
        }
    }

    /// Итог раунда; `None`, пока раунд не завершён.
    pub fn summary(&self) -> Option<RoundSummary> {
        let outcome = self.outcome()?;
        Some(RoundSummary {
            player_name: self.player.name.clone(),
            player_cards: self.player.hand.cards().to_vec(),
            player_score: self.player.score(),
            dealer_name: self.dealer.name.clone(),
            dealer_cards: self.dealer.hand.cards().to_vec(),
            dealer_score: self.dealer.score(),
            outcome,
            winner: outcome.winner(),
            cards_left: self.deck.len(),
        })
    }

    /// Проверка руки игрока на его ходу: 21 — победа, перебор — поражение.
    ///
    /// `None` — нужен ответ игрока (или ход уже у дилера).
    pub fn resolve_player_turn(&mut self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Finished(outcome) => Some(outcome),
            RoundPhase::DealerTurn => None,
            RoundPhase::PlayerTurn => {
                let hand = &self.player.hand;
                let outcome = if hand.is_blackjack() {
                    Some(RoundOutcome::PlayerBlackjack)
                } else if hand.is_bust() {
                    Some(RoundOutcome::PlayerBust)
                } else {
                    None
                };
                if let Some(outcome) = outcome {
                    self.finish(outcome);
                }
                outcome
            }
        }
    }

    /// Применить hit/stay игрока.
    ///
    /// Hit — одна карта игроку (результат проверит следующий `resolve_player_turn`),
    /// Stay — ход переходит к дилеру.
    pub fn apply_decision(&mut self, decision: Decision) -> Result<(), EngineError> {
        match self.phase {
            RoundPhase::Finished(_) => return Err(EngineError::RoundFinished),
            RoundPhase::DealerTurn => return Err(EngineError::IllegalDecision),
            RoundPhase::PlayerTurn => {}
        }
        if self.resolve_player_turn().is_some() {
            return Err(EngineError::RoundFinished);
        }

        debug!(%decision, score = self.player.score(), "player decided");
        self.history.push(RoundEventKind::PlayerDecided { decision });

        match decision {
            Decision::Hit => {
                self.deal_to(Side::Player)?;
            }
            Decision::Stay => {
                self.phase = RoundPhase::DealerTurn;
                self.history.push(RoundEventKind::DealerTurnStarted);
            }
        }
        Ok(())
    }

    /// Записать непринятый ответ игрока. Состояние раунда не меняется.
    pub fn note_rejected_response(&mut self, raw: &str) {
        debug!(raw, "response rejected");
        self.history.push(RoundEventKind::ResponseRejected {
            raw: raw.to_string(),
        });
    }

    /// Один шаг дилера.
    ///
    /// Порядок проверок: 21 у дилера, перебор, дилер впереди по очкам,
    /// остановка по политике. Иначе дилер берёт карту и возвращается `None`.
    pub fn dealer_step(&mut self) -> Result<Option<RoundOutcome>, EngineError> {
        match self.phase {
            RoundPhase::Finished(outcome) => return Ok(Some(outcome)),
            RoundPhase::PlayerTurn => return Err(EngineError::NotDealersTurn),
            RoundPhase::DealerTurn => {}
        }

        let dealer_score = self.dealer.score();
        let player_score = self.player.score();

        let outcome = if self.dealer.hand.is_blackjack() {
            Some(RoundOutcome::DealerBlackjack)
        } else if self.dealer.hand.is_bust() {
            Some(RoundOutcome::DealerBust)
        } else if dealer_score > player_score {
            Some(RoundOutcome::DealerWinsByScore)
        } else {
            match self.config.dealer_policy {
                DealerPolicy::ChasePlayer => None,
                DealerPolicy::StandOn(limit) if dealer_score >= limit => {
                    self.history.push(RoundEventKind::DealerStood { score: dealer_score });
                    if dealer_score == player_score {
                        Some(RoundOutcome::Push)
                    } else {
                        Some(RoundOutcome::PlayerWinsOnDealerExhaustion)
                    }
                }
                DealerPolicy::StandOn(_) => None,
            }
        };

        match outcome {
            Some(outcome) => {
                self.finish(outcome);
                Ok(Some(outcome))
            }
            None => {
                self.deal_to(Side::Dealer)?;
                Ok(None)
            }
        }
    }

    fn deal_to(&mut self, side: Side) -> Result<Card, EngineError> {
        let card = self.deck.deal()?;
        let participant = match side {
            Side::Player => &mut self.player,
            Side::Dealer => &mut self.dealer,
        };
        participant.deal_card(card);
        let score_after = participant.score();
        debug!(to = %participant.name, card = %card, score = score_after, "card dealt");

        self.history.push(RoundEventKind::CardDealt {
            to: side,
            card,
            score_after,
        });
        Ok(card)
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::Finished(outcome);
        self.history.push(RoundEventKind::RoundFinished { outcome });
        info!(
            ?outcome,
            player_score = self.player.score(),
            dealer_score = self.dealer.score(),
            "round finished"
        );
    }
}

/// Старт нового раунда: свежая колода, перемешивание, начальная раздача.
pub fn start_round<R: RandomSource>(
    rng: &mut R,
    config: RoundConfig,
) -> Result<RoundEngine, EngineError> {
    let mut deck = Deck::standard_52();
    deck.shuffle(rng);
    RoundEngine::setup(deck, config, true)
}

/// Прогнать раунд до конца через границу ввода/вывода.
///
/// Ход игрока: показать руку, проверить 21/перебор, иначе спросить решение
/// (непонятный ответ — переспросить, карты не тратятся). Ход дилера: показать
/// руку, шаг дилера. Результат объявляется один раз.
pub fn play_round<I: TableIo>(
    engine: &mut RoundEngine,
    io: &mut I,
) -> Result<RoundOutcome, EngineError> {
    loop {
        match engine.phase() {
            RoundPhase::PlayerTurn => {
                io.display_hand(
                    &engine.player.name,
                    engine.player.hand.cards(),
                    engine.player.score(),
                );
                if engine.resolve_player_turn().is_some() {
                    continue;
                }

                match io.request_decision()? {
                    PlayerResponse::Hit => engine.apply_decision(Decision::Hit)?,
                    PlayerResponse::Stay => engine.apply_decision(Decision::Stay)?,
                    PlayerResponse::Invalid(raw) => {
                        engine.note_rejected_response(&raw);
                        io.reject_response(&raw);
                    }
                }
            }
            RoundPhase::DealerTurn => {
                io.display_hand(
                    &engine.dealer.name,
                    engine.dealer.hand.cards(),
                    engine.dealer.score(),
                );
                engine.dealer_step()?;
            }
            RoundPhase::Finished(outcome) => {
                io.announce_outcome(outcome.message());
                return Ok(outcome);
            }
        }
    }
}
