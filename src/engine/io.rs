//! Граница ввода/вывода раунда.
//!
//! Движок не знает, как рисуется рука и как задаётся вопрос "hit or stay":
//! он только вызывает методы `TableIo`. Консольная реализация лежит в
//! `infra::console`, скриптовая (`ScriptedIo`) — здесь, для тестов и
//! неинтерактивных прогонов.

use std::collections::VecDeque;

use crate::domain::card::Card;
use crate::engine::actions::PlayerResponse;
use crate::engine::errors::EngineError;

pub trait TableIo {
    /// Показать руку участника и текущие очки.
    fn display_hand(&mut self, name: &str, cards: &[Card], score: u32);

    /// Блокирующий запрос решения игрока.
    fn request_decision(&mut self) -> Result<PlayerResponse, EngineError>;

    /// Сообщить, что ответ не распознан (перед повторным запросом).
    fn reject_response(&mut self, _raw: &str) {}

    /// Объявить результат раунда.
    fn announce_outcome(&mut self, message: &str);
}

/// Снимок одного вызова `display_hand`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayedHand {
    pub name: String,
    pub cards: Vec<Card>,
    pub score: u32,
}

/// Скриптовый ввод/вывод: отдаёт заранее заданные ответы по очереди и
/// запоминает всё, что движок показал.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIo {
    responses: VecDeque<PlayerResponse>,
    pub displayed: Vec<DisplayedHand>,
    pub rejected: Vec<String>,
    pub announcements: Vec<String>,
    pub prompts: usize,
}

impl ScriptedIo {
    pub fn new<I: IntoIterator<Item = PlayerResponse>>(responses: I) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Скрипт из сырых строк, как их ввёл бы человек ("h", "s", "???").
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        Self::new(lines.into_iter().map(PlayerResponse::parse))
    }

    /// Сколько ответов ещё не использовано.
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }

    /// Показанные руки конкретного участника.
    pub fn displayed_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DisplayedHand> + 'a {
        self.displayed.iter().filter(move |d| d.name == name)
    }
}

impl TableIo for ScriptedIo {
    fn display_hand(&mut self, name: &str, cards: &[Card], score: u32) {
        self.displayed.push(DisplayedHand {
            name: name.to_string(),
            cards: cards.to_vec(),
            score,
        });
    }

    fn request_decision(&mut self) -> Result<PlayerResponse, EngineError> {
        self.prompts += 1;
        self.responses.pop_front().ok_or(EngineError::InputClosed)
    }

    fn reject_response(&mut self, raw: &str) {
        self.rejected.push(raw.to_string());
    }

    fn announce_outcome(&mut self, message: &str) {
        self.announcements.push(message.to_string());
    }
}
