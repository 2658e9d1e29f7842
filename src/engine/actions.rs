use core::fmt;

use serde::{Deserialize, Serialize};

/// Решение игрока на своём ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    /// Взять ещё одну карту.
    Hit,
    /// Закончить ход.
    Stay,
}

/// Что вернула граница ввода на запрос решения.
///
/// Мусорный ввод — не ошибка: движок просто спросит ещё раз.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerResponse {
    Hit,
    Stay,
    Invalid(String),
}

impl PlayerResponse {
    /// Разбор текстового ответа: `h`/`hit` или `s`/`stay`/`stand`, регистр не важен.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "h" | "hit" => PlayerResponse::Hit,
            "s" | "stay" | "stand" => PlayerResponse::Stay,
            _ => PlayerResponse::Invalid(raw.trim().to_string()),
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            PlayerResponse::Hit => Some(Decision::Hit),
            PlayerResponse::Stay => Some(Decision::Stay),
            PlayerResponse::Invalid(_) => None,
        }
    }
}

impl From<Decision> for PlayerResponse {
    fn from(d: Decision) -> Self {
        match d {
            Decision::Hit => PlayerResponse::Hit,
            Decision::Stay => PlayerResponse::Stay,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Hit => f.write_str("hit"),
            Decision::Stay => f.write_str("stay"),
        }
    }
}
