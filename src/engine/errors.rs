use thiserror::Error;

use crate::domain::DomainError;

/// Ошибки движка раунда.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Проброшенная ошибка домена (пустая колода, кривая карта).
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Решение hit/stay недопустимо в текущем состоянии раунда")]
    IllegalDecision,

    #[error("Ход дилера недопустим в текущем состоянии раунда")]
    NotDealersTurn,

    #[error("Раунд уже завершён")]
    RoundFinished,

    #[error("Ввод закрыт, решение игрока получить нельзя")]
    InputClosed,

    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),
}
