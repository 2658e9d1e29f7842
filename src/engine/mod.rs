//! Движок раунда блэкджека: раздача, ход игрока, ход дилера, результат.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `start_round` – свежая перемешанная колода и начальная раздача
//!   - `resolve_player_turn` / `apply_decision` – ход игрока
//!   - `dealer_step` – один шаг дилера
//!   - `play_round` – весь раунд через границу ввода/вывода (`TableIo`)

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod io;
pub mod outcome;
pub mod round_history;

pub use actions::{Decision, PlayerResponse};
pub use errors::EngineError;
pub use game_loop::{play_round, start_round, RoundEngine, RoundPhase, RoundStatus, INITIAL_CARDS};
pub use io::{DisplayedHand, ScriptedIo, TableIo};
pub use outcome::{RoundOutcome, RoundSummary, Side};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для колоды и движка.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерная перестановка всего среза.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс из `[0, upper)`. Вызывается только с `upper > 0`.
    fn index_below(&mut self, upper: usize) -> usize;
}
