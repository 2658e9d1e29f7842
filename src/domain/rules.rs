use serde::{Deserialize, Serialize};

/// Очки блэкджека.
pub const BLACKJACK: u32 = 21;

/// На сколько туз "тяжелее", когда считается за 11, а не за 1.
pub const SOFT_ACE_BONUS: u32 = 10;

/// Как считать тузы в руке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Максимальная сумма <= 21 при выборе 1/11 для каждого туза;
    /// если перебор неизбежен — минимальная сумма.
    #[default]
    BestTotal,
    /// Один туз идёт за 11, только если сумма остальных карт (без тузов) <= 10.
    /// На руках вроде {Ten, Ace, Ace} даёт перебор (22), хотя есть 12.
    Classic,
}

impl ScoringPolicy {
    /// Очки по сумме не-тузов и числу тузов.
    pub fn score(self, nonace_total: u32, aces: u32) -> u32 {
        let hard = nonace_total + aces;
        if aces == 0 {
            return hard;
        }
        match self {
            ScoringPolicy::BestTotal => {
                // Больше одного туза за 11 — всегда перебор.
                if hard + SOFT_ACE_BONUS <= BLACKJACK {
                    hard + SOFT_ACE_BONUS
                } else {
                    hard
                }
            }
            ScoringPolicy::Classic => {
                if nonace_total <= 10 {
                    nonace_total + 11 + (aces - 1)
                } else {
                    hard
                }
            }
        }
    }
}

/// Когда дилер перестаёт брать карты.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealerPolicy {
    /// Дилер берёт, пока не обгонит игрока, не наберёт 21 или не переберёт.
    #[default]
    ChasePlayer,
    /// Дилер останавливается на указанной сумме и выше (обычно 17).
    StandOn(u32),
}

/// Конфиг одного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    pub player_name: String,
    pub dealer_name: String,
    pub scoring: ScoringPolicy,
    pub dealer_policy: DealerPolicy,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            dealer_name: "Dealer".to_string(),
            scoring: ScoringPolicy::default(),
            dealer_policy: DealerPolicy::default(),
        }
    }
}
