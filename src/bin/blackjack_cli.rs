// src/bin/blackjack_cli.rs

use std::process::ExitCode;

use blackjack_engine::domain::{DealerPolicy, RoundConfig, ScoringPolicy};
use blackjack_engine::engine::{play_round, start_round, EngineError, RoundEngine};
use blackjack_engine::infra::{ConsoleIo, DeterministicRng, SystemRng};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Один раунд блэкджека против компьютерного дилера.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version)]
struct Args {
    /// Имя игрока.
    #[arg(long, env = "BLACKJACK_NAME", default_value = "Player")]
    name: String,

    /// Имя дилера.
    #[arg(long, default_value = "Dealer")]
    dealer_name: String,

    /// Seed для воспроизводимой колоды (без него — системный RNG).
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Подсчёт тузов.
    #[arg(long, value_enum, default_value_t = Scoring::Best)]
    scoring: Scoring,

    /// Дилер останавливается на этой сумме (по умолчанию добирает,
    /// пока не обгонит игрока).
    #[arg(long, value_name = "SCORE")]
    dealer_stands_on: Option<u32>,

    /// Вывести итог раунда JSON-ом в конце.
    #[arg(long)]
    summary_json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoring {
    Best,
    Classic,
}

impl From<Scoring> for ScoringPolicy {
    fn from(s: Scoring) -> Self {
        match s {
            Scoring::Best => ScoringPolicy::BestTotal,
            Scoring::Classic => ScoringPolicy::Classic,
        }
    }
}

impl Args {
    fn round_config(&self) -> RoundConfig {
        RoundConfig {
            player_name: self.name.clone(),
            dealer_name: self.dealer_name.clone(),
            scoring: self.scoring.into(),
            dealer_policy: match self.dealer_stands_on {
                Some(score) => DealerPolicy::StandOn(score),
                None => DealerPolicy::ChasePlayer,
            },
        }
    }
}

fn main() -> ExitCode {
    // Логи — в stderr, чтобы не мешать тексту игры в stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blackjack_engine=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "round aborted");
            eprintln!("blackjack: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), EngineError> {
    let config = args.round_config();
    info!(?config, seed = ?args.seed, "starting round");

    let mut engine: RoundEngine = match args.seed {
        Some(seed) => start_round(&mut DeterministicRng::from_seed(seed), config)?,
        None => start_round(&mut SystemRng, config)?,
    };

    let mut io = ConsoleIo::stdio();
    play_round(&mut engine, &mut io)?;

    if args.summary_json {
        if let Some(summary) = engine.summary() {
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => error!(error = %e, "summary serialization failed"),
            }
        }
    }

    Ok(())
}
