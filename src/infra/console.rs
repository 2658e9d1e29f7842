use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::warn;

use crate::domain::card::Card;
use crate::engine::{EngineError, PlayerResponse, TableIo};

pub const PROMPT: &str = "Hit or stay? [h/s] ";

/// Текстовый ввод/вывод поверх любых `BufRead` + `Write` (stdin/stdout в CLI,
/// буферы в тестах).
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl ConsoleIo<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Вывод без возврата ошибки: показ руки/результата не должен рвать раунд.
    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args) {
            warn!(error = %e, "console write failed");
        }
    }
}

impl<R: BufRead, W: Write> TableIo for ConsoleIo<R, W> {
    fn display_hand(&mut self, name: &str, cards: &[Card], score: u32) {
        self.emit(format_args!("{name}'s current hand: \n"));
        for card in cards {
            self.emit(format_args!("\t* {card}\n"));
        }
        self.emit(format_args!("{name}'s current score = {score}\n"));
    }

    fn request_decision(&mut self) -> Result<PlayerResponse, EngineError> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        Ok(PlayerResponse::parse(&line))
    }

    fn reject_response(&mut self, _raw: &str) {
        self.emit(format_args!(
            "Invalid response.  Please enter h for hit or s for stay.\n"
        ));
    }

    fn announce_outcome(&mut self, message: &str) {
        self.emit(format_args!("{message}\n"));
    }
}
