// tests/console_io_tests.rs
//
// Консольная граница ввода/вывода поверх буферов вместо stdin/stdout.

use std::io::Cursor;

use blackjack_engine::domain::{Card, Deck, Rank, RoundConfig, Suit};
use blackjack_engine::engine::{
    play_round, EngineError, PlayerResponse, RoundEngine, RoundOutcome, TableIo,
};
use blackjack_engine::infra::console::PROMPT;
use blackjack_engine::infra::ConsoleIo;

fn console(input: &str) -> ConsoleIo<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(io: ConsoleIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(io.into_output()).expect("utf-8 output")
}

#[test]
fn response_parsing() {
    assert_eq!(PlayerResponse::parse("h"), PlayerResponse::Hit);
    assert_eq!(PlayerResponse::parse(" HIT \n"), PlayerResponse::Hit);
    assert_eq!(PlayerResponse::parse("s"), PlayerResponse::Stay);
    assert_eq!(PlayerResponse::parse("Stand"), PlayerResponse::Stay);
    assert_eq!(
        PlayerResponse::parse("x\n"),
        PlayerResponse::Invalid("x".to_string())
    );
    assert_eq!(PlayerResponse::parse("x").decision(), None);
}

#[test]
fn request_decision_reads_lines_and_prompts() {
    let mut io = console("h\nnope\ns\n");

    assert_eq!(io.request_decision().expect("line"), PlayerResponse::Hit);
    assert_eq!(
        io.request_decision().expect("line"),
        PlayerResponse::Invalid("nope".to_string())
    );
    assert_eq!(io.request_decision().expect("line"), PlayerResponse::Stay);
    assert!(matches!(io.request_decision(), Err(EngineError::InputClosed)));

    let out = output_of(io);
    assert_eq!(out.matches(PROMPT).count(), 4);
}

#[test]
fn display_hand_lists_cards_and_score() {
    let mut io = console("");
    io.display_hand(
        "Matt",
        &[
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
        ],
        17,
    );
    io.announce_outcome("The dealer wins!");

    assert_eq!(
        output_of(io),
        "Matt's current hand: \n\t* Ace of Hearts\n\t* Six of Clubs\nMatt's current score = 17\nThe dealer wins!\n"
    );
}

/// Полный раунд через консоль: мусорный ввод, hit, stay.
#[test]
fn full_round_over_console() {
    // игрок: Two, Five (+ Nine после hit = 16); дилер: Ten, Seven = 17 > 16
    let deal_order = [
        Card::new(Rank::Two, Suit::Spades),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let deck = Deck::from_cards(deal_order.iter().rev().copied().collect());
    let config = RoundConfig {
        player_name: "Matt".to_string(),
        ..RoundConfig::default()
    };
    let mut engine = RoundEngine::from_deck(deck, config).expect("setup");
    let mut io = console("what\nh\ns\n");

    let outcome = play_round(&mut engine, &mut io).expect("round");
    assert_eq!(outcome, RoundOutcome::DealerWinsByScore);

    let out = output_of(io);
    assert!(out.contains("Invalid response.  Please enter h for hit or s for stay."));
    assert!(out.contains("Matt's current score = 7"));
    assert!(out.contains("\t* Nine of Clubs"));
    assert!(out.contains("Matt's current score = 16"));
    assert!(out.contains("Dealer's current score = 17"));
    assert!(out.ends_with("The dealer wins!\n"));
}
