// src/bin/deck_demo.rs
//
// Прогон колоды без игры: печать, перемешивание, случайная карта,
// раздача до пустой колоды.

use blackjack_engine::domain::{Deck, DomainError};
use blackjack_engine::infra::SystemRng;
use tracing_subscriber::EnvFilter;

fn print_deck(deck: &Deck) {
    for card in &deck.cards {
        println!("{card}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blackjack_engine=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = SystemRng;
    let mut deck = Deck::new();
    print_deck(&deck);

    deck.shuffle(&mut rng);
    println!();
    print_deck(&deck);

    match deck.deal_random(&mut rng) {
        Ok(card) => println!("Your card is {card}"),
        Err(e) => println!("{e}"),
    }

    loop {
        match deck.deal() {
            Ok(card) => println!("{card}"),
            Err(DomainError::EmptyDeck) => {
                println!("The deck is empty!");
                break;
            }
            Err(e) => {
                println!("{e}");
                break;
            }
        }
    }
}
