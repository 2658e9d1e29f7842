//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use blackjack_engine::domain::*;

fn c(rank: Rank) -> Card {
    // Масть на очки не влияет.
    Card::new(rank, Suit::Spades)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    Hand::from_cards(ranks.iter().copied().map(c))
}

fn classic_hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::with_scoring(ScoringPolicy::Classic);
    for &r in ranks {
        hand.add_card(c(r));
    }
    hand
}

/// Все 52 комбинации ранга и масти создаются и печатаются как "Rank of Suit".
#[test]
fn every_rank_and_suit_builds_a_card() {
    let mut labels = HashSet::new();
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::from_names(rank.name(), suit.name()).expect("valid names");
            assert_eq!(card, Card::new(rank, suit));
            labels.insert(card.to_string());
        }
    }
    assert_eq!(labels.len(), 52);
    assert!(labels.contains("Ace of Spades"));
    assert!(labels.contains("Two of Hearts"));
}

#[test]
fn card_from_names_rejects_unknown_values() {
    assert_eq!(
        Card::from_names("One", "Spades"),
        Err(DomainError::InvalidValue {
            kind: "rank",
            value: "One".to_string()
        })
    );
    assert_eq!(
        Card::from_names("Ace", "Stars"),
        Err(DomainError::InvalidValue {
            kind: "suit",
            value: "Stars".to_string()
        })
    );
    // регистр не важен
    assert_eq!(
        Card::from_names("queen", "DIAMONDS"),
        Ok(Card::new(Rank::Queen, Suit::Diamonds))
    );
}

/// Парсинг обеих форм записи.
#[test]
fn card_parse_long_and_short_forms() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
    ];

    for card in cards {
        let long: Card = card.to_string().parse().expect("parse long form");
        assert_eq!(long, card);
        let short: Card = card.short().parse().expect("parse short form");
        assert_eq!(short, card);
    }

    assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).short(), "Td");
    assert_eq!(Card::new(Rank::Seven, Suit::Clubs).short(), "7c");

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("XYZ".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("Acx".parse::<Card>().is_err());
    assert!("Ace of Cups".parse::<Card>().is_err());
}

#[test]
fn rank_points() {
    assert_eq!(Rank::Two.points(), 2);
    assert_eq!(Rank::Nine.points(), 9);
    assert_eq!(Rank::Ten.points(), 10);
    assert_eq!(Rank::Jack.points(), 10);
    assert_eq!(Rank::Queen.points(), 10);
    assert_eq!(Rank::King.points(), 10);
    assert_eq!(Rank::Ace.points(), 1);
}

/// Deck: стандартная колода 52 карты, все уникальны, по 13 в масти.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::new();
    assert_eq!(deck.size(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    for suit in Suit::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.suit == suit).count(), 13);
    }
    for rank in Rank::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.rank == rank).count(), 4);
    }

    // Канонический порядок: ранг старший, масть младшая; верх колоды — туз треф.
    assert_eq!(deck.cards[0], Card::new(Rank::Two, Suit::Hearts));
    assert_eq!(deck.cards[51], Card::new(Rank::Ace, Suit::Clubs));
}

#[test]
fn deck_deal_takes_from_top_until_empty() {
    let mut deck = Deck::new();

    let top = deck.deal().expect("fresh deck is not empty");
    assert_eq!(top, Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.size(), 51);
    assert!(!deck.contains(&top));

    let mut seen = HashSet::from([top]);
    for expected_len in (0..51).rev() {
        let card = deck.deal().expect("cards left");
        assert_eq!(deck.size(), expected_len);
        assert!(!deck.contains(&card));
        assert!(seen.insert(card), "card dealt twice: {card}");
    }

    // 53-я раздача
    assert_eq!(deck.deal(), Err(DomainError::EmptyDeck));
    assert!(deck.is_empty());
}

#[test]
fn deck_from_cards_deals_last_card_first() {
    let mut deck = Deck::from_cards(vec![
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::King, Suit::Clubs),
    ]);
    assert_eq!(deck.deal(), Ok(Card::new(Rank::King, Suit::Clubs)));
    assert_eq!(deck.deal(), Ok(Card::new(Rank::Two, Suit::Hearts)));
    assert_eq!(deck.deal(), Err(DomainError::EmptyDeck));
}

/// Очки рук из набора проверочных случаев.
#[test]
fn hand_scores_reference_hands() {
    let h = hand_of(&[Rank::Ten, Rank::Seven]);
    assert_eq!(h.score(), 17);
    assert!(!h.is_blackjack() && !h.is_bust());

    let h = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(h.score(), 21);
    assert!(h.is_blackjack());

    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).score(), 12);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);

    let h = hand_of(&[Rank::Ten, Rank::King, Rank::Five]);
    assert_eq!(h.score(), 25);
    assert!(h.is_bust());

    let h = hand_of(&[Rank::Ace, Rank::Six, Rank::Ace, Rank::Nine]);
    assert_eq!(h.score(), 17);
    assert!(!h.is_bust());
}

/// Обе политики подсчёта совпадают на проверочных руках.
#[test]
fn classic_scoring_agrees_on_reference_hands() {
    let cases: [(&[Rank], u32); 6] = [
        (&[Rank::Ten, Rank::Seven], 17),
        (&[Rank::Ace, Rank::King], 21),
        (&[Rank::Ace, Rank::Ace], 12),
        (&[Rank::Ace, Rank::Ace, Rank::Nine], 21),
        (&[Rank::Ten, Rank::King, Rank::Five], 25),
        (&[Rank::Ace, Rank::Six, Rank::Ace, Rank::Nine], 17),
    ];
    for (ranks, expected) in cases {
        assert_eq!(classic_hand_of(ranks).score(), expected, "{ranks:?}");
        assert_eq!(hand_of(ranks).score(), expected, "{ranks:?}");
    }
}

/// Расхождение политик: {Ten, Ace, Ace}.
#[test]
fn scoring_policies_diverge_on_ten_ace_ace() {
    let ranks = [Rank::Ten, Rank::Ace, Rank::Ace];
    assert_eq!(hand_of(&ranks).score(), 12);

    let classic = classic_hand_of(&ranks);
    assert_eq!(classic.score(), 22);
    assert!(classic.is_bust());
}

#[test]
fn hand_tracks_running_totals() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);

    hand.add_card(c(Rank::Ace));
    hand.add_card(c(Rank::Queen));
    hand.add_card(c(Rank::Ace));
    hand.add_card(c(Rank::Four));

    assert_eq!(hand.len(), 4);
    assert_eq!(hand.ace_count(), 2);
    assert_eq!(hand.nonace_total(), 14);
    assert_eq!(hand.score(), 16);
    assert!(!hand.is_soft());

    assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).score(), 17);
    assert!(hand_of(&[Rank::Ace, Rank::Six]).is_soft());

    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
    assert_eq!(hand.ace_count(), 0);
}

#[test]
fn hand_display_lists_cards_line_by_line() {
    let hand = Hand::from_cards([
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Clubs),
    ]);
    assert_eq!(hand.to_string(), "Ace of Hearts\nTen of Clubs");
}

#[test]
fn participant_receives_cards() {
    let mut p = Participant::human("Matt", ScoringPolicy::BestTotal);
    assert_eq!(p.kind, ParticipantKind::Human);
    assert!(!p.is_dealer());
    assert_eq!(p.to_string(), "Matt");

    p.deal_card(Card::new(Rank::Nine, Suit::Hearts));
    p.deal_card(Card::new(Rank::Nine, Suit::Clubs));
    assert_eq!(p.hand.len(), 2);
    assert_eq!(p.score(), 18);

    let d = Participant::dealer("Dealer", ScoringPolicy::Classic);
    assert!(d.is_dealer());
    assert_eq!(d.hand.scoring(), ScoringPolicy::Classic);
}

#[test]
fn round_config_defaults() {
    let cfg = RoundConfig::default();
    assert_eq!(cfg.player_name, "Player");
    assert_eq!(cfg.dealer_name, "Dealer");
    assert_eq!(cfg.scoring, ScoringPolicy::BestTotal);
    assert_eq!(cfg.dealer_policy, DealerPolicy::ChasePlayer);
}
