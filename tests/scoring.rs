//! Hand scoring integration tests.

use cribrs::{
    Card, Hand, Rank, Run, ScoreBreakdown, ScoreError, Suit, score_cards, score_hand,
    unique_combinations,
};

fn hand(cards: &str) -> Hand {
    cards.parse().unwrap()
}

fn crib(cards: &str) -> Hand {
    Hand::from_cards(hand(cards).cards().iter().copied(), true).unwrap()
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn maximal_hand_scores_29() {
    let score = score_hand(&hand("5H 5C 5S JD"), card("5D")).unwrap();
    assert_eq!(
        score,
        ScoreBreakdown {
            fifteens: 8,
            pairs: 6,
            run: None,
            four_card_flush: false,
            five_card_flush: false,
            nobs: 1,
        }
    );
    assert_eq!(score.fifteen_points(), 16);
    assert_eq!(score.pair_points(), 12);
    assert_eq!(score.nobs_points(), 1);
    assert_eq!(score.total(), 29);
}

#[test]
fn even_cards_without_a_run_score_nothing() {
    let score = score_hand(&hand("2S 4H 6D 8C"), card("KC")).unwrap();
    assert_eq!(score, ScoreBreakdown::default());
    assert_eq!(score.total(), 0);
}

#[test]
fn two_fifteens_and_a_run_of_three() {
    let score = score_hand(&hand("5S 6S 7H KD"), card("QC")).unwrap();
    assert_eq!(score.fifteens, 2);
    assert_eq!(
        score.run,
        Some(Run {
            length: 3,
            multiplicity: 1
        })
    );
    assert_eq!(score.total(), 7);
}

#[test]
fn double_run_of_four() {
    let score = score_hand(&hand("4S 4H 5D 6C"), card("3S")).unwrap();
    assert_eq!(
        score.run,
        Some(Run {
            length: 4,
            multiplicity: 2
        })
    );
    assert_eq!(score.run_points(), 8);
    assert_eq!(score.pairs, 1);
    assert_eq!(score.fifteens, 2);
    assert_eq!(score.total(), 14);
}

#[test]
fn double_double_run() {
    let score = score_hand(&hand("3S 3H 4D 4C"), card("5S")).unwrap();
    assert_eq!(
        score.run,
        Some(Run {
            length: 3,
            multiplicity: 4
        })
    );
    assert_eq!(score.run_points(), 12);
    assert_eq!(score.pairs, 2);
    assert_eq!(score.fifteens, 2);
    assert_eq!(score.total(), 20);
}

#[test]
fn triple_run() {
    let score = score_hand(&hand("3S 3H 3D 4C"), card("5S")).unwrap();
    assert_eq!(
        score.run,
        Some(Run {
            length: 3,
            multiplicity: 3
        })
    );
    assert_eq!(score.pairs, 3);
    assert_eq!(score.fifteens, 3);
    assert_eq!(score.total(), 21);
}

#[test]
fn run_of_five_with_ace_low() {
    let score = score_hand(&hand("AH 2C 3D 4S"), card("5H")).unwrap();
    assert_eq!(
        score.run,
        Some(Run {
            length: 5,
            multiplicity: 1
        })
    );
    // Only all five cards together sum to fifteen.
    assert_eq!(score.fifteens, 1);
    assert_eq!(score.total(), 7);
}

#[test]
fn queen_king_ace_is_not_a_run() {
    let score = score_hand(&hand("QH KC AD 7S"), card("9C")).unwrap();
    assert_eq!(score.run, None);
}

#[test]
fn four_card_flush_only_counts_outside_the_crib() {
    let shared = card("KS");

    let score = score_hand(&hand("2H 4H 6H 8H"), shared).unwrap();
    assert!(score.four_card_flush);
    assert!(!score.five_card_flush);
    assert_eq!(score.total(), 4);

    let score = score_hand(&crib("2H 4H 6H 8H"), shared).unwrap();
    assert!(!score.four_card_flush);
    assert_eq!(score.flush_points(), 0);
    assert_eq!(score.total(), 0);
}

#[test]
fn five_card_flush_counts_in_hand_and_crib() {
    let shared = card("10H");
    for held in [hand("2H 4H 6H 8H"), crib("2H 4H 6H 8H")] {
        let score = score_hand(&held, shared).unwrap();
        assert!(score.five_card_flush);
        assert!(!score.four_card_flush);
        assert_eq!(score.total(), 5);
    }
}

#[test]
fn shared_card_alone_does_not_make_a_flush() {
    let score = score_hand(&hand("2H 4H 6H 8C"), card("10H")).unwrap();
    assert_eq!(score.flush_points(), 0);
}

#[test]
fn nobs_for_jack_matching_shared_suit() {
    let score = score_hand(&hand("JC 2H 4D 6S"), card("8C")).unwrap();
    assert_eq!(score.nobs, 1);
    assert_eq!(score.total(), 1);

    let score = score_hand(&hand("JC 2H 4D 6S"), card("8D")).unwrap();
    assert_eq!(score.nobs, 0);
}

#[test]
fn shared_jack_never_scores_nobs() {
    let score = score_hand(&hand("JS 2H 4D 6C"), card("JC")).unwrap();
    assert_eq!(score.nobs, 0);
    assert_eq!(score.pairs, 1);
    assert_eq!(score.total(), 2);
}

#[test]
fn scoring_is_pure() {
    let held = hand("5H 5C 5S JD");
    let before = held.clone();
    let first = score_hand(&held, card("5D")).unwrap();
    let second = held.score(card("5D")).unwrap();
    assert_eq!(first, second);
    assert_eq!(held, before);
    assert_eq!(held.len(), 4);
}

#[test]
fn scoring_errors() {
    assert_eq!(
        score_hand(&hand("5H 5C 5S"), card("5D")).unwrap_err(),
        ScoreError::HandSize(3)
    );
    assert_eq!(
        score_hand(&hand("5H 5C 5S JD 2C"), card("5D")).unwrap_err(),
        ScoreError::HandSize(5)
    );
    assert_eq!(
        score_hand(&hand("5H 5C 5S JD"), card("JD")).unwrap_err(),
        ScoreError::SharedCardInHand(card("JD"))
    );
    assert_eq!(
        score_cards(&[card("5H"), card("5H"), card("5C"), card("JD")], card("5D"), false)
            .unwrap_err(),
        ScoreError::DuplicateCard(card("5H"))
    );
}

#[test]
fn score_cards_matches_score_hand() {
    let held = [
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Eight, Suit::Clubs),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let shared = Card::new(Rank::Six, Suit::Spades);
    let by_cards = score_cards(&held, shared, false).unwrap();
    let by_hand = score_hand(&Hand::from_cards(held, false).unwrap(), shared).unwrap();
    assert_eq!(by_cards, by_hand);
    // 6-7-8-9 twice, one pair, 7+8 twice, 6+9 once.
    assert_eq!(by_cards.run_points(), 8);
    assert_eq!(by_cards.total(), 16);
}

#[test]
fn impossible_totals_never_occur() {
    let spades: Vec<Card> = Rank::ALL
        .into_iter()
        .map(|rank| Card::new(rank, Suit::Spades))
        .collect();
    let others: Vec<Card> = [Suit::Hearts, Suit::Clubs, Suit::Diamonds]
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect();

    let keeps = unique_combinations(&spades, 4, 4).unwrap();
    for keep in &keeps {
        let held = keep.to_vec();
        for &shared in &others {
            let total = score_cards(&held, shared, false).unwrap().total();
            assert!(total <= 29);
            assert!(
                ![19, 25, 26, 27].contains(&total),
                "{held:?} + {shared} scored {total}"
            );
        }
    }
}

#[test]
fn fifteens_match_enumerated_subsets() {
    for (held, shared) in [
        ("5H 5C 5S JD", "5D"),
        ("2S 3H 4D 6C", "9S"),
        ("7C 8C 8H 9C", "6S"),
        ("10H JH QH KH", "5H"),
    ] {
        let held = hand(held);
        let shared = card(shared);
        let mut five = held.cards().to_vec();
        five.push(shared);
        let enumerated = unique_combinations(&five, 1, 5)
            .unwrap()
            .iter()
            .filter(|subset| subset.iter().map(|c| u32::from(c.value())).sum::<u32>() == 15)
            .count();
        assert_eq!(
            usize::from(score_hand(&held, shared).unwrap().fifteens),
            enumerated
        );
    }
}
