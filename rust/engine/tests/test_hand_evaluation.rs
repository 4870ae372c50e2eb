use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::hand::evaluate_hand;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn highest_card_wins_across_hole_and_board() {
    let hole = [card(Rank::Seven, Suit::Clubs), card(Rank::Two, Suit::Hearts)];
    let board = [
        card(Rank::King, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
    ];
    let strength = evaluate_hand(&hole, &board);
    assert_eq!(strength.value, 13);
}

#[test]
fn ace_ranks_highest() {
    let hole = [card(Rank::Ace, Suit::Hearts), card(Rank::Three, Suit::Clubs)];
    let strength = evaluate_hand(&hole, &[]);
    assert_eq!(strength.value, 14);
}

#[test]
fn pairs_do_not_outrank_a_higher_card() {
    // The evaluator only looks at the top card: a pair of twos loses to a
    // bare king, and equal top cards tie.
    let pair = [card(Rank::Two, Suit::Clubs), card(Rank::Two, Suit::Spades)];
    let high = [card(Rank::King, Suit::Hearts), card(Rank::Five, Suit::Clubs)];
    assert!(evaluate_hand(&high, &[]) > evaluate_hand(&pair, &[]));

    let other_high = [card(Rank::King, Suit::Clubs), card(Rank::Nine, Suit::Spades)];
    assert_eq!(evaluate_hand(&high, &[]), evaluate_hand(&other_high, &[]));
}

#[test]
fn empty_hand_evaluates_to_zero() {
    let strength = evaluate_hand(&[], &[]);
    assert_eq!(strength.value, 0);
}

#[test]
fn card_values_follow_ace_high_ordering() {
    assert_eq!(card(Rank::Two, Suit::Clubs).value(), 2);
    assert_eq!(card(Rank::Ten, Suit::Clubs).value(), 10);
    assert_eq!(card(Rank::Jack, Suit::Clubs).value(), 11);
    assert_eq!(card(Rank::Queen, Suit::Clubs).value(), 12);
    assert_eq!(card(Rank::King, Suit::Clubs).value(), 13);
    assert_eq!(card(Rank::Ace, Suit::Clubs).value(), 14);
}

#[test]
fn rank_from_ordinal_round_trips() {
    for v in 2u8..=14 {
        assert_eq!(Rank::from_u8(v) as u8, v);
    }
}
